//! Cancellable timers on a virtual clock.
//!
//! The host advances time explicitly. Tasks are popped one at a time in
//! deadline order and the clock is moved to each task's deadline before it is
//! handed out, so work scheduled while handling a task is timed from the
//! moment that task fired rather than from the end of the frame.

use std::time::Duration;

use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// Handle to a scheduled task
    pub struct TaskId;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    Autoplay,
    TransitionEnd { from: usize, to: usize },
}

struct Task {
    kind: TaskKind,
    due: Duration,
    period: Option<Duration>,
    // Insertion order breaks ties between equal deadlines
    seq: u64,
}

#[derive(Default)]
pub struct Scheduler {
    now: Duration,
    next_seq: u64,
    tasks: SlotMap<TaskId, Task>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn schedule_once(&mut self, delay: Duration, kind: TaskKind) -> TaskId {
        self.insert(delay, None, kind)
    }

    /// Schedules a task that fires every `period`. A zero period is raised to
    /// one millisecond so a single advance cannot spin forever.
    pub fn schedule_repeating(&mut self, period: Duration, kind: TaskKind) -> TaskId {
        let period = period.max(Duration::from_millis(1));
        self.insert(period, Some(period), kind)
    }

    fn insert(&mut self, delay: Duration, period: Option<Duration>, kind: TaskKind) -> TaskId {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.tasks.insert(Task { kind, due: self.now + delay, period, seq })
    }

    pub fn cancel(&mut self, id: TaskId) -> bool {
        self.tasks.remove(id).is_some()
    }

    pub fn cancel_all(&mut self) {
        self.tasks.clear();
    }

    pub fn is_scheduled(&self, id: TaskId) -> bool {
        self.tasks.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Time left before `id` fires, if it is still scheduled.
    pub fn remaining(&self, id: TaskId) -> Option<Duration> {
        self.tasks.get(id).map(|task| task.due.saturating_sub(self.now))
    }

    /// Pops the earliest task due at or before `deadline`, moving the clock to
    /// its due time. Repeating tasks are re-armed for their next period.
    pub fn pop_due(&mut self, deadline: Duration) -> Option<(TaskId, TaskKind)> {
        let (id, due) = self
            .tasks
            .iter()
            .filter(|(_, task)| task.due <= deadline)
            .min_by_key(|(_, task)| (task.due, task.seq))
            .map(|(id, task)| (id, task.due))?;

        self.now = self.now.max(due);

        let seq = self.next_seq;
        let task = self.tasks.get_mut(id)?;
        let kind = task.kind;
        match task.period {
            Some(period) => {
                task.due += period;
                task.seq = seq;
                self.next_seq += 1;
            }
            None => {
                self.tasks.remove(id);
            }
        }
        Some((id, kind))
    }

    /// Moves the clock to `deadline` once every due task has been popped.
    pub fn settle(&mut self, deadline: Duration) {
        self.now = self.now.max(deadline);
    }
}
