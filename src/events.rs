//! Lifecycle notifications emitted by a controller.

use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// Handle returned by [`EventNotifier::subscribe`]
    pub struct ListenerId;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    TransitionStart { from: usize, to: usize },
    TransitionEnd { from: usize, to: usize },
}

impl CarouselEvent {
    /// Wire name of the notification.
    pub fn name(&self) -> &'static str {
        match self {
            CarouselEvent::TransitionStart { .. } => "transition-start",
            CarouselEvent::TransitionEnd { .. } => "transition-end",
        }
    }

    pub fn from_index(&self) -> usize {
        match *self {
            CarouselEvent::TransitionStart { from, .. } | CarouselEvent::TransitionEnd { from, .. } => from,
        }
    }

    pub fn to_index(&self) -> usize {
        match *self {
            CarouselEvent::TransitionStart { to, .. } | CarouselEvent::TransitionEnd { to, .. } => to,
        }
    }
}

pub type Listener = Box<dyn FnMut(&CarouselEvent)>;

#[derive(Default)]
pub struct EventNotifier {
    listeners: SlotMap<ListenerId, Listener>,
}

impl EventNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&CarouselEvent) + 'static) -> ListenerId {
        self.listeners.insert(Box::new(listener))
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id).is_some()
    }

    pub fn emit(&mut self, event: CarouselEvent) {
        for listener in self.listeners.values_mut() {
            listener(&event);
        }
    }

    pub fn clear(&mut self) {
        self.listeners.clear();
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}
