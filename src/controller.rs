use std::time::Duration;

use tracing::{debug, trace};

use crate::constants::*;
use crate::element::{AttributeJournal, Element, ElementId, NodeRef};
use crate::events::{CarouselEvent, EventNotifier, ListenerId};
use crate::input::{InputEvent, InputOutcome, Key, SwipeDirection, SwipeTracker};
use crate::options::CarouselOptions;
use crate::pane::{Indicator, Pane, PaneRegistry};
use crate::scheduler::{Scheduler, TaskId, TaskKind};
use crate::state::ControllerState;

/// The swap in progress, for hosts that animate it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionView {
    pub from: usize,
    pub to: usize,
    /// 0.0 when the swap starts, 1.0 when it completes
    pub progress: f32,
}

/// Slideshow state machine for one carousel element.
///
/// Navigation requests that cannot be honored (out of range, already there,
/// mid-transition, destroyed) are silently dropped and report `false`.
pub struct Controller {
    element: Element,
    panes: PaneRegistry,
    options: CarouselOptions,

    state: ControllerState,
    current_index: usize,
    playing: bool,

    scheduler: Scheduler,
    autoplay_task: Option<TaskId>,
    transition_task: Option<TaskId>,
    last_transition: Option<(usize, usize)>,

    notifier: EventNotifier,
    journal: AttributeJournal,
    swipe: SwipeTracker,
}

impl Controller {
    pub fn new(mut element: Element, options: CarouselOptions) -> Self {
        let (panes, current_index) = PaneRegistry::discover(&mut element);

        let mut controller = Self {
            element,
            panes,
            options,
            state: ControllerState::Idle,
            current_index,
            playing: false,
            scheduler: Scheduler::new(),
            autoplay_task: None,
            transition_task: None,
            last_transition: None,
            notifier: EventNotifier::new(),
            journal: AttributeJournal::new(),
            swipe: SwipeTracker::new(),
        };
        controller.apply_accessibility();

        debug!(
            element = %controller.id(),
            panes = controller.pane_count(),
            current = current_index,
            "carousel initialized"
        );

        if controller.options.autoplay_enabled() {
            controller.start();
        }
        controller
    }

    fn apply_accessibility(&mut self) {
        let element = &mut self.element;
        let journal = &mut self.journal;

        journal.set(element, NodeRef::Root, "role", "region");
        journal.set(element, NodeRef::Root, "aria-label", REGION_LABEL);
        journal.set(element, NodeRef::Root, "tabindex", "0");
        // Without an inner region the root announces the change
        let live_region = if element.inner.is_some() { NodeRef::Inner } else { NodeRef::Root };
        journal.set(element, live_region, "aria-live", "polite");

        if self.options.controls {
            journal.set(element, NodeRef::PrevControl, "aria-label", PREVIOUS_LABEL);
            journal.set(element, NodeRef::NextControl, "aria-label", NEXT_LABEL);
        }
        if self.options.indicators {
            for index in 0..element.indicators.len() {
                let label = format!("Go to slide {}", index + 1);
                journal.set(element, NodeRef::Indicator(index), "role", "button");
                journal.set(element, NodeRef::Indicator(index), "aria-label", &label);
            }
        }
    }

    pub fn id(&self) -> ElementId {
        self.element.id()
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_transitioning(&self) -> bool {
        self.state == ControllerState::Transitioning
    }

    pub fn is_destroyed(&self) -> bool {
        self.state == ControllerState::Destroyed
    }

    pub fn pane_count(&self) -> usize {
        self.panes.len()
    }

    pub fn panes(&self) -> &[Pane] {
        self.panes.panes()
    }

    pub fn indicators(&self) -> &[Indicator] {
        self.panes.indicators()
    }

    /// Virtual time elapsed since construction.
    pub fn elapsed(&self) -> Duration {
        self.scheduler.now()
    }

    /// Horizontal travel of the swipe in progress.
    pub fn drag_offset(&self) -> f32 {
        self.swipe.drag_offset()
    }

    pub fn transition(&self) -> Option<TransitionView> {
        let task = self.transition_task?;
        let (from, to) = self.last_transition?;
        let remaining = self.scheduler.remaining(task)?;
        let total = self.options.transition.as_secs_f32();
        let progress = if total > 0.0 {
            1.0 - (remaining.as_secs_f32() / total).min(1.0)
        } else {
            1.0
        };
        Some(TransitionView { from, to, progress })
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&CarouselEvent) + 'static) -> ListenerId {
        self.notifier.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.notifier.unsubscribe(id)
    }

    // --- Navigation ---

    pub fn go_to(&mut self, index: usize) -> bool {
        if !self.state.accepts_navigation() || index >= self.pane_count() || index == self.current_index {
            trace!(element = %self.id(), index, state = ?self.state, "navigation dropped");
            return false;
        }
        self.begin_transition(index);
        true
    }

    pub fn next(&mut self) -> bool {
        match self.step(true) {
            Some(target) => self.go_to(target),
            None => false,
        }
    }

    pub fn previous(&mut self) -> bool {
        match self.step(false) {
            Some(target) => self.go_to(target),
            None => false,
        }
    }

    fn step(&self, forward: bool) -> Option<usize> {
        let count = self.pane_count();
        if count == 0 {
            return None;
        }
        let current = self.current_index;
        let target = match (forward, self.options.wrap) {
            (true, true) => (current + 1) % count,
            (false, true) => (current + count - 1) % count,
            (true, false) => (current + 1).min(count - 1),
            (false, false) => current.saturating_sub(1),
        };
        (target != current).then_some(target)
    }

    fn begin_transition(&mut self, to: usize) {
        let from = self.current_index;
        self.state = ControllerState::Transitioning;
        self.notifier.emit(CarouselEvent::TransitionStart { from, to });

        self.panes.swap_active(from, to, &mut self.element);
        self.current_index = to;
        self.last_transition = Some((from, to));

        let task = self.scheduler.schedule_once(self.options.transition, TaskKind::TransitionEnd { from, to });
        self.transition_task = Some(task);

        debug!(element = %self.id(), from, to, "transition started");
    }

    fn finish_transition(&mut self, from: usize, to: usize) {
        self.transition_task = None;
        if self.state != ControllerState::Transitioning {
            return;
        }
        self.state = ControllerState::Idle;
        self.notifier.emit(CarouselEvent::TransitionEnd { from, to });
        debug!(element = %self.id(), from, to, "transition finished");
    }

    // --- Autoplay ---

    pub fn start(&mut self) {
        if self.playing
            || self.is_destroyed()
            || !self.options.autoplay_enabled()
            || self.pane_count() <= 1
        {
            return;
        }
        self.playing = true;
        self.autoplay_task = Some(self.scheduler.schedule_repeating(self.options.interval, TaskKind::Autoplay));
        debug!(element = %self.id(), interval_ms = self.options.interval.as_millis() as u64, "autoplay started");
    }

    pub fn pause(&mut self) {
        if !self.playing {
            return;
        }
        self.playing = false;
        if let Some(task) = self.autoplay_task.take() {
            self.scheduler.cancel(task);
        }
        debug!(element = %self.id(), "autoplay paused");
    }

    // --- Lifecycle ---

    /// Stops all timers, drops every subscriber and restores the attributes
    /// added at construction. Terminal.
    pub fn destroy(&mut self) {
        if self.is_destroyed() {
            return;
        }
        self.pause();
        self.scheduler.cancel_all();
        self.transition_task = None;
        self.notifier.clear();
        self.swipe.cancel();
        self.journal.restore(&mut self.element);
        self.state = ControllerState::Destroyed;
        debug!(element = %self.id(), "carousel destroyed");
    }

    /// Hands the markup back to the host.
    pub fn into_element(mut self) -> Element {
        self.destroy();
        self.element
    }

    /// Advances the controller's clock by `dt`, firing every task that falls
    /// due in order.
    pub fn tick(&mut self, dt: Duration) {
        if self.is_destroyed() {
            return;
        }
        let deadline = self.scheduler.now() + dt;
        while let Some((_, kind)) = self.scheduler.pop_due(deadline) {
            match kind {
                TaskKind::Autoplay => {
                    if !self.is_transitioning() {
                        self.next();
                    }
                }
                TaskKind::TransitionEnd { from, to } => self.finish_transition(from, to),
            }
        }
        self.scheduler.settle(deadline);
    }

    // --- Input ---

    pub fn handle_input(&mut self, event: InputEvent) -> InputOutcome {
        if self.is_destroyed() {
            return InputOutcome::ignored();
        }
        trace!(element = %self.id(), ?event, "input");

        match event {
            InputEvent::PointerDown { x } | InputEvent::TouchStart { x } if self.options.touch => {
                self.swipe.begin(x);
                InputOutcome::ignored()
            }
            InputEvent::PointerMove { x } | InputEvent::TouchMove { x } if self.options.touch => {
                self.swipe.update(x);
                InputOutcome::ignored()
            }
            InputEvent::PointerUp { x } | InputEvent::TouchEnd { x } if self.options.touch => {
                let navigated = match self.swipe.finish(x) {
                    Some(SwipeDirection::Next) => self.next(),
                    Some(SwipeDirection::Previous) => self.previous(),
                    None => false,
                };
                self.user_navigation(navigated, false)
            }
            InputEvent::PointerCancel => {
                self.swipe.cancel();
                InputOutcome::ignored()
            }
            InputEvent::KeyDown(key) if self.options.keyboard => match key {
                Key::ArrowLeft => {
                    let navigated = self.previous();
                    self.user_navigation(navigated, true)
                }
                Key::ArrowRight => {
                    let navigated = self.next();
                    self.user_navigation(navigated, true)
                }
                Key::Other => InputOutcome::ignored(),
            },
            InputEvent::IndicatorClick(index) if self.options.indicators && self.panes.has_indicators() => {
                let navigated = self.go_to(index);
                self.user_navigation(navigated, true)
            }
            InputEvent::PrevClick if self.options.controls => {
                let navigated = self.previous();
                self.user_navigation(navigated, true)
            }
            InputEvent::NextClick if self.options.controls => {
                let navigated = self.next();
                self.user_navigation(navigated, true)
            }
            InputEvent::PointerEnter if self.options.pauses_on_hover() => {
                self.pause();
                InputOutcome::ignored()
            }
            InputEvent::PointerLeave if self.options.pauses_on_hover() => {
                self.start();
                InputOutcome::ignored()
            }
            InputEvent::VisibilityChange { visible } => {
                if visible {
                    self.start();
                } else {
                    self.pause();
                }
                InputOutcome::ignored()
            }
            _ => InputOutcome::ignored(),
        }
    }

    // Autoplay keeps its own schedule across user navigation
    fn user_navigation(&self, navigated: bool, prevent_default: bool) -> InputOutcome {
        InputOutcome { navigated, prevent_default }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::PauseMode;
    use std::cell::RefCell;
    use std::rc::Rc;

    const FRAME: Duration = Duration::from_millis(16);

    fn manual(count: usize) -> Controller {
        let element = Element::new(ElementId(1)).with_panes(count).with_indicators().with_controls();
        Controller::new(element, CarouselOptions { interval: Duration::ZERO, ..CarouselOptions::default() })
    }

    fn record(controller: &mut Controller) -> Rc<RefCell<Vec<CarouselEvent>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        controller.subscribe(move |event| sink.borrow_mut().push(*event));
        events
    }

    fn settle(controller: &mut Controller) {
        controller.tick(TRANSITION_DURATION);
    }

    #[test]
    fn go_to_fires_start_then_end_after_the_transition() {
        let mut carousel = manual(4);
        let events = record(&mut carousel);

        assert!(carousel.go_to(2));
        assert_eq!(carousel.current_index(), 2);
        assert!(carousel.is_transitioning());
        assert_eq!(*events.borrow(), vec![CarouselEvent::TransitionStart { from: 0, to: 2 }]);

        carousel.tick(Duration::from_millis(599));
        assert!(carousel.is_transitioning());
        carousel.tick(Duration::from_millis(1));
        assert_eq!(carousel.state(), ControllerState::Idle);
        assert_eq!(
            *events.borrow(),
            vec![
                CarouselEvent::TransitionStart { from: 0, to: 2 },
                CarouselEvent::TransitionEnd { from: 0, to: 2 },
            ]
        );
    }

    #[test]
    fn active_flags_follow_the_current_index() {
        let mut carousel = manual(3);
        carousel.go_to(1);

        let active: Vec<bool> = carousel.panes().iter().map(|p| p.active).collect();
        assert_eq!(active, vec![false, true, false]);
        assert!(carousel.indicators()[1].active);
        assert!(carousel.element().panes[1].active);
        assert!(!carousel.element().indicators[0].active);
    }

    #[test]
    fn navigation_during_a_transition_is_dropped() {
        let mut carousel = manual(4);
        carousel.go_to(1);
        let events = record(&mut carousel);

        assert!(!carousel.go_to(3));
        assert!(!carousel.next());
        assert!(!carousel.previous());
        assert_eq!(carousel.current_index(), 1);
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn invalid_targets_are_silent_no_ops() {
        let mut carousel = manual(3);
        let events = record(&mut carousel);

        assert!(!carousel.go_to(3));
        assert!(!carousel.go_to(0));
        assert_eq!(carousel.state(), ControllerState::Idle);
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn wrap_cycles_back_to_the_start() {
        let mut carousel = manual(5);
        for _ in 0..5 {
            assert!(carousel.next());
            settle(&mut carousel);
        }
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn without_wrap_the_ends_are_walls() {
        let element = Element::new(ElementId(1)).with_panes(3);
        let mut carousel = Controller::new(
            element,
            CarouselOptions { interval: Duration::ZERO, wrap: false, ..CarouselOptions::default() },
        );

        assert!(!carousel.previous());
        carousel.go_to(2);
        settle(&mut carousel);
        assert!(!carousel.next());
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn previous_wraps_below_zero() {
        let mut carousel = manual(3);
        assert!(carousel.next());
        settle(&mut carousel);
        assert_eq!(carousel.current_index(), 1);

        assert!(carousel.previous());
        settle(&mut carousel);
        assert_eq!(carousel.current_index(), 0);

        assert!(carousel.previous());
        settle(&mut carousel);
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn single_pane_never_moves_or_plays() {
        let element = Element::new(ElementId(1)).with_panes(1);
        let mut carousel = Controller::new(element, CarouselOptions::default());
        assert!(!carousel.is_playing());
        assert!(!carousel.next());
        assert!(!carousel.previous());
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut carousel = manual(0);
        assert!(!carousel.next());
        assert!(!carousel.go_to(0));
        carousel.start();
        assert!(!carousel.is_playing());
    }

    #[test]
    fn autoplay_advances_every_interval() {
        let element = Element::new(ElementId(1)).with_panes(3);
        let mut carousel = Controller::new(
            element,
            CarouselOptions { interval: Duration::from_millis(1000), ..CarouselOptions::default() },
        );
        assert!(carousel.is_playing());

        carousel.tick(Duration::from_millis(999));
        assert_eq!(carousel.current_index(), 0);
        carousel.tick(Duration::from_millis(1));
        assert_eq!(carousel.current_index(), 1);

        // One long frame spanning two periods still completes the first swap
        carousel.tick(Duration::from_millis(2000));
        assert_eq!(carousel.current_index(), 0);
        assert!(carousel.is_transitioning());
        carousel.tick(TRANSITION_DURATION);
        assert!(!carousel.is_transitioning());
    }

    #[test]
    fn start_is_idempotent_and_pause_resume_works() {
        let element = Element::new(ElementId(1)).with_panes(3);
        let mut carousel = Controller::new(
            element,
            CarouselOptions { interval: Duration::from_millis(1000), ..CarouselOptions::default() },
        );
        carousel.start();
        carousel.start();
        assert_eq!(carousel.scheduler.len(), 1);

        carousel.pause();
        carousel.pause();
        assert!(!carousel.is_playing());
        carousel.tick(Duration::from_millis(3000));
        assert_eq!(carousel.current_index(), 0);

        carousel.start();
        carousel.tick(Duration::from_millis(1000));
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn autoplay_tick_is_skipped_while_transitioning() {
        let element = Element::new(ElementId(1)).with_panes(3);
        let mut carousel = Controller::new(
            element,
            CarouselOptions {
                interval: Duration::from_millis(1000),
                transition: Duration::from_millis(1500),
                ..CarouselOptions::default()
            },
        );
        carousel.tick(Duration::from_millis(1000));
        assert_eq!(carousel.current_index(), 1);
        // Second period lands mid-transition and is dropped
        carousel.tick(Duration::from_millis(1000));
        assert_eq!(carousel.current_index(), 1);
        carousel.tick(Duration::from_millis(1000));
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn swipe_left_goes_next_and_right_goes_previous() {
        let mut carousel = manual(3);

        carousel.handle_input(InputEvent::PointerDown { x: 200.0 });
        let outcome = carousel.handle_input(InputEvent::PointerUp { x: 140.0 });
        assert!(outcome.navigated);
        assert_eq!(carousel.current_index(), 1);
        settle(&mut carousel);

        carousel.handle_input(InputEvent::TouchStart { x: 100.0 });
        carousel.handle_input(InputEvent::TouchMove { x: 130.0 });
        assert_eq!(carousel.drag_offset(), 30.0);
        carousel.handle_input(InputEvent::TouchEnd { x: 160.0 });
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn short_drag_does_nothing() {
        let mut carousel = manual(3);
        carousel.handle_input(InputEvent::PointerDown { x: 100.0 });
        let outcome = carousel.handle_input(InputEvent::PointerUp { x: 60.0 });
        assert_eq!(outcome, InputOutcome::ignored());
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn touch_disabled_ignores_swipes() {
        let element = Element::new(ElementId(1)).with_panes(3);
        let mut carousel = Controller::new(
            element,
            CarouselOptions { interval: Duration::ZERO, touch: false, ..CarouselOptions::default() },
        );
        carousel.handle_input(InputEvent::PointerDown { x: 300.0 });
        carousel.handle_input(InputEvent::PointerUp { x: 0.0 });
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn arrow_keys_navigate_and_suppress_scrolling() {
        let mut carousel = manual(3);
        let outcome = carousel.handle_input(InputEvent::KeyDown(Key::ArrowLeft));
        assert_eq!(outcome, InputOutcome::handled(true));
        assert_eq!(carousel.current_index(), 2);

        // Still suppressed while the swap is running, just not honored
        let outcome = carousel.handle_input(InputEvent::KeyDown(Key::ArrowRight));
        assert_eq!(outcome, InputOutcome::handled(false));

        let outcome = carousel.handle_input(InputEvent::KeyDown(Key::Other));
        assert!(!outcome.prevent_default);
    }

    #[test]
    fn keyboard_disabled_leaves_keys_alone() {
        let element = Element::new(ElementId(1)).with_panes(3);
        let mut carousel = Controller::new(
            element,
            CarouselOptions { interval: Duration::ZERO, keyboard: false, ..CarouselOptions::default() },
        );
        let outcome = carousel.handle_input(InputEvent::KeyDown(Key::ArrowRight));
        assert_eq!(outcome, InputOutcome::ignored());
    }

    #[test]
    fn clicks_route_to_controls_and_indicators() {
        let mut carousel = manual(4);
        assert!(carousel.handle_input(InputEvent::IndicatorClick(3)).navigated);
        settle(&mut carousel);
        assert!(carousel.handle_input(InputEvent::NextClick).navigated);
        settle(&mut carousel);
        assert_eq!(carousel.current_index(), 0);
        assert!(carousel.handle_input(InputEvent::PrevClick).navigated);
        assert_eq!(carousel.current_index(), 3);
    }

    #[test]
    fn indicator_clicks_need_indicators() {
        let element = Element::new(ElementId(1)).with_panes(3);
        let mut carousel = Controller::new(element, CarouselOptions { interval: Duration::ZERO, ..CarouselOptions::default() });
        assert!(!carousel.handle_input(InputEvent::IndicatorClick(2)).navigated);
    }

    #[test]
    fn user_navigation_keeps_the_autoplay_schedule() {
        let element = Element::new(ElementId(1)).with_panes(4).with_controls();
        let mut carousel = Controller::new(
            element,
            CarouselOptions { interval: Duration::from_millis(1000), ..CarouselOptions::default() },
        );
        carousel.tick(Duration::from_millis(200));
        assert!(carousel.handle_input(InputEvent::NextClick).navigated);
        assert_eq!(carousel.current_index(), 1);

        // The click's transition ends at 800ms, autoplay still fires at 1000ms
        carousel.tick(Duration::from_millis(800));
        assert_eq!(carousel.current_index(), 2);
        assert!(carousel.is_playing());
    }

    #[test]
    fn hover_pauses_only_in_hover_mode() {
        let element = Element::new(ElementId(1)).with_panes(3);
        let mut carousel = Controller::new(element.clone(), CarouselOptions::default());
        carousel.handle_input(InputEvent::PointerEnter);
        assert!(!carousel.is_playing());
        carousel.handle_input(InputEvent::PointerLeave);
        assert!(carousel.is_playing());

        let mut steady = Controller::new(element, CarouselOptions { pause: PauseMode::Never, ..CarouselOptions::default() });
        steady.handle_input(InputEvent::PointerEnter);
        assert!(steady.is_playing());
    }

    #[test]
    fn visibility_pauses_and_resumes() {
        let element = Element::new(ElementId(1)).with_panes(3);
        let mut carousel = Controller::new(element, CarouselOptions::default());
        carousel.handle_input(InputEvent::VisibilityChange { visible: false });
        assert!(!carousel.is_playing());
        carousel.handle_input(InputEvent::VisibilityChange { visible: true });
        assert!(carousel.is_playing());

        let mut still = manual(3);
        still.handle_input(InputEvent::VisibilityChange { visible: true });
        assert!(!still.is_playing(), "interval 0 never autoplays");
    }

    #[test]
    fn accessibility_attributes_are_added_and_restored() {
        let element = Element::new(ElementId(1))
            .with_attribute("aria-label", "Gallery")
            .with_inner()
            .with_panes(2)
            .with_indicators()
            .with_controls();
        let mut carousel = Controller::new(element, CarouselOptions::default());

        let root = &carousel.element().root;
        assert_eq!(root.attribute("role"), Some("region"));
        assert_eq!(root.attribute("aria-label"), Some(REGION_LABEL));
        assert_eq!(carousel.element().inner.as_ref().and_then(|n| n.attribute("aria-live")), Some("polite"));
        assert_eq!(carousel.element().indicators[1].attribute("aria-label"), Some("Go to slide 2"));
        assert_eq!(
            carousel.element().next_control.as_ref().and_then(|n| n.attribute("aria-label")),
            Some(NEXT_LABEL)
        );

        carousel.destroy();
        let root = &carousel.element().root;
        assert_eq!(root.attribute("aria-label"), Some("Gallery"));
        assert!(!root.has_attribute("role"));
        assert!(!root.has_attribute("tabindex"));
        assert!(!carousel.element().indicators[0].has_attribute("role"));
    }

    #[test]
    fn live_region_falls_back_to_the_root() {
        let element = Element::new(ElementId(1)).with_panes(2);
        let mut carousel = Controller::new(element, CarouselOptions::default());
        assert_eq!(carousel.element().root.attribute("aria-live"), Some("polite"));

        carousel.destroy();
        assert!(!carousel.element().root.has_attribute("aria-live"));

        let element = Element::new(ElementId(2)).with_attribute("aria-live", "off").with_panes(2);
        let mut carousel = Controller::new(element, CarouselOptions::default());
        assert_eq!(carousel.element().root.attribute("aria-live"), Some("polite"));
        carousel.destroy();
        assert_eq!(carousel.element().root.attribute("aria-live"), Some("off"));
    }

    #[test]
    fn destroy_cancels_timers_and_listeners() {
        let element = Element::new(ElementId(1)).with_panes(3);
        let mut carousel = Controller::new(
            element,
            CarouselOptions { interval: Duration::from_millis(1000), ..CarouselOptions::default() },
        );
        let events = record(&mut carousel);
        carousel.go_to(1);
        carousel.destroy();

        assert_eq!(carousel.state(), ControllerState::Destroyed);
        assert!(!carousel.is_playing());
        carousel.tick(Duration::from_secs(10));
        assert_eq!(events.borrow().len(), 1, "no transition-end after destroy");
        assert_eq!(carousel.current_index(), 1);

        assert!(!carousel.go_to(2));
        carousel.start();
        assert!(!carousel.is_playing());
        assert_eq!(carousel.handle_input(InputEvent::NextClick), InputOutcome::ignored());
    }

    #[test]
    fn transition_view_reports_progress() {
        let mut carousel = manual(3);
        assert!(carousel.transition().is_none());
        carousel.go_to(1);
        carousel.tick(Duration::from_millis(300));

        let view = carousel.transition().unwrap();
        assert_eq!((view.from, view.to), (0, 1));
        assert!((view.progress - 0.5).abs() < 1e-3);

        carousel.tick(Duration::from_millis(300));
        assert!(carousel.transition().is_none());
    }

    #[test]
    fn frame_sized_ticks_complete_a_transition() {
        let mut carousel = manual(2);
        carousel.next();
        for _ in 0..38 {
            carousel.tick(FRAME);
        }
        assert!(!carousel.is_transitioning());
    }
}
