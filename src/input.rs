use crate::constants::SWIPE_THRESHOLD;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Other,
}

/// Host input routed to a controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { x: f32 },
    PointerMove { x: f32 },
    PointerUp { x: f32 },
    PointerCancel,
    TouchStart { x: f32 },
    TouchMove { x: f32 },
    TouchEnd { x: f32 },
    PointerEnter,
    PointerLeave,
    KeyDown(Key),
    IndicatorClick(usize),
    PrevClick,
    NextClick,
    VisibilityChange { visible: bool },
}

/// What the controller did with an input event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputOutcome {
    /// A navigation was accepted and a transition started
    pub navigated: bool,
    /// The host should suppress the event's default action (scrolling, link follow)
    pub prevent_default: bool,
}

impl InputOutcome {
    pub fn ignored() -> Self {
        Self::default()
    }

    pub fn handled(navigated: bool) -> Self {
        Self { navigated, prevent_default: true }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Next,
    Previous,
}

/// Tracks one horizontal drag from press to release.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeTracker {
    start_x: Option<f32>,
    last_x: f32,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }

    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
        self.last_x = x;
    }

    pub fn update(&mut self, x: f32) {
        if self.start_x.is_some() {
            self.last_x = x;
        }
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
    }

    /// Horizontal travel of the gesture in progress, zero when idle.
    pub fn drag_offset(&self) -> f32 {
        self.start_x.map_or(0.0, |start| self.last_x - start)
    }

    /// Ends the gesture at `x`. Dragging left (positive delta) past the
    /// threshold means next, dragging right means previous.
    pub fn finish(&mut self, x: f32) -> Option<SwipeDirection> {
        let start = self.start_x.take()?;
        self.last_x = x;
        classify(start - x)
    }
}

pub fn classify(delta: f32) -> Option<SwipeDirection> {
    if delta.abs() <= SWIPE_THRESHOLD {
        None
    } else if delta > 0.0 {
        Some(SwipeDirection::Next)
    } else {
        Some(SwipeDirection::Previous)
    }
}
