//! Headless slideshow controller.
//!
//! A [`Controller`] cycles through the panes of one carousel [`Element`],
//! driven by navigation calls, host input and an optional autoplay timer.
//! Time only moves when the host calls [`Controller::tick`], so the same
//! controller runs under a frame loop, an event loop or a test.

pub mod constants;
pub mod controller;
pub mod element;
pub mod error;
pub mod events;
pub mod input;
pub mod options;
pub mod pane;
pub mod registry;
pub mod scheduler;
pub mod state;

pub use controller::{Controller, TransitionView};
pub use element::{Element, ElementId, Node, NodeRef};
pub use error::ConfigError;
pub use events::{CarouselEvent, ListenerId};
pub use input::{InputEvent, InputOutcome, Key};
pub use options::{CarouselOptions, PauseMode};
pub use registry::CarouselRegistry;
pub use state::ControllerState;
