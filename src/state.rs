#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ControllerState {
    Idle,          // Showing the current pane, ready for navigation
    Transitioning, // Swap window open, navigation requests are dropped
    Destroyed,     // Timers cancelled and attributes restored, terminal
}

impl ControllerState {
    pub fn accepts_navigation(self) -> bool {
        self == ControllerState::Idle
    }
}
