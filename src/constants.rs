use std::time::Duration;

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(5000);   // Autoplay period
pub const TRANSITION_DURATION: Duration = Duration::from_millis(600); // Length of the animated swap
pub const SWIPE_THRESHOLD: f32 = 50.0;                                // Horizontal travel (px) that counts as a swipe

pub const REGION_LABEL: &str = "Image carousel";
pub const PREVIOUS_LABEL: &str = "Previous image";
pub const NEXT_LABEL: &str = "Next image";
