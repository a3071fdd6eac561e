use raylib::prelude::*;

pub const WINDOW_WIDTH: i32 = 1280;
pub const WINDOW_HEIGHT: i32 = 720;
pub const FPS: u32 = 60;

const CONTROL_SIZE: f32 = 48.0;
const CONTROL_MARGIN: f32 = 16.0;
const INDICATOR_RADIUS: f32 = 6.0;
const INDICATOR_SPACING: f32 = 22.0;
const INDICATOR_BOTTOM: f32 = 28.0;
// Clicks a little outside the dot still count
const INDICATOR_HIT_RADIUS: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    PrevControl,
    NextControl,
    Indicator(usize),
    Pane,
}

/// Screen geometry of the viewer chrome for the current window size.
pub struct Layout {
    pub prev_control: Rectangle,
    pub next_control: Rectangle,
    pub indicators: Vec<Vector2>,
}

impl Layout {
    pub fn new(screen_width: f32, screen_height: f32, pane_count: usize) -> Self {
        let control_y = (screen_height - CONTROL_SIZE) * 0.5;
        let prev_control = Rectangle::new(CONTROL_MARGIN, control_y, CONTROL_SIZE, CONTROL_SIZE);
        let next_control = Rectangle::new(
            screen_width - CONTROL_MARGIN - CONTROL_SIZE,
            control_y,
            CONTROL_SIZE,
            CONTROL_SIZE,
        );

        let row_width = pane_count.saturating_sub(1) as f32 * INDICATOR_SPACING;
        let first_x = (screen_width - row_width) * 0.5;
        let y = screen_height - INDICATOR_BOTTOM;
        let indicators = (0..pane_count)
            .map(|i| Vector2::new(first_x + i as f32 * INDICATOR_SPACING, y))
            .collect();

        Self { prev_control, next_control, indicators }
    }

    pub fn indicator_radius(&self) -> f32 {
        INDICATOR_RADIUS
    }

    pub fn hit_test(&self, x: f32, y: f32) -> Hit {
        if contains(&self.prev_control, x, y) {
            return Hit::PrevControl;
        }
        if contains(&self.next_control, x, y) {
            return Hit::NextControl;
        }
        self.indicators
            .iter()
            .position(|center| {
                let (dx, dy) = (center.x - x, center.y - y);
                dx * dx + dy * dy <= INDICATOR_HIT_RADIUS * INDICATOR_HIT_RADIUS
            })
            .map_or(Hit::Pane, Hit::Indicator)
    }
}

fn contains(rect: &Rectangle, x: f32, y: f32) -> bool {
    x >= rect.x && x <= rect.x + rect.width && y >= rect.y && y <= rect.y + rect.height
}
