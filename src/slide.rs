use raylib::prelude::*;

/// One pane's picture, fitted to the window when drawn.
pub struct Slide {
    image: Texture2D,
}

impl Slide {
    pub fn new(image: Texture2D) -> Self {
        Self { image }
    }

    /// Scales too-big images down to 90% of the window along their long side.
    fn fit_scale(&self, screen_width: f32, screen_height: f32) -> f32 {
        let width = self.image.width() as f32;
        let height = self.image.height() as f32;
        fit_scale(width, height, screen_width, screen_height)
    }

    /// Draws the slide centered, shifted horizontally by `offset_x` pixels.
    pub fn draw(&self, d: &mut RaylibDrawHandle, offset_x: f32, opacity: f32) {
        let screen_width = d.get_screen_width() as f32;
        let screen_height = d.get_screen_height() as f32;

        let tex_width = self.image.width() as f32;
        let tex_height = self.image.height() as f32;

        let scale = self.fit_scale(screen_width, screen_height);
        let scaled_width = tex_width * scale;
        let scaled_height = tex_height * scale;

        let dest = Rectangle::new(
            (screen_width - scaled_width) * 0.5 + offset_x,
            (screen_height - scaled_height) * 0.5,
            scaled_width,
            scaled_height,
        );
        let alpha = (opacity.clamp(0.0, 1.0) * 255.0) as u8;

        d.draw_texture_pro(
            &self.image,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            dest,
            Vector2::new(0.0, 0.0),
            0.0,
            Color::new(255, 255, 255, alpha),
        );
    }
}

pub fn fit_scale(width: f32, height: f32, screen_width: f32, screen_height: f32) -> f32 {
    if width > height {
        if width > screen_width * 0.9 {
            (screen_width * 0.9) / width
        } else {
            1.0
        }
    } else if height > screen_height * 0.9 {
        (screen_height * 0.9) / height
    } else {
        1.0
    }
}
