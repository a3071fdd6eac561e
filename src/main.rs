use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Parser;
use rand::seq::SliceRandom;
use raylib::prelude::*;
use tracing::{info, warn};

use carousel::{
    CarouselOptions, CarouselRegistry, Controller, Element, ElementId, InputEvent, Key, PauseMode,
};

mod layout;
mod slide;
mod texture_loader;

use crate::layout::{FPS, Hit, Layout, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::slide::Slide;
use crate::texture_loader::{load_sorted_image_paths, load_texture_with_exif_rotation};

const VIEWER_ID: ElementId = ElementId(1);

/// What one frame of raylib input asks the viewer to do.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Command {
    Carousel(InputEvent),
    ToggleAutoplay,
}

/// Browse a directory of images as a carousel
#[derive(Parser, Debug)]
#[command(name = "carousel", version)]
struct Args {
    /// Directory containing the images
    image_directory: PathBuf,

    /// TOML file with carousel options
    #[arg(long)]
    config: Option<PathBuf>,

    /// Autoplay period in milliseconds (0 disables autoplay)
    #[arg(long)]
    interval: Option<u64>,

    /// Stop at the first and last image instead of wrapping around
    #[arg(long)]
    no_wrap: bool,

    /// "hover" pauses autoplay while the cursor is over the window
    #[arg(long)]
    pause: Option<String>,

    /// Ignore the arrow keys
    #[arg(long)]
    no_keyboard: bool,

    /// Ignore swipe gestures
    #[arg(long)]
    no_touch: bool,

    /// Show the images in random order
    #[arg(long)]
    shuffle: bool,
}

impl Args {
    /// Flags override the options file, which overrides the defaults.
    fn options(&self) -> Result<CarouselOptions> {
        let mut options = match &self.config {
            Some(path) => CarouselOptions::load(path)
                .with_context(|| format!("loading options from {}", path.display()))?,
            None => CarouselOptions::default(),
        };
        if let Some(interval) = self.interval {
            options.interval = Duration::from_millis(interval);
        }
        if let Some(pause) = &self.pause {
            options.pause = PauseMode::from(pause.as_str());
        }
        if self.no_wrap {
            options.wrap = false;
        }
        if self.no_keyboard {
            options.keyboard = false;
        }
        if self.no_touch {
            options.touch = false;
        }
        Ok(options)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let options = args.options()?;

    let mut image_paths = load_sorted_image_paths(&args.image_directory)?;
    if args.shuffle {
        image_paths.shuffle(&mut rand::rng());
    }
    info!(directory = %args.image_directory.display(), images = image_paths.len(), "loading images");

    let (mut rl, thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title("Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Load Slides ---
    let mut slides = Vec::with_capacity(image_paths.len());
    for path in &image_paths {
        match load_texture_with_exif_rotation(&mut rl, &thread, path) {
            Ok(texture) => slides.push(Slide::new(texture)),
            Err(e) => warn!("skipping image: {e:#}"),
        }
    }
    if slides.is_empty() {
        bail!("none of the images in {} could be loaded", args.image_directory.display());
    }

    let element = Element::new(VIEWER_ID)
        .with_inner()
        .with_panes(slides.len())
        .with_indicators()
        .with_controls();

    let mut registry = CarouselRegistry::new();
    let controller = registry.create(element, options);
    controller.subscribe(|event| info!(event = event.name(), from = event.from_index(), to = event.to_index()));

    let mut hovered = false;
    let mut visible = true;

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        let layout = Layout::new(rl.get_screen_width() as f32, rl.get_screen_height() as f32, slides.len());

        for command in collect_input(&rl, &layout, &mut hovered, &mut visible) {
            match command {
                Command::Carousel(event) => {
                    registry.dispatch(VIEWER_ID, event);
                }
                Command::ToggleAutoplay => toggle_autoplay(registry.get_mut(VIEWER_ID)),
            }
        }
        registry.tick(Duration::from_secs_f32(dt));

        let Some(controller) = registry.get(VIEWER_ID) else {
            break;
        };

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        draw_panes(&mut d, controller, &slides);
        draw_chrome(&mut d, controller, &layout);
    }

    registry.destroy_all();
    Ok(())
}

/// Translates this frame's raylib input into viewer commands.
fn collect_input(rl: &RaylibHandle, layout: &Layout, hovered: &mut bool, visible: &mut bool) -> Vec<Command> {
    let mut commands = Vec::new();
    let mouse = rl.get_mouse_position();

    let on_screen = rl.is_cursor_on_screen();
    if on_screen != *hovered {
        *hovered = on_screen;
        commands.push(Command::Carousel(if on_screen { InputEvent::PointerEnter } else { InputEvent::PointerLeave }));
    }

    // A minimized window is the desktop equivalent of a hidden page
    let shown = !rl.is_window_minimized();
    if shown != *visible {
        *visible = shown;
        commands.push(Command::Carousel(InputEvent::VisibilityChange { visible: shown }));
    }

    if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        commands.push(Command::Carousel(match layout.hit_test(mouse.x, mouse.y) {
            Hit::PrevControl => InputEvent::PrevClick,
            Hit::NextControl => InputEvent::NextClick,
            Hit::Indicator(index) => InputEvent::IndicatorClick(index),
            Hit::Pane => InputEvent::PointerDown { x: mouse.x },
        }));
    } else if rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT) {
        commands.push(Command::Carousel(InputEvent::PointerMove { x: mouse.x }));
    } else if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
        commands.push(Command::Carousel(InputEvent::PointerUp { x: mouse.x }));
    }

    if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
        commands.push(Command::Carousel(InputEvent::KeyDown(Key::ArrowLeft)));
    }
    if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
        commands.push(Command::Carousel(InputEvent::KeyDown(Key::ArrowRight)));
    }
    if rl.is_key_pressed(KeyboardKey::KEY_SPACE) {
        commands.push(Command::ToggleAutoplay);
    }
    commands
}

fn toggle_autoplay(controller: Option<&mut Controller>) {
    let Some(controller) = controller else {
        return;
    };
    if controller.is_playing() {
        controller.pause();
    } else {
        controller.start();
    }
}

fn draw_panes(d: &mut RaylibDrawHandle, controller: &Controller, slides: &[Slide]) {
    match controller.transition() {
        // Crossfade the outgoing pane into the incoming one
        Some(view) => {
            if let Some(slide) = slides.get(view.from) {
                slide.draw(d, 0.0, 1.0 - view.progress);
            }
            if let Some(slide) = slides.get(view.to) {
                slide.draw(d, 0.0, view.progress);
            }
        }
        None => {
            if let Some(slide) = slides.get(controller.current_index()) {
                slide.draw(d, controller.drag_offset(), 1.0);
            }
        }
    }
}

fn draw_chrome(d: &mut RaylibDrawHandle, controller: &Controller, layout: &Layout) {
    let options = controller.options();

    if options.controls {
        for (rect, glyph) in [(layout.prev_control, "<"), (layout.next_control, ">")] {
            d.draw_rectangle_rec(rect, Color::new(0, 0, 0, 128));
            d.draw_text(glyph, (rect.x + rect.width * 0.35) as i32, (rect.y + rect.height * 0.2) as i32, 32, Color::WHITE);
        }
    }

    if options.indicators {
        for (indicator, center) in controller.indicators().iter().zip(&layout.indicators) {
            let color = if indicator.active { Color::WHITE } else { Color::new(255, 255, 255, 110) };
            d.draw_circle(center.x as i32, center.y as i32, layout.indicator_radius(), color);
        }
    }

    if options.autoplay_enabled() && !controller.is_playing() {
        d.draw_text("paused", 16, 16, 20, Color::LIGHTGRAY);
    }
}
