//! widdershins — an analog clock whose hands run counter-clockwise.
//!
//! The binary wires the pieces together: loads a system font, builds the
//! [`GlassApp`] around a standard clock face, and hands it to the engine's
//! single-window runtime.

use anyhow::{Context, Result};
use winit::dpi::LogicalSize;

use widdershins_clock::AnimationMode;
use widdershins_engine::logging;
use widdershins_engine::window::{self, RuntimeConfig};

mod app;
mod paint;
mod style;

use app::GlassApp;

/// Seconds-hand timing policy, fixed at startup. `Smooth` sweeps the hand
/// continuously; `Tick(1)`, `Tick(2)` and `Tick(8)` snap it in discrete
/// steps.
const SECONDS_MODE: AnimationMode = AnimationMode::Smooth;

fn main() -> Result<()> {
    logging::init();

    let font_data = find_system_font().context("no usable system font found")?;
    let app = GlassApp::new(&font_data, SECONDS_MODE)?;

    let config = RuntimeConfig {
        title: "widdershins".to_string(),
        initial_size: LogicalSize::new(style::WINDOW_WIDTH, style::WINDOW_HEIGHT),
        resizable: false,
    };
    window::run(config, app)
}

fn find_system_font() -> Option<Vec<u8>> {
    [
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/noto/NotoSans-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    ]
    .iter()
    .find_map(|path| std::fs::read(path).ok())
}
