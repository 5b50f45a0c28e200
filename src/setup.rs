//! Startup checks shared by both binaries.

use log::LevelFilter;
use macroquad::math::{Vec2, vec2};
use macroquad::window::{screen_height, screen_width};
use simple_logger::SimpleLogger;

use crate::error::SetupError;

/// Install the logger. `RUST_LOG` overrides the default `info` level.
pub fn init_logging() -> Result<(), SetupError> {
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .env()
        .init()?;
    Ok(())
}

/// Size of the drawing surface, or an error if the window has none
pub fn surface_size() -> Result<Vec2, SetupError> {
    let (width, height) = (screen_width(), screen_height());
    if width > 0.0 && height > 0.0 {
        Ok(vec2(width, height))
    } else {
        Err(SetupError::SurfaceUnavailable { width, height })
    }
}
