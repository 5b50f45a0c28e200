//! Session settings and window configuration.

use std::time::Duration;

use macroquad::prelude::Conf;

use crate::error::SetupError;

/// Drawing area size in logical pixels
pub const CANVAS_WIDTH: f32 = 800.0;
pub const CANVAS_HEIGHT: f32 = 600.0;
pub const CELL_SIZE: f32 = 10.0;
/// Delay between automatic generations
pub const LOOP_DELAY: Duration = Duration::from_millis(50);
pub const MIN_ZOOM: f32 = 0.1;
pub const MAX_ZOOM: f32 = 10.0;
/// Zoom multiplier per wheel notch
pub const WHEEL_ZOOM_FACTOR: f32 = 1.1;
pub const PANEL_WIDTH: f32 = 180.0;
/// Share of cells alive after a random fill
pub const RANDOM_DENSITY: f64 = 0.3;

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub cell_size: f32,
    pub loop_delay: Duration,
    pub min_zoom: f32,
    pub max_zoom: f32,
    pub wheel_zoom_factor: f32,
    pub initial_pattern: &'static str,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            cell_size: CELL_SIZE,
            loop_delay: LOOP_DELAY,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            wheel_zoom_factor: WHEEL_ZOOM_FACTOR,
            initial_pattern: "glider",
        }
    }
}

impl Settings {
    /// Dense domain that exactly covers the canvas
    pub fn grid_dimensions(&self) -> (usize, usize) {
        (
            (self.canvas_width / self.cell_size) as usize,
            (self.canvas_height / self.cell_size) as usize,
        )
    }

    pub fn validate(&self) -> Result<(), SetupError> {
        if !(self.cell_size > 0.0) {
            return Err(SetupError::InvalidSetting {
                name: "cell_size",
                reason: format!("must be positive, got {}", self.cell_size),
            });
        }
        if self.canvas_width < self.cell_size || self.canvas_height < self.cell_size {
            return Err(SetupError::InvalidSetting {
                name: "canvas",
                reason: format!(
                    "{}x{} cannot hold a single {} px cell",
                    self.canvas_width, self.canvas_height, self.cell_size
                ),
            });
        }
        if !(self.min_zoom > 0.0 && self.min_zoom <= self.max_zoom) {
            return Err(SetupError::InvalidSetting {
                name: "zoom",
                reason: format!("bad range [{}, {}]", self.min_zoom, self.max_zoom),
            });
        }
        if self.loop_delay.is_zero() {
            return Err(SetupError::InvalidSetting {
                name: "loop_delay",
                reason: "must be non-zero".to_owned(),
            });
        }
        Ok(())
    }
}

/// Window for the fixed-grid variant: canvas plus control panel
pub fn grid_window_conf() -> Conf {
    Conf {
        window_title: "Game of Life".to_owned(),
        window_width: (CANVAS_WIDTH + PANEL_WIDTH) as i32,
        window_height: CANVAS_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

/// Window for the camera variant
pub fn camera_window_conf() -> Conf {
    Conf {
        window_title: "Game of Life - Camera".to_owned(),
        window_width: CANVAS_WIDTH as i32,
        window_height: CANVAS_HEIGHT as i32,
        window_resizable: true,
        ..Default::default()
    }
}
