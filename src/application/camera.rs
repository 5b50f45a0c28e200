use macroquad::math::{Vec2, vec2};

use crate::config::{MAX_ZOOM, MIN_ZOOM, WHEEL_ZOOM_FACTOR};
use crate::domain::{Pos, cell_index};

/// Camera manages pan and zoom over the unbounded sparse plane.
/// World units are pixels at zoom 1; `screen = world * zoom + offset`.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub offset: Vec2,
    pub zoom: f32, // 1.0 = normal, 2.0 = 2x zoomed in
    pub dragging: bool,
    pub drag_anchor: Vec2,
    /// Zoom multiplier per wheel notch
    pub wheel_factor: f32,
    min_zoom: f32,
    max_zoom: f32,
}

impl Camera {
    pub fn new() -> Self {
        Self::with_limits(MIN_ZOOM, MAX_ZOOM)
    }

    pub fn with_limits(min_zoom: f32, max_zoom: f32) -> Self {
        Self {
            offset: Vec2::ZERO,
            zoom: 1.0,
            dragging: false,
            drag_anchor: Vec2::ZERO,
            wheel_factor: WHEEL_ZOOM_FACTOR,
            min_zoom,
            max_zoom,
        }
    }

    /// Set zoom, clamped to the configured range
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    /// Zoom by one wheel step in the direction of `delta` (its size is ignored),
    /// keeping `focus` fixed on screen
    pub fn zoom_at(&mut self, delta: f32, focus: Vec2) {
        if delta == 0.0 {
            return;
        }
        let anchor = self.screen_to_world(focus);
        self.set_zoom(self.zoom * self.wheel_factor.powf(delta.signum()));
        self.offset = focus - anchor * self.zoom;
    }

    /// Pan camera
    pub fn pan(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    pub fn begin_drag(&mut self, at: Vec2) {
        self.dragging = true;
        self.drag_anchor = at;
    }

    /// Move the view with the pointer while a drag is in progress
    pub fn drag_to(&mut self, at: Vec2) {
        if !self.dragging {
            return;
        }
        self.pan(at - self.drag_anchor);
        self.drag_anchor = at;
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Put the world origin at the centre of the viewport
    pub fn recenter(&mut self, viewport: Vec2) {
        self.offset = viewport / 2.0;
        self.dragging = false;
    }

    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        (screen - self.offset) / self.zoom
    }

    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        world * self.zoom + self.offset
    }

    /// Cell containing a world point
    pub fn world_to_cell(world: Vec2, cell_size: f32) -> Pos {
        (cell_index(world.x, cell_size), cell_index(world.y, cell_size))
    }

    /// Convert screen coordinates to the cell under them
    pub fn screen_to_cell(&self, screen: Vec2, cell_size: f32) -> Pos {
        Self::world_to_cell(self.screen_to_world(screen), cell_size)
    }

    /// Top-left corner of a cell on screen
    pub fn cell_to_screen(&self, (x, y): Pos, cell_size: f32) -> Vec2 {
        self.world_to_screen(vec2(x as f32 * cell_size, y as f32 * cell_size))
    }

    /// On-screen edge length of one cell
    pub fn scaled_cell(&self, cell_size: f32) -> f32 {
        cell_size * self.zoom
    }

    /// Inclusive corner cells of the region covered by the viewport
    pub fn visible_cells(&self, viewport: Vec2, cell_size: f32) -> (Pos, Pos) {
        (
            self.screen_to_cell(Vec2::ZERO, cell_size),
            self.screen_to_cell(viewport, cell_size),
        )
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
