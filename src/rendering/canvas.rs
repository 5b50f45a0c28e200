use macroquad::prelude::*;

/// Minimal drawing surface the renderers need. Coordinates are pixels.
pub trait Canvas {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32);
}

/// Canvas backed by macroquad's immediate-mode drawing
#[derive(Clone, Copy, Debug)]
pub struct MacroquadCanvas {
    pub alive_color: Color,
    pub background: Color,
    pub grid_line_color: Color,
    pub line_width: f32,
}

impl Default for MacroquadCanvas {
    fn default() -> Self {
        Self {
            alive_color: WHITE,
            background: BLACK,
            grid_line_color: Color::new(1.0, 1.0, 1.0, 0.5),
            line_width: 0.5,
        }
    }
}

impl Canvas for MacroquadCanvas {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        draw_rectangle(x, y, w, h, self.alive_color);
    }

    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        draw_rectangle(x, y, w, h, self.background);
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        draw_line(x1, y1, x2, y2, self.line_width, self.grid_line_color);
    }
}
