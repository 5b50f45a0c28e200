use macroquad::prelude::*;

use crate::application::InputEvent;

/// Panel button that emits an input event when clicked
#[derive(Clone)]
pub struct Button {
    rect: Rect,
    text: String,
    action: InputEvent,
    color: Color,
    hover_color: Color,
}

impl Button {
    pub fn new(
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        text: impl Into<String>,
        action: InputEvent,
    ) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            text: text.into(),
            action,
            color: Color::from_rgba(70, 130, 180, 255),
            hover_color: Color::from_rgba(100, 149, 237, 255),
        }
    }

    /// Check if mouse is hovering over button
    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        self.rect.contains(vec2(mouse_pos.0, mouse_pos.1))
    }

    /// Event to fire if the button was pressed this frame
    pub fn clicked(&self, mouse_pos: (f32, f32), pressed: bool) -> Option<InputEvent> {
        (pressed && self.is_hovered(mouse_pos)).then(|| self.action.clone())
    }

    /// Draw button with hover effect
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let color = if self.is_hovered(mouse_pos) {
            self.hover_color
        } else {
            self.color
        };
        let Rect { x, y, w, h } = self.rect;

        draw_rectangle(x, y, w, h, color);
        draw_rectangle_lines(x, y, w, h, 2.0, WHITE);

        let text_size = measure_text(&self.text, None, 20, 1.0);
        draw_text(
            &self.text,
            x + (w - text_size.width) / 2.0,
            y + (h + text_size.height) / 2.0,
            20.0,
            WHITE,
        );
    }
}
