//! Translate macroquad's polled input into `InputEvent`s.

use macroquad::prelude::*;

use crate::application::InputEvent;
use crate::config::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::domain::Preset;

/// Keys shared by both variants
pub fn keyboard_events() -> Vec<InputEvent> {
    let mut actions: Vec<(KeyCode, InputEvent)> = vec![
        (KeyCode::Right, InputEvent::Step),
        (KeyCode::Left, InputEvent::Reset),
        (KeyCode::Space, InputEvent::ToggleRun),
        (KeyCode::R, InputEvent::Randomize),
    ];
    let digits = [KeyCode::Key0, KeyCode::Key1, KeyCode::Key2];
    actions.extend(
        digits
            .into_iter()
            .zip(Preset::ALL)
            .map(|(key, preset)| (key, InputEvent::SelectPattern(preset.name().to_owned()))),
    );

    actions
        .into_iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .map(|(_, event)| event)
        .collect()
}

/// Paint with the mouse on the fixed canvas
pub fn grid_pointer_events(mouse_pos: (f32, f32)) -> Option<InputEvent> {
    let (x, y) = mouse_pos;
    if !(0.0..CANVAS_WIDTH).contains(&x) || !(0.0..CANVAS_HEIGHT).contains(&y) {
        return None;
    }
    let at = vec2(x, y);
    if is_mouse_button_down(MouseButton::Left) {
        Some(InputEvent::Paint { at, alive: true })
    } else if is_mouse_button_down(MouseButton::Right) {
        Some(InputEvent::Paint { at, alive: false })
    } else {
        None
    }
}

/// Drag to pan, wheel to zoom, right click to toggle a cell
pub fn camera_pointer_events(mouse_pos: (f32, f32)) -> Vec<InputEvent> {
    let at = vec2(mouse_pos.0, mouse_pos.1);
    let mut events = Vec::new();

    if is_mouse_button_pressed(MouseButton::Left) {
        events.push(InputEvent::DragStart(at));
    } else if is_mouse_button_down(MouseButton::Left) {
        events.push(InputEvent::DragMove(at));
    } else if is_mouse_button_released(MouseButton::Left) {
        events.push(InputEvent::DragEnd);
    }

    if is_mouse_button_pressed(MouseButton::Right) {
        events.push(InputEvent::ToggleCell(at));
    }

    let wheel = mouse_wheel().1;
    if wheel != 0.0 {
        events.push(InputEvent::Wheel { delta: wheel, at });
    }
    events
}

/// Reports a `Resize` event whenever the viewport size changes
#[derive(Clone, Debug)]
pub struct ResizeWatcher {
    last: Vec2,
}

impl ResizeWatcher {
    pub fn new(viewport: Vec2) -> Self {
        Self { last: viewport }
    }

    pub fn poll(&mut self, viewport: Vec2) -> Option<InputEvent> {
        if viewport == self.last {
            return None;
        }
        self.last = viewport;
        Some(InputEvent::Resize(viewport))
    }
}
