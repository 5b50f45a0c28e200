mod button;
mod dropdown;

pub use button::Button;
pub use dropdown::Dropdown;

use crate::application::InputEvent;
use crate::config::{CANVAS_WIDTH, PANEL_WIDTH};
use crate::domain::Preset;

pub const BUTTON_HEIGHT: f32 = 40.0;

/// The panel sits to the right of the canvas
pub const fn panel_x() -> f32 {
    CANVAS_WIDTH
}

/// Create UI buttons with standard layout
pub fn create_buttons() -> Vec<Button> {
    let px = panel_x();
    vec![
        Button::new(px, 170.0, PANEL_WIDTH, BUTTON_HEIGHT, "Play/Pause", InputEvent::ToggleRun),
        Button::new(px, 220.0, PANEL_WIDTH, BUTTON_HEIGHT, "Step", InputEvent::Step),
        Button::new(px, 270.0, PANEL_WIDTH, BUTTON_HEIGHT, "Reset", InputEvent::Reset),
    ]
}

/// Pattern selector listing every preset by its selector name
pub fn pattern_dropdown(initial: &str) -> Dropdown {
    let items = Preset::ALL.iter().map(|p| p.name().to_owned()).collect();
    let mut dropdown = Dropdown::new(panel_x(), 40.0, PANEL_WIDTH, "Pattern", items);
    dropdown.select_value(initial);
    dropdown
}
