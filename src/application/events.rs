use macroquad::math::Vec2;

/// Discrete input delivered to a session. Positions are screen pixels.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// Advance exactly one generation
    Step,
    /// Re-seed from the selected pattern and pause
    Reset,
    /// Play/pause
    ToggleRun,
    /// Fill with random cells and pause
    Randomize,
    /// Selector changed; re-seeds like `Reset`
    SelectPattern(String),
    /// Set the cell under the pointer alive or dead
    Paint { at: Vec2, alive: bool },
    /// Flip the cell under the pointer
    ToggleCell(Vec2),
    DragStart(Vec2),
    DragMove(Vec2),
    DragEnd,
    /// Wheel notches (positive zooms in) at a pointer position
    Wheel { delta: f32, at: Vec2 },
    /// Viewport changed size
    Resize(Vec2),
}
