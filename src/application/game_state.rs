use std::time::Duration;

use crate::application::{InputEvent, RunControl, RunState};
use crate::config::{RANDOM_DENSITY, Settings};
use crate::domain::{Cell, Grid, Lifecycle, Preset, cell_index};

/// GameState orchestrates the fixed-grid simulation.
/// This is the application layer that coordinates domain logic.
pub struct GameState {
    pub life: Lifecycle<Grid>,
    pub run: RunControl,
    pub preset: Preset,
    pub settings: Settings,
}

impl GameState {
    /// Create a paused session seeded with the configured pattern
    pub fn new(settings: Settings) -> Self {
        let preset = Preset::from_name(settings.initial_pattern);
        let seed = preset.instantiate(settings.grid_dimensions());
        Self {
            life: Lifecycle::new(seed),
            run: RunControl::new(settings.loop_delay),
            preset,
            settings,
        }
    }

    pub fn grid(&self) -> &Grid {
        self.life.current()
    }

    pub fn generation(&self) -> u64 {
        self.life.generation()
    }

    pub fn run_state(&self) -> RunState {
        self.run.state()
    }

    /// Dispatch one input event
    pub fn apply(self, event: InputEvent) -> Self {
        match event {
            InputEvent::Step => self.step(),
            InputEvent::Reset => self.reset(),
            InputEvent::ToggleRun => self.toggle_running(),
            InputEvent::Randomize => self.randomize(),
            InputEvent::SelectPattern(name) => self.select_pattern(&name),
            InputEvent::Paint { at, alive } => self.paint(at.x, at.y, alive),
            // Camera input has no meaning on the fixed grid
            InputEvent::ToggleCell(_)
            | InputEvent::DragStart(_)
            | InputEvent::DragMove(_)
            | InputEvent::DragEnd
            | InputEvent::Wheel { .. }
            | InputEvent::Resize(_) => self,
        }
    }

    /// Advance one generation without touching the run state
    pub fn step(mut self) -> Self {
        self.life.advance();
        self
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.run.toggle();
        self
    }

    /// Re-seed from the selected pattern and force Paused
    pub fn reset(mut self) -> Self {
        log::debug!("reset to {}", self.preset.name());
        let seed = self.preset.instantiate(self.settings.grid_dimensions());
        self.life.reseed(seed);
        self.run.pause();
        self
    }

    pub fn select_pattern(mut self, name: &str) -> Self {
        self.preset = Preset::from_name(name);
        self.reset()
    }

    /// Random fill and reset generation counter
    pub fn randomize(mut self) -> Self {
        let (w, h) = self.settings.grid_dimensions();
        self.life.reseed(Grid::new(w, h).randomize(RANDOM_DENSITY));
        self.run.pause();
        self
    }

    /// Paint the cell under a canvas pixel. Ignored while running.
    pub fn paint(mut self, px: f32, py: f32, alive: bool) -> Self {
        if self.run.is_running() {
            return self;
        }
        let cell_size = self.settings.cell_size;
        let pos = (cell_index(px, cell_size), cell_index(py, cell_size));
        self.life.current_mut().set_at(pos, Cell::from(alive));
        self
    }

    /// Update simulation by one frame
    pub fn tick(mut self, delta_time: Duration) -> Self {
        if let Some(tick) = self.run.poll(delta_time) {
            self.life.advance();
            self.run.complete(tick);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Generation, Liveness};
    use macroquad::math::vec2;

    fn glider_state() -> GameState {
        GameState::new(Settings::default())
    }

    #[test]
    fn test_starts_paused_with_glider() {
        let state = glider_state();
        assert_eq!(state.run_state(), RunState::Paused);
        assert_eq!(state.grid().dimensions(), (80, 60));
        assert_eq!(state.grid().population(), 5);
    }

    #[test]
    fn test_step_stays_paused() {
        let state = glider_state().apply(InputEvent::Step);
        assert_eq!(state.generation(), 1);
        assert_eq!(state.run_state(), RunState::Paused);
    }

    #[test]
    fn test_running_advances_on_interval() {
        let mut state = glider_state().apply(InputEvent::ToggleRun);
        for _ in 0..10 {
            state = state.tick(Duration::from_millis(25));
        }
        assert_eq!(state.generation(), 5);
    }

    #[test]
    fn test_paused_tick_does_nothing() {
        let state = glider_state().tick(Duration::from_secs(1));
        assert_eq!(state.generation(), 0);
    }

    #[test]
    fn test_reset_reseeds_and_pauses() {
        let state = glider_state()
            .apply(InputEvent::ToggleRun)
            .tick(Duration::from_millis(60))
            .apply(InputEvent::Reset);
        assert_eq!(state.run_state(), RunState::Paused);
        assert_eq!(state.generation(), 0);
        assert!(state.grid().is_alive(3, 2));
    }

    #[test]
    fn test_select_unknown_pattern_clears() {
        let state = glider_state().apply(InputEvent::SelectPattern("bogus".into()));
        assert_eq!(state.preset, Preset::Empty);
        assert_eq!(state.grid().population(), 0);

        let state = state.apply(InputEvent::SelectPattern("glider-gun".into()));
        assert_eq!(state.grid().population(), 36);
    }

    #[test]
    fn test_paint_maps_pixels_to_cells() {
        let state = glider_state()
            .apply(InputEvent::SelectPattern("empty".into()))
            .apply(InputEvent::Paint { at: vec2(15.0, 29.9), alive: true })
            .apply(InputEvent::Paint { at: vec2(-5.0, 10.0), alive: true });
        assert_eq!(state.grid().alive_cells().collect::<Vec<_>>(), vec![(1, 2)]);
    }

    #[test]
    fn test_paint_ignored_while_running() {
        let state = glider_state()
            .apply(InputEvent::ToggleRun)
            .apply(InputEvent::Paint { at: vec2(100.0, 100.0), alive: true });
        assert!(!state.grid().is_alive(10, 10));
    }

    #[test]
    fn test_randomize_pauses() {
        let state = glider_state()
            .apply(InputEvent::ToggleRun)
            .apply(InputEvent::Randomize);
        assert_eq!(state.run_state(), RunState::Paused);
        assert_eq!(state.grid().dimensions(), (80, 60));
    }
}
