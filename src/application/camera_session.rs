use std::time::Duration;

use macroquad::math::Vec2;

use crate::application::{Camera, InputEvent, RunControl};
use crate::config::Settings;
use crate::domain::{Lifecycle, Preset, SparseGeneration};

/// State of the pannable/zoomable variant: a sparse generation seen through a camera.
pub struct CameraSession {
    pub life: Lifecycle<SparseGeneration>,
    pub camera: Camera,
    pub run: RunControl,
    pub preset: Preset,
    pub settings: Settings,
}

impl CameraSession {
    /// Seed the configured pattern and centre the origin in `viewport`
    pub fn new(settings: Settings, viewport: Vec2) -> Self {
        let preset = Preset::from_name(settings.initial_pattern);
        let mut camera = Camera::with_limits(settings.min_zoom, settings.max_zoom);
        camera.wheel_factor = settings.wheel_zoom_factor;
        camera.recenter(viewport);
        Self {
            life: Lifecycle::new(preset.instantiate(())),
            camera,
            run: RunControl::new(settings.loop_delay),
            preset,
            settings,
        }
    }

    pub fn cells(&self) -> &SparseGeneration {
        self.life.current()
    }

    pub fn apply(mut self, event: InputEvent) -> Self {
        let cell_size = self.settings.cell_size;
        match event {
            InputEvent::Step => self.life.advance(),
            InputEvent::Reset => self.reset(),
            InputEvent::ToggleRun => self.run.toggle(),
            // A random fill needs bounds; the plane has none
            InputEvent::Randomize => {}
            InputEvent::SelectPattern(name) => {
                self.preset = Preset::from_name(&name);
                self.reset();
            }
            InputEvent::Paint { at, alive } => {
                let pos = self.camera.screen_to_cell(at, cell_size);
                let cells = self.life.current_mut();
                if alive {
                    cells.insert(pos);
                } else {
                    cells.remove(pos);
                }
            }
            InputEvent::ToggleCell(at) => {
                let pos = self.camera.screen_to_cell(at, cell_size);
                self.life.current_mut().toggle(pos);
            }
            InputEvent::DragStart(at) => self.camera.begin_drag(at),
            InputEvent::DragMove(at) => self.camera.drag_to(at),
            InputEvent::DragEnd => self.camera.end_drag(),
            InputEvent::Wheel { delta, at } => self.camera.zoom_at(delta, at),
            InputEvent::Resize(viewport) => self.camera.recenter(viewport),
        }
        self
    }

    fn reset(&mut self) {
        log::debug!("reset to {}", self.preset.name());
        self.life.reseed(self.preset.instantiate(()));
        self.run.pause();
    }

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

    const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

    fn session() -> CameraSession {
        CameraSession::new(Settings::default(), VIEWPORT)
    }

    #[test]
    fn test_step_advances_sparse_cells() {
        let session = session();
        let before: Vec<_> = session.cells().alive_cells().collect();
        let session = (0..4).fold(session, |s, _| s.apply(InputEvent::Step));
        assert_eq!(session.life.generation(), 4);
        for (x, y) in before {
            assert!(session.cells().is_alive(x + 1, y + 1));
        }
    }

    #[test]
    fn test_toggle_cell_under_pointer() {
        // Origin sits at the viewport centre
        let session = session().apply(InputEvent::ToggleCell(vec2(405.0, 295.0)));
        assert!(session.cells().is_alive(0, -1));
        let session = session.apply(InputEvent::ToggleCell(vec2(405.0, 295.0)));
        assert!(!session.cells().is_alive(0, -1));
    }

    #[test]
    fn test_click_follows_pan_and_zoom() {
        let session = session()
            .apply(InputEvent::DragStart(vec2(0.0, 0.0)))
            .apply(InputEvent::DragMove(vec2(100.0, 0.0)))
            .apply(InputEvent::DragEnd)
            .apply(InputEvent::Paint { at: vec2(505.0, 305.0), alive: true });
        assert!(session.cells().is_alive(0, 0));
        assert!(!session.camera.dragging);
    }

    #[test]
    fn test_resize_recenters_without_touching_cells() {
        let session = session().apply(InputEvent::Step);
        let population = session.cells().population();
        let session = session.apply(InputEvent::Resize(vec2(1000.0, 500.0)));
        assert_eq!(session.camera.offset, vec2(500.0, 250.0));
        assert_eq!(session.cells().population(), population);
        assert_eq!(session.life.generation(), 1);
    }

    #[test]
    fn test_select_pattern_resets() {
        let session = session()
            .apply(InputEvent::ToggleRun)
            .apply(InputEvent::SelectPattern("glider-gun".into()));
        assert_eq!(session.cells().len(), 36);
        assert!(!session.run.is_running());
    }

    #[test]
    fn test_auto_run() {
        let session = session()
            .apply(InputEvent::ToggleRun)
            .tick(Duration::from_millis(50))
            .tick(Duration::from_millis(50));
        assert_eq!(session.life.generation(), 2);
    }
}
