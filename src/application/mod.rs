mod camera;
mod camera_session;
mod events;
mod game_state;
mod run_control;

pub use camera::Camera;
pub use camera_session::CameraSession;
pub use events::InputEvent;
pub use game_state::GameState;
pub use run_control::{RunControl, RunState, Tick};
