// Domain layer - the automaton rule, generations, patterns
pub mod domain;

// Application layer - sessions, run control, camera
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

pub mod config;
pub mod error;
pub mod setup;

// Re-exports for convenience
pub use domain::{
    Cell, Generation, Grid, Lifecycle, Pattern, Preset, SparseGeneration, advance, instantiate,
    presets,
};
pub use application::{Camera, CameraSession, GameState, InputEvent, RunControl, RunState};
pub use config::Settings;
pub use error::SetupError;
