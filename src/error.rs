use thiserror::Error;

/// Failures that stop a session before the first frame.
/// Nothing after startup can fail.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("drawing surface unavailable ({width}x{height})")]
    SurfaceUnavailable { width: f32, height: f32 },

    #[error("invalid setting `{name}`: {reason}")]
    InvalidSetting { name: &'static str, reason: String },

    #[error("failed to install logger")]
    Logger(#[from] log::SetLoggerError),
}
