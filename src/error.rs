//! Crate-level error types.

use thiserror::Error;

use crate::map::MapError;

pub type Result<T> = std::result::Result<T, Error>;

/// Invalid renderer or engine settings.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("max depth must be positive and finite (got {0})")]
    MaxDepth(f32),

    #[error("ray step must be positive and finite (got {0})")]
    RayStep(f32),

    #[error("move speed must be non-negative and finite (got {0})")]
    MoveSpeed(f32),

    #[error("turn speed must be non-negative and finite (got {0})")]
    TurnSpeed(f32),

    #[error("minimum brightness must lie in [0, 1] (got {0})")]
    MinBrightness(f32),

    #[error("screen dimensions must be non-zero (got {width}x{height})")]
    ScreenSize { width: u32, height: u32 },

    #[error("spawn position ({x}, {y}) is not on an empty cell")]
    Spawn { x: f32, y: f32 },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid map: {0}")]
    Map(#[from] MapError),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// SDL reports failures as plain strings.
    #[error("platform error: {0}")]
    Platform(String),
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Error::Platform(message)
    }
}
