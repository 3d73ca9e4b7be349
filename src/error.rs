//! Configuration errors
//!
//! Only construction-time inputs can fail. The tick path clamps instead.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be a positive finite number, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("{field} must be finite and non-negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("{field} must be in {min}..={max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },

    #[error("max ball speed {max} is below initial speed {initial}")]
    SpeedRange { initial: f32, max: f32 },

    #[error("target score must be at least 1")]
    ZeroTargetScore,

    #[error("canvas {width}x{height} is too small (needs at least {min_width}x{min_height})")]
    CanvasTooSmall {
        width: f32,
        height: f32,
        min_width: f32,
        min_height: f32,
    },

    #[error("invalid settings JSON: {0}")]
    Json(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Json(err.to_string())
    }
}
