//! Duel Pong - a one-player-versus-AI paddle game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball, paddles, collisions, match state)
//! - `settings`: Data-driven match tuning
//! - `audio`: Event to sound cue mapping
//! - `input`: Key/pointer normalization into per-tick input
//! - `clock`: Frame clock (host timestamps to clamped elapsed seconds)

pub mod audio;
pub mod clock;
pub mod error;
pub mod input;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Largest elapsed time a single tick may integrate (seconds)
    pub const MAX_DT: f32 = 0.1;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    pub const BALL_INITIAL_SPEED: f32 = 300.0;
    pub const BALL_MAX_SPEED: f32 = 800.0;
    /// Speed boost when ball hits paddle (multiplicative)
    pub const BALL_SPEED_INCREMENT: f32 = 1.05;
    /// Maximum deflection off a paddle (radians, 45 degrees)
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_4;
    /// Horizontal nudge applied after a paddle hit
    pub const HIT_SEPARATION: f32 = 5.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    /// Gap between a paddle and its side wall
    pub const PADDLE_MARGIN: f32 = 20.0;
    pub const PLAYER_PADDLE_SPEED: f32 = 400.0;
    /// AI is a bit slower than the player so it can be beaten
    pub const AI_PADDLE_SPEED: f32 = 340.0;

    /// AI tuning
    pub const AI_TOLERANCE: f32 = 10.0;
    pub const AI_RETURN_SPEED: f32 = 0.5;
    pub const AI_RECENTER_DEAD_ZONE: f32 = 10.0;

    /// First to this many points wins
    pub const TARGET_SCORE: u32 = 10;
}

/// Clamp a host-reported elapsed time into `[0, max_dt]`.
///
/// Non-finite and negative values collapse to zero so a misbehaving clock
/// can never push the simulation backwards or blow it up.
#[inline]
pub fn clamp_dt(dt: f32, max_dt: f32) -> f32 {
    if !dt.is_finite() || dt < 0.0 {
        log::warn!("Ignoring invalid elapsed time {dt}");
        return 0.0;
    }
    dt.min(max_dt)
}
