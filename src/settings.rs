//! Match settings
//!
//! Every tuning value the simulation reads lives here. Settings can be
//! loaded from JSON so hosts can tweak balance without recompiling.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Match tuning and preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Ball ===
    pub ball_radius: f32,
    pub ball_initial_speed: f32,
    pub ball_max_speed: f32,
    /// Multiplier applied to ball speed on every paddle hit
    pub ball_speed_increment: f32,
    /// Radians
    pub max_bounce_angle: f32,
    /// Pixels the ball is pushed away from a paddle after a hit
    pub hit_separation: f32,

    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub player_paddle_speed: f32,
    pub ai_paddle_speed: f32,

    // === AI ===
    /// Dead zone around the AI paddle center while tracking
    pub ai_tolerance: f32,
    /// Fraction of full speed used to drift back to center
    pub ai_return_speed: f32,
    pub ai_recenter_dead_zone: f32,

    // === Rules ===
    pub target_score: u32,
    /// Elapsed time cap per tick (seconds)
    pub max_dt: f32,
    /// Both paddles AI-driven (attract screen)
    pub demo_mode: bool,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ball_radius: BALL_RADIUS,
            ball_initial_speed: BALL_INITIAL_SPEED,
            ball_max_speed: BALL_MAX_SPEED,
            ball_speed_increment: BALL_SPEED_INCREMENT,
            max_bounce_angle: MAX_BOUNCE_ANGLE,
            hit_separation: HIT_SEPARATION,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_margin: PADDLE_MARGIN,
            player_paddle_speed: PLAYER_PADDLE_SPEED,
            ai_paddle_speed: AI_PADDLE_SPEED,

            ai_tolerance: AI_TOLERANCE,
            ai_return_speed: AI_RETURN_SPEED,
            ai_recenter_dead_zone: AI_RECENTER_DEAD_ZONE,

            target_score: TARGET_SCORE,
            max_dt: MAX_DT,
            demo_mode: false,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

fn in_range(field: &'static str, value: f32, min: f32, max: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= min && value <= max {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        log::info!("Loaded settings (target score {})", settings.target_score);
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject tuning the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("ball_radius", self.ball_radius)?;
        positive("ball_initial_speed", self.ball_initial_speed)?;
        positive("ball_max_speed", self.ball_max_speed)?;
        if self.ball_max_speed < self.ball_initial_speed {
            return Err(ConfigError::SpeedRange {
                initial: self.ball_initial_speed,
                max: self.ball_max_speed,
            });
        }
        in_range("ball_speed_increment", self.ball_speed_increment, 1.0, 4.0)?;
        // Open interval: 0 would pin every rebound flat, pi/2 allows vertical ones
        if !(self.max_bounce_angle > 0.0 && self.max_bounce_angle < std::f32::consts::FRAC_PI_2) {
            return Err(ConfigError::OutOfRange {
                field: "max_bounce_angle",
                value: self.max_bounce_angle,
                min: 0.0,
                max: std::f32::consts::FRAC_PI_2,
            });
        }
        non_negative("hit_separation", self.hit_separation)?;

        positive("paddle_width", self.paddle_width)?;
        positive("paddle_height", self.paddle_height)?;
        non_negative("paddle_margin", self.paddle_margin)?;
        positive("player_paddle_speed", self.player_paddle_speed)?;
        positive("ai_paddle_speed", self.ai_paddle_speed)?;

        non_negative("ai_tolerance", self.ai_tolerance)?;
        if !(self.ai_return_speed > 0.0 && self.ai_return_speed <= 1.0) {
            return Err(ConfigError::OutOfRange {
                field: "ai_return_speed",
                value: self.ai_return_speed,
                min: 0.0,
                max: 1.0,
            });
        }
        non_negative("ai_recenter_dead_zone", self.ai_recenter_dead_zone)?;

        if self.target_score == 0 {
            return Err(ConfigError::ZeroTargetScore);
        }
        positive("max_dt", self.max_dt)?;

        in_range("master_volume", self.master_volume, 0.0, 1.0)?;
        in_range("sfx_volume", self.sfx_volume, 0.0, 1.0)?;
        Ok(())
    }

    /// Smallest canvas where the two paddles do not overlap and fit vertically
    pub fn min_canvas(&self) -> (f32, f32) {
        let width = 2.0 * (self.paddle_margin + self.paddle_width);
        let height = self.paddle_height.max(2.0 * self.ball_radius);
        (width, height)
    }

    /// Check host-supplied simulation bounds against these settings
    pub fn validate_canvas(&self, width: f32, height: f32) -> Result<(), ConfigError> {
        positive("canvas_width", width)?;
        positive("canvas_height", height)?;
        let (min_width, min_height) = self.min_canvas();
        if width < min_width || height < min_height {
            return Err(ConfigError::CanvasTooSmall {
                width,
                height,
                min_width,
                min_height,
            });
        }
        Ok(())
    }
}
