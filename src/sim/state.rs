//! Match state and the types that cross the simulation boundary
//!
//! The match owns its ball and both paddles for its whole lifetime. They
//! are repositioned on score and reset, never replaced.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::control::Control;
use super::paddle::{Paddle, Side};
use crate::error::ConfigError;
use crate::settings::Settings;

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    Playing,
    /// Someone reached the target score; waiting for a restart
    GameOver,
}

/// Discrete things that happened during a tick, in the order they happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    WallHit,
    /// Ball rebounded off the paddle on this side
    PaddleHit(Side),
    /// This side won a point
    Scored(Side),
    GameOver { winner: Side },
}

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Player paddle direction: -1 up, 0 none, 1 down
    pub direction: i8,
    /// Restart key pressed (only read during game over)
    pub restart: bool,
    /// A pointer or touch is down (also restarts during game over)
    pub pointer_active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallView {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaddleView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Direction of travel this tick: -1 up, 0 still, 1 down
    pub direction: i8,
}

impl From<&Paddle> for PaddleView {
    fn from(paddle: &Paddle) -> Self {
        Self {
            x: paddle.pos.x,
            y: paddle.pos.y,
            width: paddle.width,
            height: paddle.height,
            direction: paddle.direction(),
        }
    }
}

/// Read-only picture of the match for renderers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub ball: BallView,
    pub left: PaddleView,
    pub right: PaddleView,
    pub player_score: u32,
    pub ai_score: u32,
    pub status: MatchStatus,
}

/// What one call to `Match::update` produced
#[derive(Debug, Clone, PartialEq)]
pub struct TickResult {
    pub events: Vec<GameEvent>,
    pub snapshot: Snapshot,
}

/// The match engine: one ball, the player's paddle on the left, the AI's on the right
#[derive(Debug, Clone)]
pub struct Match {
    pub(crate) settings: Settings,
    pub(crate) width: f32,
    pub(crate) height: f32,
    pub(crate) ball: Ball,
    pub(crate) player: Paddle,
    pub(crate) ai: Paddle,
    pub(crate) player_score: u32,
    pub(crate) ai_score: u32,
    pub(crate) status: MatchStatus,
    pub(crate) rng: Pcg32,
    /// Simulation tick counter
    pub(crate) ticks: u64,
}

impl Match {
    /// Build a match on a `width` x `height` canvas
    pub fn new(width: f32, height: f32, settings: Settings, seed: u64) -> Result<Self, ConfigError> {
        settings.validate()?;
        settings.validate_canvas(width, height)?;

        let player_control = if settings.demo_mode {
            Control::ai(&settings)
        } else {
            Control::human()
        };

        let ball = Ball::new(Vec2::new(width / 2.0, height / 2.0), &settings);
        let player = Paddle::new(Side::Left, Vec2::ZERO, player_control, &settings);
        let ai = Paddle::new(Side::Right, Vec2::ZERO, Control::ai(&settings), &settings);

        let mut game = Self {
            settings,
            width,
            height,
            ball,
            player,
            ai,
            player_score: 0,
            ai_score: 0,
            status: MatchStatus::Playing,
            rng: Pcg32::seed_from_u64(seed),
            ticks: 0,
        };
        game.reset();

        log::info!(
            "Match started on {width}x{height} canvas (seed {seed}, first to {})",
            game.settings.target_score
        );
        Ok(game)
    }

    fn home_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.settings.paddle_margin,
            Side::Right => self.width - self.settings.paddle_margin - self.settings.paddle_width,
        }
    }

    fn home_y(&self) -> f32 {
        (self.height - self.settings.paddle_height) / 2.0
    }

    /// Put the ball back in the middle with a fresh direction at initial speed
    pub(crate) fn serve(&mut self) {
        let (x, y) = (self.width / 2.0, self.height / 2.0);
        self.ball.reset(x, y, &mut self.rng);
    }

    /// Full reset: scores to zero, everything home, back to playing
    pub fn reset(&mut self) {
        self.player_score = 0;
        self.ai_score = 0;

        let home_y = self.home_y();
        let left_x = self.home_x(Side::Left);
        let right_x = self.home_x(Side::Right);
        self.player.reset(left_x, home_y);
        self.ai.reset(right_x, home_y);

        self.serve();
        self.status = MatchStatus::Playing;
    }

    /// New simulation bounds. Keeps scores and velocities; the paddles' x
    /// follow their walls and anything now outside the canvas is pulled back in.
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), ConfigError> {
        self.settings.validate_canvas(width, height)?;
        self.width = width;
        self.height = height;
        self.player.pos.x = self.home_x(Side::Left);
        self.ai.pos.x = self.home_x(Side::Right);
        self.player.clamp_to(height);
        self.ai.clamp_to(height);
        self.ball.clamp_to(width, height);
        log::info!("Canvas resized to {width}x{height}");
        Ok(())
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            ball: BallView {
                x: self.ball.pos.x,
                y: self.ball.pos.y,
                radius: self.ball.radius(),
            },
            left: PaddleView::from(&self.player),
            right: PaddleView::from(&self.ai),
            player_score: self.player_score,
            ai_score: self.ai_score,
            status: self.status,
        }
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.player,
            Side::Right => &self.ai,
        }
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.player_score,
            Side::Right => self.ai_score,
        }
    }

    pub fn status(&self) -> MatchStatus {
        self.status
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Canvas (width, height)
    pub fn canvas(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_places_entities() {
        let game = Match::new(800.0, 400.0, Settings::default(), 1).unwrap();
        let snap = game.snapshot();
        assert_eq!(snap.status, MatchStatus::Playing);
        assert_eq!((snap.player_score, snap.ai_score), (0, 0));
        assert_eq!((snap.ball.x, snap.ball.y), (400.0, 200.0));
        assert_eq!(snap.left.x, 20.0);
        assert_eq!(snap.right.x, 800.0 - 20.0 - 12.0);
        assert_eq!(snap.left.y, 160.0);
        assert_eq!(snap.right.y, 160.0);
        assert_eq!(game.ball().speed(), game.ball().initial_speed());
        assert!(!game.paddle(Side::Left).control.is_ai());
        assert!(game.paddle(Side::Right).control.is_ai());
    }

    #[test]
    fn test_new_rejects_bad_config() {
        let bad = Settings {
            target_score: 0,
            ..Default::default()
        };
        assert_eq!(
            Match::new(800.0, 400.0, bad, 1).unwrap_err(),
            ConfigError::ZeroTargetScore
        );
        assert!(Match::new(f32::NAN, 400.0, Settings::default(), 1).is_err());
        assert!(Match::new(800.0, 10.0, Settings::default(), 1).is_err());
    }

    #[test]
    fn test_demo_mode_makes_both_paddles_ai() {
        let settings = Settings {
            demo_mode: true,
            ..Default::default()
        };
        let game = Match::new(800.0, 400.0, settings, 1).unwrap();
        assert!(game.paddle(Side::Left).control.is_ai());
    }

    #[test]
    fn test_resize_moves_right_paddle_only_horizontally() {
        let mut game = Match::new(800.0, 400.0, Settings::default(), 3).unwrap();
        game.player_score = 4;
        game.ai.pos.y = 50.0;
        let ball_before = game.ball.clone();

        game.resize(1000.0, 500.0).unwrap();
        assert_eq!(game.canvas(), (1000.0, 500.0));
        assert_eq!(game.ai.pos, Vec2::new(1000.0 - 20.0 - 12.0, 50.0));
        assert_eq!(game.player.pos.x, 20.0);
        assert_eq!(game.score(Side::Left), 4);
        assert_eq!(game.ball, ball_before);

        assert!(game.resize(0.0, 500.0).is_err());
        assert_eq!(game.canvas(), (1000.0, 500.0));
    }

    #[test]
    fn test_shrinking_canvas_pulls_everything_inside() {
        let mut game = Match::new(800.0, 400.0, Settings::default(), 3).unwrap();
        game.status = MatchStatus::GameOver;
        game.player.pos.y = 300.0;
        game.ai.pos.y = 10.0;
        game.ball.pos = Vec2::new(700.0, 380.0);
        let vel_before = game.ball.vel();

        game.resize(500.0, 200.0).unwrap();
        let snap = game.snapshot();
        assert_eq!(snap.left.y, 120.0);
        assert_eq!(snap.right.y, 10.0);
        assert_eq!(snap.right.x, 500.0 - 20.0 - 12.0);
        assert_eq!((snap.ball.x, snap.ball.y), (500.0, 192.0));
        assert_eq!(game.ball.vel(), vel_before);

        // Still frozen, but the frozen picture is in bounds
        let result = game.update(0.1, &TickInput::default());
        assert!(result.events.is_empty());
        assert_eq!(result.snapshot, snap);
    }

    #[test]
    fn test_snapshot_reports_paddle_direction() {
        let mut game = Match::new(800.0, 400.0, Settings::default(), 2).unwrap();
        assert_eq!(game.snapshot().left.direction, 0);

        let input = TickInput {
            direction: -1,
            ..Default::default()
        };
        let snap = game.update(1.0 / 60.0, &input).snapshot;
        assert_eq!(snap.left.direction, -1);
        assert_eq!(snap.left.direction, game.paddle(Side::Left).direction());
    }

    #[test]
    fn test_reset_restores_home() {
        let mut game = Match::new(800.0, 400.0, Settings::default(), 9).unwrap();
        game.player_score = 3;
        game.ai_score = 10;
        game.status = MatchStatus::GameOver;
        game.player.pos.y = 0.0;
        game.ball.pos = Vec2::new(-50.0, 10.0);

        game.reset();
        let snap = game.snapshot();
        assert_eq!(snap.status, MatchStatus::Playing);
        assert_eq!((snap.player_score, snap.ai_score), (0, 0));
        assert_eq!(snap.left.y, 160.0);
        assert_eq!((snap.ball.x, snap.ball.y), (400.0, 200.0));
        assert_eq!(game.ball().speed(), game.ball().initial_speed());
    }
}
