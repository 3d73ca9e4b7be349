//! Paddle control strategies
//!
//! A control turns the current situation into a vertical velocity. The
//! human strategy echoes the input direction; the AI strategy tracks the
//! ball when it is incoming and drifts back to center otherwise.

use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::paddle::Paddle;
use crate::settings::Settings;

/// Everything a control may look at when deciding
#[derive(Debug, Clone, Copy)]
pub struct ControlContext<'a> {
    /// Normalized player input: -1 up, 0 none, 1 down
    pub input_direction: i8,
    pub ball: &'a Ball,
    pub canvas_height: f32,
}

pub trait PaddleControl {
    /// Vertical velocity (px/s, positive is down) for this tick
    fn decide_velocity(&self, paddle: &Paddle, ctx: &ControlContext) -> f32;
}

/// Follows the player's input direction at full speed
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HumanControl;

impl PaddleControl for HumanControl {
    fn decide_velocity(&self, paddle: &Paddle, ctx: &ControlContext) -> f32 {
        f32::from(ctx.input_direction.clamp(-1, 1)) * paddle.speed
    }
}

/// Simple chase-the-ball opponent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AiControl {
    /// Dead zone around the paddle center while tracking
    pub tolerance: f32,
    /// Fraction of full speed used when recentering
    pub return_speed: f32,
    /// Dead zone around the screen center while recentering
    pub recenter_dead_zone: f32,
}

impl AiControl {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            tolerance: settings.ai_tolerance,
            return_speed: settings.ai_return_speed,
            recenter_dead_zone: settings.ai_recenter_dead_zone,
        }
    }
}

/// -1 to move up toward `target`, 1 to move down, 0 inside the dead zone
#[inline]
fn steer(center: f32, target: f32, dead_zone: f32) -> f32 {
    if target < center - dead_zone {
        -1.0
    } else if target > center + dead_zone {
        1.0
    } else {
        0.0
    }
}

impl PaddleControl for AiControl {
    fn decide_velocity(&self, paddle: &Paddle, ctx: &ControlContext) -> f32 {
        let center = paddle.center_y();
        let incoming = ctx.ball.vel().x * paddle.side.toward() > 0.0;

        if incoming {
            steer(center, ctx.ball.pos.y, self.tolerance) * paddle.speed
        } else {
            let mid = ctx.canvas_height * 0.5;
            steer(center, mid, self.recenter_dead_zone) * paddle.speed * self.return_speed
        }
    }
}

/// Control strategy chosen when a paddle is built
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Control {
    Human(HumanControl),
    Ai(AiControl),
}

impl Control {
    pub fn human() -> Self {
        Control::Human(HumanControl)
    }

    pub fn ai(settings: &Settings) -> Self {
        Control::Ai(AiControl::from_settings(settings))
    }

    pub fn is_ai(&self) -> bool {
        matches!(self, Control::Ai(_))
    }
}

impl PaddleControl for Control {
    fn decide_velocity(&self, paddle: &Paddle, ctx: &ControlContext) -> f32 {
        match self {
            Control::Human(control) => control.decide_velocity(paddle, ctx),
            Control::Ai(control) => control.decide_velocity(paddle, ctx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::paddle::Side;
    use glam::Vec2;

    const HEIGHT: f32 = 400.0;

    fn ai_paddle(y: f32) -> Paddle {
        let settings = Settings::default();
        Paddle::new(
            Side::Right,
            Vec2::new(768.0, y),
            Control::ai(&settings),
            &settings,
        )
    }

    fn ball(pos: Vec2, vel: Vec2) -> Ball {
        let mut ball = Ball::new(pos, &Settings::default());
        ball.set_velocity(vel);
        ball
    }

    fn decide(paddle: &Paddle, ball: &Ball) -> f32 {
        let ctx = ControlContext {
            input_direction: 0,
            ball,
            canvas_height: HEIGHT,
        };
        paddle.control.decide_velocity(paddle, &ctx)
    }

    #[test]
    fn test_ai_tracks_incoming_ball() {
        // Paddle center at 200
        let paddle = ai_paddle(160.0);
        let above = ball(Vec2::new(400.0, 50.0), Vec2::new(300.0, 0.0));
        assert_eq!(decide(&paddle, &above), -paddle.speed);

        let below = ball(Vec2::new(400.0, 350.0), Vec2::new(300.0, 0.0));
        assert_eq!(decide(&paddle, &below), paddle.speed);

        // Inside the tolerance band
        let level = ball(Vec2::new(400.0, 205.0), Vec2::new(300.0, 0.0));
        assert_eq!(decide(&paddle, &level), 0.0);
    }

    #[test]
    fn test_ai_recenters_slowly_when_ball_leaves() {
        let paddle = ai_paddle(0.0);
        let away = ball(Vec2::new(400.0, 10.0), Vec2::new(-300.0, 0.0));
        let velocity = decide(&paddle, &away);
        let AiControl { return_speed, .. } = AiControl::from_settings(&Settings::default());
        assert_eq!(velocity, paddle.speed * return_speed);
        assert!(velocity.abs() <= paddle.speed);

        let low = ai_paddle(HEIGHT - paddle.height);
        assert_eq!(decide(&low, &away), -paddle.speed * return_speed);

        // Within 10px of center, hold
        let centered = ai_paddle(HEIGHT / 2.0 - paddle.height / 2.0 + 5.0);
        assert_eq!(decide(&centered, &away), 0.0);
    }

    #[test]
    fn test_left_ai_tracks_leftward_ball() {
        let settings = Settings::default();
        let paddle = Paddle::new(
            Side::Left,
            Vec2::new(20.0, 160.0),
            Control::ai(&settings),
            &settings,
        );
        let incoming = ball(Vec2::new(400.0, 350.0), Vec2::new(-300.0, 0.0));
        assert_eq!(decide(&paddle, &incoming), paddle.speed);
    }

    #[test]
    fn test_human_echoes_input() {
        let settings = Settings::default();
        let paddle = Paddle::new(
            Side::Left,
            Vec2::new(20.0, 160.0),
            Control::human(),
            &settings,
        );
        let b = ball(Vec2::new(400.0, 350.0), Vec2::new(-300.0, 0.0));
        for (input, expected) in [(-1, -paddle.speed), (0, 0.0), (1, paddle.speed), (5, paddle.speed)] {
            let ctx = ControlContext {
                input_direction: input,
                ball: &b,
                canvas_height: HEIGHT,
            };
            assert_eq!(paddle.control.decide_velocity(&paddle, &ctx), expected);
        }
    }
}
