//! Paddles
//!
//! One data type for both sides. Who moves it is decided by its `Control`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Bounds;
use super::control::{Control, ControlContext, PaddleControl};
use crate::settings::Settings;

/// Which side of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Sign of horizontal velocity that carries the ball toward this side
    #[inline]
    pub fn toward(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    /// Top-left corner, canvas space
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Full movement speed (px/s)
    pub speed: f32,
    /// Current vertical velocity (px/s, positive is down)
    pub velocity: f32,
    pub control: Control,
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2, control: Control, settings: &Settings) -> Self {
        let speed = if control.is_ai() {
            settings.ai_paddle_speed
        } else {
            settings.player_paddle_speed
        };
        Self {
            side,
            pos,
            width: settings.paddle_width,
            height: settings.paddle_height,
            speed,
            velocity: 0.0,
            control,
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::from_rect(self.pos.x, self.pos.y, self.width, self.height)
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.height * 0.5
    }

    /// Vertical direction of travel: -1 up, 0 still, 1 down
    pub fn direction(&self) -> i8 {
        if self.velocity > 0.0 {
            1
        } else if self.velocity < 0.0 {
            -1
        } else {
            0
        }
    }

    /// Ask the control for a velocity, integrate, then keep the paddle on screen
    pub fn update(&mut self, dt: f32, ctx: &ControlContext) {
        self.velocity = self.control.decide_velocity(self, ctx);
        self.pos.y += self.velocity * dt;
        self.clamp_to(ctx.canvas_height);
    }

    /// Keep the whole paddle inside `[0, canvas_height]`
    pub fn clamp_to(&mut self, canvas_height: f32) {
        let max_y = (canvas_height - self.height).max(0.0);
        self.pos.y = self.pos.y.min(max_y).max(0.0);
    }

    /// Move home and stop
    pub fn reset(&mut self, x: f32, y: f32) {
        self.pos = Vec2::new(x, y);
        self.velocity = 0.0;
    }
}
