//! The ball
//!
//! A purely kinematic entity. Speed is tracked separately from the velocity
//! vector so angle changes never drift the magnitude.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_6};

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::{Bounds, hit_point};
use super::paddle::Paddle;
use crate::settings::Settings;

/// Width of each diagonal launch band (30 degrees)
const LAUNCH_BAND: f32 = FRAC_PI_6;

/// Pick a launch angle inside one of the four diagonal bands.
///
/// Each quadrant contributes the band [30, 60) degrees past its start, so
/// the ball never leaves purely horizontal or vertical.
pub fn random_launch_angle<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    let quadrant = rng.random_range(0..4u32);
    let offset = rng.random_range(0.0..LAUNCH_BAND);
    quadrant as f32 * FRAC_PI_2 + LAUNCH_BAND + offset
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Center, canvas space
    pub pos: Vec2,
    radius: f32,
    vel: Vec2,
    speed: f32,
    initial_speed: f32,
    max_speed: f32,
    speed_increment: f32,
    max_bounce_angle: f32,
    hit_separation: f32,
}

impl Ball {
    /// A resting ball at `pos`; call `reset` or `set_random_velocity` to launch it
    pub fn new(pos: Vec2, settings: &Settings) -> Self {
        Self {
            pos,
            radius: settings.ball_radius,
            vel: Vec2::ZERO,
            speed: settings.ball_initial_speed,
            initial_speed: settings.ball_initial_speed,
            max_speed: settings.ball_max_speed,
            speed_increment: settings.ball_speed_increment,
            max_bounce_angle: settings.max_bounce_angle,
            hit_separation: settings.hit_separation,
        }
    }

    #[inline]
    pub fn vel(&self) -> Vec2 {
        self.vel
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn initial_speed(&self) -> f32 {
        self.initial_speed
    }

    pub fn max_speed(&self) -> f32 {
        self.max_speed
    }

    pub fn speed_increment(&self) -> f32 {
        self.speed_increment
    }

    pub fn max_bounce_angle(&self) -> f32 {
        self.max_bounce_angle
    }

    pub fn hit_separation(&self) -> f32 {
        self.hit_separation
    }

    /// Override the velocity; speed follows the new magnitude (capped)
    #[cfg(test)]
    pub(crate) fn set_velocity(&mut self, vel: Vec2) {
        let speed = vel.length();
        if speed > self.max_speed {
            self.vel = vel * (self.max_speed / speed);
            self.speed = self.max_speed;
        } else {
            self.vel = vel;
            self.speed = speed;
        }
    }

    pub fn set_random_velocity<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let angle = random_launch_angle(rng);
        self.vel = Vec2::new(angle.cos(), angle.sin()) * self.speed;
    }

    /// Explicit Euler step; `dt` is already clamped by the caller
    #[inline]
    pub fn update(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::around(self.pos.x, self.pos.y, self.radius)
    }

    /// Bounce off the top and bottom walls. Returns true on a hit.
    pub fn check_wall_collision(&mut self, canvas_height: f32) -> bool {
        let mut hit = false;

        if self.pos.y - self.radius < 0.0 {
            self.pos.y = self.radius;
            self.vel.y = self.vel.y.abs();
            hit = true;
        }

        if self.pos.y + self.radius > canvas_height {
            self.pos.y = canvas_height - self.radius;
            self.vel.y = -self.vel.y.abs();
            hit = true;
        }

        hit
    }

    /// Normalized hit point if the ball box overlaps the paddle
    pub fn check_paddle_collision(&self, paddle: &Paddle) -> Option<f32> {
        let paddle_bounds = paddle.bounds();
        if self.bounds().overlaps(&paddle_bounds) {
            Some(hit_point(self.pos.y, &paddle_bounds))
        } else {
            None
        }
    }

    /// Rebound off a paddle.
    ///
    /// The rebound angle comes from the hit point alone; the old vertical
    /// velocity is discarded. The direction is rebuilt at the current speed,
    /// then `increase_speed` rescales it along that new travel angle.
    pub fn apply_paddle_hit(&mut self, hit_point: f32) {
        let hit_point = if hit_point.is_finite() {
            hit_point.clamp(-1.0, 1.0)
        } else {
            0.0
        };

        let direction = -self.vel.x.signum();
        let angle = hit_point * self.max_bounce_angle;
        self.vel = Vec2::new(
            direction * self.speed * angle.cos(),
            self.speed * angle.sin(),
        );

        self.increase_speed();

        self.pos.x += direction * self.hit_separation;
    }

    /// Grow speed by the increment (capped), keeping the travel direction
    pub fn increase_speed(&mut self) {
        self.speed = (self.speed * self.speed_increment).min(self.max_speed);
        let angle = self.vel.y.atan2(self.vel.x);
        self.vel = Vec2::new(angle.cos(), angle.sin()) * self.speed;
    }

    /// Pull the center back inside a `width` x `height` canvas; velocity is untouched
    pub fn clamp_to(&mut self, width: f32, height: f32) {
        let max_y = (height - self.radius).max(self.radius);
        self.pos.x = self.pos.x.min(width).max(0.0);
        self.pos.y = self.pos.y.min(max_y).max(self.radius);
    }

    /// Recenter at `(x, y)` with the initial speed and a fresh direction
    pub fn reset<R: Rng + ?Sized>(&mut self, x: f32, y: f32, rng: &mut R) {
        self.pos = Vec2::new(x, y);
        self.speed = self.initial_speed;
        self.set_random_velocity(rng);
    }
}
