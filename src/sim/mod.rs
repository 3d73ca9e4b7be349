//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and deterministic:
//! - Elapsed time comes from the caller, clamped, never read from a clock
//! - Seeded RNG only
//! - Fixed update order (paddles, ball, collisions, scoring)
//! - No rendering, audio or platform dependencies

pub mod ball;
pub mod collision;
pub mod control;
pub mod paddle;
pub mod state;
pub mod tick;

pub use ball::{Ball, random_launch_angle};
pub use collision::{Bounds, hit_point};
pub use control::{AiControl, Control, ControlContext, HumanControl, PaddleControl};
pub use paddle::{Paddle, Side};
pub use state::{
    BallView, GameEvent, Match, MatchStatus, PaddleView, Snapshot, TickInput, TickResult,
};
