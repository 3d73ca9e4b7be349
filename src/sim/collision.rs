//! Axis-aligned collision queries
//!
//! The ball is treated as its square bounding box (side = 2 * radius) and
//! paddles as plain rectangles. Good enough for an arcade bounce model.

use serde::{Deserialize, Serialize};

/// Rectangle edges in canvas space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Bounds {
    /// Bounds of a square centered on `(x, y)` with half-size `half`
    #[inline]
    pub fn around(x: f32, y: f32, half: f32) -> Self {
        Self {
            left: x - half,
            right: x + half,
            top: y - half,
            bottom: y + half,
        }
    }

    /// Bounds of a rectangle from its top-left corner
    #[inline]
    pub fn from_rect(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            left: x,
            right: x + width,
            top: y,
            bottom: y + height,
        }
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        (self.top + self.bottom) * 0.5
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Strict overlap test; touching edges do not count
    #[inline]
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.right > other.left
            && self.left < other.right
            && self.bottom > other.top
            && self.top < other.bottom
    }
}

/// Where along a paddle a point struck it, normalized to [-1, 1]
///
/// -1 is the paddle's top edge, +1 its bottom edge. Points beyond the
/// paddle (the ball box can overlap past a corner) clamp to the ends.
#[inline]
pub fn hit_point(y: f32, paddle: &Bounds) -> f32 {
    let half = paddle.height() * 0.5;
    if half <= 0.0 {
        return 0.0;
    }
    ((y - paddle.center_y()) / half).clamp(-1.0, 1.0)
}
