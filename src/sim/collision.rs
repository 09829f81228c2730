//! Ball/paddle collision detection
//!
//! The ball is treated as its bounding square, so the test is a plain
//! axis-aligned box overlap.

use serde::{Deserialize, Serialize};

use super::state::{Ball, Paddle};

/// Axis-aligned box in screen coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl Aabb {
    /// Strict overlap on both axes. Boxes sharing only an edge do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.right > other.left
            && self.bottom > other.top
            && self.left < other.right
            && self.top < other.bottom
    }
}

/// Check whether the ball touches the paddle
pub fn collides(ball: &Ball, paddle: &Paddle) -> bool {
    ball.bounds().overlaps(&paddle.bounds())
}
