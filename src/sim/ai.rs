//! Computer paddle controller

use super::state::{Ball, Paddle};
use crate::consts::AI_LEVEL;

/// Move the paddle a fixed fraction of the way from its center to the ball.
///
/// No clamping against the field: the paddle may leave the surface.
pub fn track_ball(paddle: &mut Paddle, ball: &Ball) {
    paddle.pos.y += (ball.pos.y - paddle.center_y()) * AI_LEVEL;
}
