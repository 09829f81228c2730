//! Game state and core simulation types
//!
//! Everything the update/render cycle mutates lives in `GameState`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::consts::*;

/// Which paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Pointer-controlled paddle on the left
    User,
    /// AI-controlled paddle on the right
    Computer,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::User => "user",
            Side::Computer => "computer",
        }
    }
}

/// Something notable that happened during a tick (logging only)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball reflected off the top or bottom wall
    WallBounce,
    /// Ball bounced off a paddle at the given angle (radians)
    PaddleBounce { side: Side, angle: f32 },
    /// A point was scored by `side`
    Scored { side: Side },
}

/// Playfield bounds, fixed for the session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Default for Field {
    fn default() -> Self {
        Self::new(FIELD_WIDTH, FIELD_HEIGHT)
    }
}

impl Field {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Center of the field
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// X coordinate of the center line
    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }
}

/// A paddle (top-left anchored rectangle)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub score: u32,
}

impl Paddle {
    /// Startup paddle, vertically centered on its side of the field
    pub fn new(side: Side, field: Field) -> Self {
        let x = match side {
            Side::User => PADDLE_MARGIN,
            Side::Computer => field.width - PADDLE_MARGIN - PADDLE_WIDTH,
        };
        Self {
            side,
            pos: Vec2::new(x, field.height / 2.0 - PADDLE_HEIGHT / 2.0),
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            score: 0,
        }
    }

    /// Vertical center of the paddle
    #[inline]
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.height / 2.0
    }

    pub fn bounds(&self) -> Aabb {
        Aabb {
            top: self.pos.y,
            bottom: self.pos.y + self.height,
            left: self.pos.x,
            right: self.pos.x + self.width,
        }
    }
}

/// The ball
///
/// `speed` is the magnitude the velocity is resynthesized to on a paddle
/// bounce. Between bounces `vel` is what moves the ball and is never
/// renormalized, so the two may drift apart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Center
    pub pos: Vec2,
    /// Pixels per tick
    pub vel: Vec2,
    pub radius: f32,
    pub speed: f32,
}

impl Ball {
    pub fn new(field: Field) -> Self {
        let (vx, vy) = BALL_START_VELOCITY;
        Self {
            pos: field.center(),
            vel: Vec2::new(vx, vy),
            radius: BALL_RADIUS,
            speed: BALL_START_SPEED,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb {
            top: self.pos.y - self.radius,
            bottom: self.pos.y + self.radius,
            left: self.pos.x - self.radius,
            right: self.pos.x + self.radius,
        }
    }

    /// Move by one tick of velocity
    #[inline]
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }
}

/// Decorative center net
#[derive(Debug, Clone, Copy)]
pub struct Net {
    pub x: f32,
    pub segment_width: f32,
    pub segment_height: f32,
    pub spacing: f32,
    pub field_height: f32,
}

impl Net {
    pub fn new(field: Field) -> Self {
        Self {
            x: field.half_width() - NET_X_OFFSET,
            segment_width: NET_SEGMENT_WIDTH,
            segment_height: NET_SEGMENT_HEIGHT,
            spacing: NET_SEGMENT_SPACING,
            field_height: field.height,
        }
    }

    /// Segment rectangles as (x, y, w, h), top to bottom
    pub fn segments(&self) -> impl Iterator<Item = (f32, f32, f32, f32)> + '_ {
        (0..)
            .map(move |i| i as f32 * self.spacing)
            .take_while(move |y| *y <= self.field_height)
            .map(move |y| (self.x, y, self.segment_width, self.segment_height))
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub field: Field,
    /// Pointer-controlled paddle
    pub user: Paddle,
    /// AI-controlled paddle
    pub com: Paddle,
    pub ball: Ball,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events raised by the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Startup layout for a field of the given size
    pub fn new(field: Field) -> Self {
        Self {
            field,
            user: Paddle::new(Side::User, field),
            com: Paddle::new(Side::Computer, field),
            ball: Ball::new(field),
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    pub fn net(&self) -> Net {
        Net::new(self.field)
    }
}
