//! Canvas Pong - single-screen Pong on a 2D drawing surface
//!
//! Core modules:
//! - `sim`: Per-tick simulation (collision, AI paddle, scoring)
//! - `renderer`: Surface abstraction plus CPU mesh and canvas backends
//! - `input`: Pointer-to-paddle mapping and the shared pointer scalar
//! - `driver`: Fixed-rate frame driver
//! - `settings`: Persisted presentation preferences

pub mod driver;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use driver::{FixedTicker, Session};
pub use settings::{Settings, Theme};

/// Game configuration constants
pub mod consts {
    use std::f32::consts::FRAC_PI_4;

    /// Default surface dimensions (headless driver)
    pub const FIELD_WIDTH: f32 = 600.0;
    pub const FIELD_HEIGHT: f32 = 400.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Gap between a paddle and its side wall
    pub const PADDLE_MARGIN: f32 = 20.0;

    /// Ball defaults (velocities are in pixels per tick)
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_START_SPEED: f32 = 5.0;
    pub const BALL_START_VELOCITY: (f32, f32) = (5.0, 5.0);

    /// Added to ball speed on every paddle bounce (uncapped)
    pub const PADDLE_SPEEDUP: f32 = 0.5;
    /// Deflection at the very edge of a paddle
    pub const MAX_BOUNCE_ANGLE: f32 = FRAC_PI_4;
    /// Proportional gain of the computer paddle
    pub const AI_LEVEL: f32 = 0.1;

    /// Net decoration
    pub const NET_X_OFFSET: f32 = 1.0;
    pub const NET_SEGMENT_WIDTH: f32 = 2.0;
    pub const NET_SEGMENT_HEIGHT: f32 = 10.0;
    pub const NET_SEGMENT_SPACING: f32 = 15.0;

    /// Frame driver rate
    pub const TICK_HZ: u32 = 50;
    /// Maximum ticks per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Score text
    pub const SCORE_FONT: &str = "45px sans-serif";
}
