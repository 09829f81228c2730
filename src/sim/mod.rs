//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One call to `tick` per frame, velocities are per tick
//! - No rendering or platform dependencies
//! - All state owned by `GameState`, no globals

pub mod ai;
pub mod collision;
pub mod state;
pub mod tick;

pub use ai::track_ball;
pub use collision::{Aabb, collides};
pub use state::{Ball, Field, GameEvent, GameState, Net, Paddle, Side};
pub use tick::{TickInput, bounce_off_paddle, reset_ball, tick};
