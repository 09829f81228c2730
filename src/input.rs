//! Pointer input for the user paddle
//!
//! The platform's pointer callback is the only writer and the frame driver
//! the only reader. A stale read just means the paddle lags one tick.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::GameState;

/// Paddle top for a pointer at `pointer_y`, centering the paddle on it.
///
/// Not clamped, so the paddle can leave the surface.
#[inline]
pub fn paddle_y_for_pointer(pointer_y: f32, paddle_height: f32) -> f32 {
    pointer_y - paddle_height / 2.0
}

/// Latest pointer y, shared between the input callback and the driver
///
/// Stored as `f32` bits in an atomic. NaN means no sample yet.
#[derive(Debug, Clone)]
pub struct PointerTarget {
    bits: Arc<AtomicU32>,
}

impl Default for PointerTarget {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerTarget {
    pub fn new() -> Self {
        Self {
            bits: Arc::new(AtomicU32::new(f32::NAN.to_bits())),
        }
    }

    /// Record a pointer position (surface coordinates)
    pub fn set(&self, pointer_y: f32) {
        self.bits.store(pointer_y.to_bits(), Ordering::Relaxed);
    }

    /// Most recent pointer position, if any
    pub fn latest(&self) -> Option<f32> {
        let y = f32::from_bits(self.bits.load(Ordering::Relaxed));
        if y.is_nan() { None } else { Some(y) }
    }
}

/// Scripted stand-in for a human on the headless driver
///
/// Drags the pointer toward the ball at a limited rate with some seeded
/// wobble, so rallies end now and then.
#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    pointer_y: f32,
    /// Max pointer travel per tick (pixels)
    pub max_step: f32,
    /// Max random offset from the ball (pixels)
    pub jitter: f32,
}

impl Autopilot {
    pub fn new(seed: u64, start_y: f32) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            pointer_y: start_y,
            max_step: 6.0,
            jitter: 40.0,
        }
    }

    /// Pick the next pointer position for the current state
    pub fn aim(&mut self, state: &GameState) -> f32 {
        let wobble = if self.jitter > 0.0 {
            self.rng.random_range(-self.jitter..=self.jitter)
        } else {
            0.0
        };
        let target = state.ball.pos.y + wobble;
        let step = (target - self.pointer_y).clamp(-self.max_step, self.max_step);
        self.pointer_y += step;
        self.pointer_y
    }
}
