//! Frame driver
//!
//! `Session` owns everything one game needs. A platform timer calls
//! `Session::frame` at the configured rate, or a display loop feeds
//! variable frame times to `Session::advance`, which runs whole fixed ticks.

use crate::consts::MAX_SUBSTEPS;
use crate::input::PointerTarget;
use crate::renderer::{Surface, render};
use crate::settings::Settings;
use crate::sim::{Field, GameEvent, GameState, TickInput, tick};

/// Accumulates variable frame time into whole fixed ticks
#[derive(Debug, Clone)]
pub struct FixedTicker {
    dt: f32,
    accumulator: f32,
}

impl FixedTicker {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
        }
    }

    /// Add frame time. Returns the number of ticks to run now.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        // Long stalls (tab in background, debugger) don't replay. NaN counts
        // as no time passing.
        self.accumulator += frame_dt.max(0.0).min(0.1);
        // A display slower than the tick rate must not build a backlog:
        // keep enough for one full burst and drop the rest
        self.accumulator = self
            .accumulator
            .min(self.dt * (MAX_SUBSTEPS + 1) as f32);

        let mut steps = 0;
        while self.accumulator >= self.dt && steps < MAX_SUBSTEPS {
            self.accumulator -= self.dt;
            steps += 1;
        }
        steps
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }
}

/// One running game
#[derive(Debug)]
pub struct Session {
    pub state: GameState,
    pub settings: Settings,
    pointer: PointerTarget,
    ticker: FixedTicker,
}

impl Session {
    pub fn new(field: Field, settings: Settings) -> Self {
        log::info!(
            "New session on {}x{} field at {} Hz",
            field.width,
            field.height,
            settings.effective_tick_hz()
        );
        Self {
            state: GameState::new(field),
            ticker: FixedTicker::new(settings.tick_dt()),
            settings,
            pointer: PointerTarget::new(),
        }
    }

    /// Session sized to the surface it will paint on
    pub fn for_surface<S: Surface + ?Sized>(surface: &S, settings: Settings) -> Self {
        let (width, height) = surface.size();
        Self::new(Field::new(width, height), settings)
    }

    /// Handle for the pointer callback to write into
    pub fn pointer(&self) -> PointerTarget {
        self.pointer.clone()
    }

    /// Run one simulation tick using the latest pointer sample
    pub fn step(&mut self) {
        let input = TickInput {
            pointer_y: self.pointer.latest(),
        };
        tick(&mut self.state, &input);
        self.log_events();
    }

    /// Timer entry point: one tick, then one render
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.step();
        render(&self.state, surface, &self.settings);
    }

    /// Display-loop entry point: run as many ticks as `frame_dt` covers,
    /// then render if anything changed. Returns the tick count.
    pub fn advance<S: Surface + ?Sized>(&mut self, surface: &mut S, frame_dt: f32) -> u32 {
        let steps = self.ticker.accumulate(frame_dt);
        for _ in 0..steps {
            self.step();
        }
        if steps > 0 {
            render(&self.state, surface, &self.settings);
        }
        steps
    }

    fn log_events(&self) {
        for event in &self.state.events {
            match event {
                GameEvent::Scored { side } => log::info!(
                    "Point to {} ({} - {}) at tick {}",
                    side.as_str(),
                    self.state.user.score,
                    self.state.com.score,
                    self.state.time_ticks
                ),
                GameEvent::PaddleBounce { side, angle } => log::debug!(
                    "Bounce off {} paddle at {:.1}°, speed now {}",
                    side.as_str(),
                    angle.to_degrees(),
                    self.state.ball.speed
                ),
                GameEvent::WallBounce => log::trace!("Wall bounce at y={}", self.state.ball.pos.y),
            }
        }
    }
}
