//! Fixed-timestep loop.
//!
//! Simulation runs at a fixed 60 Hz regardless of how often the loop is
//! polled. [`GameLoop::tick`] measures wall-clock time; [`GameLoop::advance`]
//! takes an explicit frame time so headless runs and tests stay deterministic.

use std::time::Instant;
use tracing::warn;

/// Fixed simulation timestep: 60 Hz.
pub const FIXED_DT: f64 = 1.0 / 60.0;

/// Maximum frame time accepted in one poll. Longer frames are clamped and the
/// simulation slows down instead of running dozens of catch-up steps.
pub const MAX_FRAME_TIME: f64 = 0.25;

/// Fixed-timestep loop state.
pub struct GameLoop {
    previous_time: Instant,
    accumulator: f64,
    total_sim_time: f64,
    update_count: u64,
}

impl GameLoop {
    /// Creates a loop starting from the current instant.
    pub fn new() -> Self {
        Self {
            previous_time: Instant::now(),
            accumulator: 0.0,
            total_sim_time: 0.0,
            update_count: 0,
        }
    }

    /// Measures wall-clock time since the last call and runs the fixed steps
    /// that fit into it. Returns the number of steps run.
    ///
    /// `update_fn(fixed_dt, total_sim_time)` is called zero or more times.
    pub fn tick(&mut self, update_fn: impl FnMut(f64, f64)) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.previous_time).as_secs_f64();
        self.previous_time = now;
        self.advance(frame_time, update_fn)
    }

    /// Runs the fixed steps that fit into `frame_time` seconds plus any
    /// carried-over remainder. Returns the number of steps run.
    pub fn advance(&mut self, mut frame_time: f64, mut update_fn: impl FnMut(f64, f64)) -> u32 {
        if frame_time > MAX_FRAME_TIME {
            warn!(
                "Frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                frame_time * 1000.0,
                MAX_FRAME_TIME * 1000.0
            );
            frame_time = MAX_FRAME_TIME;
        }

        self.accumulator += frame_time.max(0.0);

        let mut steps = 0;
        while self.accumulator >= FIXED_DT {
            update_fn(FIXED_DT, self.total_sim_time);
            self.total_sim_time += FIXED_DT;
            self.accumulator -= FIXED_DT;
            self.update_count += 1;
            steps += 1;
        }
        steps
    }

    /// Fraction of a step carried over to the next frame, in `[0, 1)`.
    pub fn alpha(&self) -> f64 {
        if self.accumulator > 0.0 {
            self.accumulator / FIXED_DT
        } else {
            0.0
        }
    }

    /// Total number of fixed steps executed.
    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    /// Total simulated time in seconds.
    pub fn total_sim_time(&self) -> f64 {
        self.total_sim_time
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}
