//! Simulated time resources.

use bevy_ecs::prelude::*;
use orrery_orbit::PositionResolver;

/// Simulated clock, advanced once per frame in `PreUpdate`.
///
/// The app writes `delta` before running the schedules.
#[derive(Resource, Debug, Clone, Default)]
pub struct SimClock {
    /// Seconds to advance this frame.
    pub delta: f64,
    /// Seconds elapsed since the clock started.
    pub elapsed: f64,
    /// Number of frames advanced.
    pub tick: u64,
}

impl SimClock {
    /// Elapsed time in milliseconds, the unit the camera scheduler works in.
    pub fn now_ms(&self) -> f64 {
        self.elapsed * 1000.0
    }
}

/// The resolver used to advance every orbit.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct OrbitResolver(pub PositionResolver);
