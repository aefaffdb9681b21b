//! Cue timing: when the bounce sound fires relative to the animation
//! epoch.
//!
//! The first fire lands on the ball's first ground contact (end of the
//! fall phase), pulled forward by a fixed latency allowance; every later
//! fire is one cycle after the previous *scheduled* fire. The schedule is
//! computed once and never resynchronized to the render clock, so the two
//! loops can drift apart over long runtimes. That matches the intended
//! behavior; do not silently correct it.

use crate::constants::CUE_START_LATENCY_MS;
use crate::physics::PhysicsConstants;
use std::time::Duration;

#[derive(Clone, Copy, Debug)]
pub struct CueSchedule {
    pub initial_delay: Duration,
    pub period: Duration,
}

impl CueSchedule {
    pub fn for_bounce(physics: &PhysicsConstants) -> Self {
        let first_impact_ms = physics.first_cycle_duration * 1000.0;
        // clamp rather than hand a negative delay to the timer
        let delay_ms = (first_impact_ms - CUE_START_LATENCY_MS as f64).max(0.0);
        Self {
            initial_delay: Duration::from_secs_f64(delay_ms / 1000.0),
            period: Duration::from_secs_f64(physics.cycle_duration),
        }
    }

    /// Epoch-relative time of the `n`th fire.
    pub fn fire_time(&self, n: u32) -> Duration {
        self.initial_delay + self.period * n
    }
}
