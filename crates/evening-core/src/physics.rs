//! Closed-form kinematics of one bounce cycle.
//!
//! A cycle is four phases: free fall from `starting_height` to the ball's
//! rest height, deceleration below the rest height under a strong upward
//! field, re-acceleration back up to the rest height, and deceleration
//! under gravity up to the apex. Each phase duration is derived exactly,
//! so the cycle period is constant and the loop is seamless. Every cycle
//! restarts the drop from `starting_height`; no energy decay is modeled,
//! and none should be added.

use crate::constants;
use thiserror::Error;

/// Violations of the input domain that would make a phase duration take
/// the square root of a negative operand (or a timer period go negative).
#[derive(Debug, Error, PartialEq)]
pub enum PhysicsError {
    #[error("gravity must be negative, got {0}")]
    GravityNotDownward(f64),
    #[error("upwards acceleration must be positive, got {0}")]
    UpwardsAccelerationNotUpward(f64),
    #[error("ball must start above its rest height: radius {radius}, starting height {starting_height}")]
    StartsBelowRest { radius: f64, starting_height: f64 },
    #[error("shine offset must be at most 1, got {0}")]
    ShineOffsetTooLarge(f64),
}

/// The four physical inputs the whole derivation hangs off.
#[derive(Clone, Copy, Debug)]
pub struct PhysicsInputs {
    pub radius: f64,
    pub gravity: f64,
    pub upwards_acceleration: f64,
    pub starting_height: f64,
}

impl Default for PhysicsInputs {
    fn default() -> Self {
        Self {
            radius: constants::BALL_RADIUS,
            gravity: constants::GRAVITY,
            upwards_acceleration: constants::UPWARDS_ACCELERATION,
            starting_height: constants::STARTING_HEIGHT,
        }
    }
}

/// Everything the renderer and the cue scheduler consume, derived once at
/// startup in dependency order.
#[derive(Clone, Copy, Debug)]
pub struct PhysicsConstants {
    pub radius: f64,
    pub gravity: f64,
    pub upwards_acceleration: f64,
    pub starting_height: f64,

    pub first_cycle_duration: f64,
    pub velocity_after_first_cycle: f64,
    pub second_cycle_duration: f64,
    pub position_after_second_cycle: f64,
    pub third_cycle_duration: f64,
    pub velocity_after_third_cycle: f64,
    pub fourth_cycle_duration: f64,
    pub cycle_duration: f64,
}

impl PhysicsConstants {
    /// Derive all phase durations and boundary states. Fails fast on
    /// domain violations instead of feeding negative durations into the
    /// timers downstream.
    pub fn derive(inputs: PhysicsInputs) -> Result<Self, PhysicsError> {
        let PhysicsInputs {
            radius,
            gravity,
            upwards_acceleration,
            starting_height,
        } = inputs;

        if gravity >= 0.0 {
            return Err(PhysicsError::GravityNotDownward(gravity));
        }
        if upwards_acceleration <= 0.0 {
            return Err(PhysicsError::UpwardsAccelerationNotUpward(
                upwards_acceleration,
            ));
        }
        if starting_height <= radius {
            return Err(PhysicsError::StartsBelowRest {
                radius,
                starting_height,
            });
        }

        // Phase 1: free fall to the rest height. Both operands of the
        // ratio are negative, so it is positive.
        let first_cycle_duration = (2.0 * (radius - starting_height) / gravity).sqrt();
        let velocity_after_first_cycle = first_cycle_duration * gravity;

        // Phase 2: the upward field brakes the fall below the rest height.
        let second_cycle_duration = -velocity_after_first_cycle / upwards_acceleration;
        let position_after_second_cycle = 0.5
            * upwards_acceleration
            * second_cycle_duration.powi(2)
            + velocity_after_first_cycle * second_cycle_duration
            + radius;

        // Phase 3: the same field pushes the ball back up to the rest height.
        let third_cycle_duration =
            (2.0 * (radius - position_after_second_cycle) / upwards_acceleration).sqrt();
        let velocity_after_third_cycle = third_cycle_duration * upwards_acceleration;

        // Phase 4: gravity brakes the ascent up to the apex.
        let fourth_cycle_duration = -velocity_after_third_cycle / gravity;

        let cycle_duration = first_cycle_duration
            + second_cycle_duration
            + third_cycle_duration
            + fourth_cycle_duration;

        debug_assert!(first_cycle_duration > 0.0);
        debug_assert!(second_cycle_duration > 0.0);
        debug_assert!(third_cycle_duration > 0.0);
        debug_assert!(fourth_cycle_duration > 0.0);

        log::debug!(
            "derived bounce constants: t1={first_cycle_duration:.6} t2={second_cycle_duration:.6} \
             t3={third_cycle_duration:.6} t4={fourth_cycle_duration:.6} cycle={cycle_duration:.6}"
        );

        Ok(Self {
            radius,
            gravity,
            upwards_acceleration,
            starting_height,
            first_cycle_duration,
            velocity_after_first_cycle,
            second_cycle_duration,
            position_after_second_cycle,
            third_cycle_duration,
            velocity_after_third_cycle,
            fourth_cycle_duration,
            cycle_duration,
        })
    }

    /// Height of the ball center at `elapsed` seconds since the epoch.
    /// Periodic with period `cycle_duration`; each cycle restarts the drop
    /// from `starting_height`. The WGSL kernel mirrors this function.
    pub fn height_at(&self, elapsed: f64) -> f64 {
        let t = elapsed.rem_euclid(self.cycle_duration);
        if t < self.first_cycle_duration {
            return self.starting_height + 0.5 * self.gravity * t * t;
        }
        let t = t - self.first_cycle_duration;
        if t < self.second_cycle_duration {
            return self.radius
                + self.velocity_after_first_cycle * t
                + 0.5 * self.upwards_acceleration * t * t;
        }
        let t = t - self.second_cycle_duration;
        if t < self.third_cycle_duration {
            return self.position_after_second_cycle + 0.5 * self.upwards_acceleration * t * t;
        }
        let t = t - self.third_cycle_duration;
        self.radius + self.velocity_after_third_cycle * t + 0.5 * self.gravity * t * t
    }
}

/// Shine highlight parameters for the rendering kernel.
#[derive(Clone, Copy, Debug)]
pub struct ShineParams {
    pub offset: f64,
    pub max_dist: f64,
}

impl ShineParams {
    pub fn new(offset: f64) -> Result<Self, PhysicsError> {
        if offset > 1.0 {
            return Err(PhysicsError::ShineOffsetTooLarge(offset));
        }
        Ok(Self {
            offset,
            max_dist: (1.0 - offset).sqrt(),
        })
    }
}
