// Host-side tests for the closed-form bounce derivation.

use evening_core::physics::{PhysicsConstants, PhysicsError, PhysicsInputs, ShineParams};

const TOL: f64 = 1e-6;

fn default_constants() -> PhysicsConstants {
    PhysicsConstants::derive(PhysicsInputs::default()).expect("default inputs are valid")
}

#[test]
fn derive_matches_closed_forms_for_default_inputs() {
    // radius 0.175, gravity -3, upwards 24, starting height 0.825
    let pc = default_constants();

    let t1 = (2.0 * 0.65 / 3.0_f64).sqrt(); // sqrt(1.3/3)
    assert!((pc.first_cycle_duration - t1).abs() < TOL);
    assert!((pc.velocity_after_first_cycle - t1 * -3.0).abs() < TOL);
    assert!((pc.second_cycle_duration - (t1 * 3.0 / 24.0)).abs() < TOL);

    // p2 = radius - v1^2 / (2a), and v1^2 = 2|g|(h - r) = 3.9 exactly
    assert!((pc.position_after_second_cycle - 0.09375).abs() < TOL);

    // spot values
    assert!((pc.first_cycle_duration - 0.658281).abs() < 1e-5);
    assert!((pc.velocity_after_first_cycle + 1.974842).abs() < 1e-5);
    assert!((pc.second_cycle_duration - 0.082285).abs() < 1e-5);
    assert!((pc.cycle_duration - 1.481133).abs() < 1e-5);
}

#[test]
fn cycle_is_symmetric_for_default_inputs() {
    // The rebound retraces the fall: phases 3/4 mirror phases 2/1, and
    // the apex of phase 4 is exactly the starting height.
    let pc = default_constants();

    assert!((pc.third_cycle_duration - pc.second_cycle_duration).abs() < TOL);
    assert!((pc.fourth_cycle_duration - pc.first_cycle_duration).abs() < TOL);
    assert!((pc.velocity_after_third_cycle + pc.velocity_after_first_cycle).abs() < TOL);

    let apex = pc.height_at(pc.cycle_duration - 1e-9);
    assert!((apex - pc.starting_height).abs() < 1e-6);
}

#[test]
fn durations_are_positive_over_the_valid_domain() {
    for &radius in &[0.05, 0.175, 0.3] {
        for &gravity in &[-0.5, -3.0, -9.81] {
            for &upwards in &[2.0, 24.0, 80.0] {
                for &starting_height in &[radius + 0.01, radius + 0.5, 2.0] {
                    let pc = PhysicsConstants::derive(PhysicsInputs {
                        radius,
                        gravity,
                        upwards_acceleration: upwards,
                        starting_height,
                    })
                    .expect("inputs are inside the valid domain");
                    assert!(pc.first_cycle_duration > 0.0);
                    assert!(pc.second_cycle_duration > 0.0);
                    assert!(pc.third_cycle_duration > 0.0);
                    assert!(pc.fourth_cycle_duration > 0.0);
                    assert!(pc.cycle_duration > 0.0);
                }
            }
        }
    }
}

#[test]
fn derive_rejects_domain_violations() {
    let base = PhysicsInputs::default();

    let err = PhysicsConstants::derive(PhysicsInputs {
        gravity: 3.0,
        ..base
    })
    .unwrap_err();
    assert_eq!(err, PhysicsError::GravityNotDownward(3.0));

    let err = PhysicsConstants::derive(PhysicsInputs {
        upwards_acceleration: -1.0,
        ..base
    })
    .unwrap_err();
    assert_eq!(err, PhysicsError::UpwardsAccelerationNotUpward(-1.0));

    // ball starting at or below its rest height
    let err = PhysicsConstants::derive(PhysicsInputs {
        starting_height: 0.1,
        ..base
    })
    .unwrap_err();
    assert!(matches!(err, PhysicsError::StartsBelowRest { .. }));
}

#[test]
fn shine_params_match_expected_values() {
    let shine = ShineParams::new(0.375).unwrap();
    assert!((shine.max_dist - 0.790569).abs() < 1e-5);

    let shine = ShineParams::new(1.0).unwrap();
    assert!(shine.max_dist.abs() < TOL);

    assert_eq!(
        ShineParams::new(1.5).unwrap_err(),
        PhysicsError::ShineOffsetTooLarge(1.5)
    );
}

#[test]
fn height_passes_through_the_phase_boundaries() {
    let pc = default_constants();

    assert!((pc.height_at(0.0) - pc.starting_height).abs() < TOL);
    // ground contact at the end of the fall
    assert!((pc.height_at(pc.first_cycle_duration) - pc.radius).abs() < 1e-6);
    // deepest squash at the end of phase 2
    let t12 = pc.first_cycle_duration + pc.second_cycle_duration;
    assert!((pc.height_at(t12) - pc.position_after_second_cycle).abs() < 1e-6);
    // back to the rest height at the end of phase 3
    let t123 = t12 + pc.third_cycle_duration;
    assert!((pc.height_at(t123) - pc.radius).abs() < 1e-6);
}

#[test]
fn height_is_periodic_and_continuous_across_cycles() {
    let pc = default_constants();
    for i in 0..50 {
        let t = i as f64 * 0.031;
        let a = pc.height_at(t);
        let b = pc.height_at(t + pc.cycle_duration);
        let c = pc.height_at(t + 3.0 * pc.cycle_duration);
        assert!((a - b).abs() < 1e-9, "not periodic at t={t}");
        assert!((a - c).abs() < 1e-9, "not periodic at t={t}");
    }

    // no jump at the cycle boundary
    let before = pc.height_at(pc.cycle_duration - 1e-7);
    let after = pc.height_at(pc.cycle_duration + 1e-7);
    assert!((before - after).abs() < 1e-5);
}

#[test]
fn height_decreases_monotonically_during_the_fall() {
    let pc = default_constants();
    let mut prev = pc.height_at(0.0);
    let steps = 100;
    for i in 1..=steps {
        let t = pc.first_cycle_duration * i as f64 / steps as f64;
        let h = pc.height_at(t - 1e-9);
        assert!(h <= prev, "height rose during free fall at t={t}");
        prev = h;
    }
}
