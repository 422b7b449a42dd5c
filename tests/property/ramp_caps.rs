//! Per-call ramp limits for each variant, checked against a plain oracle.
//!
//! The oracle restates the arithmetic directly: apply `min(delta, cap)`,
//! then clamp at the ceiling. Results must match bit for bit.

use proptest::prelude::*;
use rampcheck::{VehicleKind, BICYCLE_STEP_CAP, SCOOTER_RAMP_RATIO};

use crate::common::{max_speed_strategy, positive_delta_strategy, vehicle_at_speed};

/// Expected speed after one accelerate call.
fn oracle_accelerate(kind: VehicleKind, speed: f64, max_speed: f64, delta: f64) -> f64 {
    let applied = match kind {
        VehicleKind::Car => delta,
        VehicleKind::Bicycle => delta.min(BICYCLE_STEP_CAP),
        VehicleKind::ElectricScooter => delta.min(max_speed * SCOOTER_RAMP_RATIO),
    };
    (speed + applied).min(max_speed)
}

/// Starting speed as a fraction of the ceiling.
fn fraction_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), 0.0f64..1.0, Just(1.0)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_car_applies_full_delta(
        max_speed in max_speed_strategy(),
        fraction in fraction_strategy(),
        delta in positive_delta_strategy(),
    ) {
        let mut car = vehicle_at_speed(VehicleKind::Car, max_speed, max_speed * fraction).unwrap();
        let before = car.speed();
        car.accelerate(delta).unwrap();
        prop_assert_eq!(car.speed(), oracle_accelerate(VehicleKind::Car, before, max_speed, delta));
    }

    #[test]
    fn prop_bicycle_gains_at_most_step_cap(
        max_speed in max_speed_strategy(),
        fraction in fraction_strategy(),
        delta in positive_delta_strategy(),
    ) {
        let mut bicycle =
            vehicle_at_speed(VehicleKind::Bicycle, max_speed, max_speed * fraction).unwrap();
        let before = bicycle.speed();
        bicycle.accelerate(delta).unwrap();
        prop_assert_eq!(
            bicycle.speed(),
            oracle_accelerate(VehicleKind::Bicycle, before, max_speed, delta)
        );
        prop_assert!(bicycle.speed() - before <= BICYCLE_STEP_CAP + 1e-9);
    }

    #[test]
    fn prop_scooter_gains_at_most_ratio_of_max(
        max_speed in max_speed_strategy(),
        fraction in fraction_strategy(),
        delta in positive_delta_strategy(),
    ) {
        let mut scooter =
            vehicle_at_speed(VehicleKind::ElectricScooter, max_speed, max_speed * fraction).unwrap();
        let before = scooter.speed();
        scooter.accelerate(delta).unwrap();
        prop_assert_eq!(
            scooter.speed(),
            oracle_accelerate(VehicleKind::ElectricScooter, before, max_speed, delta)
        );
        prop_assert!(scooter.speed() - before <= max_speed * SCOOTER_RAMP_RATIO * (1.0 + 1e-9));
    }

    /// Capped variants still get there, one bounded step at a time.
    #[test]
    fn prop_repeated_full_requests_reach_the_ceiling(
        kind in prop::sample::select(VehicleKind::ALL.to_vec()),
        max_speed in 0.01f64..500.0,
    ) {
        let v = vehicle_at_speed(kind, max_speed, f64::MAX).unwrap();
        prop_assert_eq!(v.speed(), max_speed);
    }
}

#[test]
fn test_bicycle_needs_eight_calls_to_reach_forty() {
    let mut bicycle = vehicle_at_speed(VehicleKind::Bicycle, 40.0, 0.0).unwrap();
    for expected in [5.0, 10.0, 15.0, 20.0, 25.0, 30.0, 35.0, 40.0] {
        bicycle.accelerate(100.0).unwrap();
        assert_eq!(bicycle.speed(), expected);
    }
    bicycle.accelerate(100.0).unwrap();
    assert_eq!(bicycle.speed(), 40.0);
}

#[test]
fn test_bicycle_small_request_is_not_rounded_up() {
    let mut bicycle = vehicle_at_speed(VehicleKind::Bicycle, 40.0, 0.0).unwrap();
    bicycle.accelerate(2.5).unwrap();
    assert_eq!(bicycle.speed(), 2.5);
}

#[test]
fn test_scooter_cap_scales_with_max_speed() {
    for (max_speed, step) in [(25.0, 3.75), (100.0, 15.0), (10.0, 1.5)] {
        let mut scooter = vehicle_at_speed(VehicleKind::ElectricScooter, max_speed, 0.0).unwrap();
        scooter.accelerate(1_000.0).unwrap();
        assert_eq!(scooter.speed(), step, "scooter with max {}", max_speed);
    }
}
