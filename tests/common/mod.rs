//! Shared test utilities and fixtures.

#![allow(dead_code)]

use proptest::prelude::*;
use rampcheck::{build_vehicle, Operation, Vehicle, VehicleKind};

// Re-export canonical test utilities from rampcheck::testing
pub use rampcheck::testing::{one_of_each, trajectory, vehicle_at_speed};

// ============================================================================
// FIXTURES
// ============================================================================

/// Build a stationary vehicle, panicking on a bad fixture.
pub fn vehicle(kind: VehicleKind, max_speed: f64) -> Box<dyn Vehicle> {
    build_vehicle(kind, max_speed)
        .unwrap_or_else(|e| panic!("fixture {}({}) invalid: {}", kind, max_speed, e))
}

/// Assert the speed envelope with a message naming the vehicle.
pub fn assert_in_envelope(vehicle: &dyn Vehicle) {
    assert!(
        vehicle.speed() >= 0.0 && vehicle.speed() <= vehicle.max_speed(),
        "{} left its envelope",
        vehicle
    );
}

// ============================================================================
// STRATEGIES
// ============================================================================

/// Any of the three variants.
pub fn kind_strategy() -> impl Strategy<Value = VehicleKind> {
    prop::sample::select(VehicleKind::ALL.to_vec())
}

/// Realistic top speeds, from a toy to a jet.
pub fn max_speed_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        0.01f64..1.0,
        1.0f64..100.0,
        100.0f64..10_000.0,
    ]
}

/// Top speeds far past anything the fixed script's own constants reach.
pub fn huge_max_speed_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        1e6f64..1e300,
        f64::MAX / 4.0..f64::MAX,
        Just(f64::MAX),
    ]
}

/// Strictly positive deltas across many magnitudes, `+∞` included.
pub fn positive_delta_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        1e-6f64..1.0,
        1.0f64..50.0,
        50.0f64..1e6,
        Just(1e300),
        Just(f64::INFINITY),
    ]
}

/// Deltas the contract must reject.
pub fn invalid_delta_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(0.0),
        Just(-0.0),
        -1e6f64..0.0,
        Just(f64::NAN),
        Just(f64::NEG_INFINITY),
    ]
}

/// Top speeds the constructors must reject: every invalid delta, plus `+∞`.
pub fn invalid_max_speed_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![invalid_delta_strategy(), Just(f64::INFINITY)]
}

/// A single valid request.
pub fn valid_operation_strategy() -> impl Strategy<Value = Operation> {
    (any::<bool>(), positive_delta_strategy()).prop_map(|(accelerate, delta)| {
        if accelerate {
            Operation::Accelerate(delta)
        } else {
            Operation::Brake(delta)
        }
    })
}

/// A sequence of valid requests.
pub fn journey_strategy() -> impl Strategy<Value = Vec<Operation>> {
    prop::collection::vec(valid_operation_strategy(), 0..30)
}
