// Copyright 2025-present The rampcheck Authors
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for arbitrary operation sequences.
//!
//! Any top speed, any deltas (NaN, infinities, negatives, subnormals), any
//! order. Valid requests must keep the envelope and move speed the right way;
//! invalid ones must be rejected without touching state.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rampcheck::verify::{SCRIPT_ACCELERATE, SCRIPT_EXTREME_BRAKE};
use rampcheck::{build_vehicle, lsp_check, Operation, VehicleKind};

#[derive(Debug, Arbitrary)]
enum FuzzKind {
    Car,
    Bicycle,
    ElectricScooter,
}

impl From<FuzzKind> for VehicleKind {
    fn from(kind: FuzzKind) -> Self {
        match kind {
            FuzzKind::Car => VehicleKind::Car,
            FuzzKind::Bicycle => VehicleKind::Bicycle,
            FuzzKind::ElectricScooter => VehicleKind::ElectricScooter,
        }
    }
}

#[derive(Debug, Arbitrary)]
enum FuzzOp {
    Accelerate(f64),
    Brake(f64),
}

#[derive(Debug, Arbitrary)]
struct Journey {
    kind: FuzzKind,
    max_speed: f64,
    ops: Vec<FuzzOp>,
}

fuzz_target!(|journey: Journey| {
    let valid_max = journey.max_speed.is_finite() && journey.max_speed > 0.0;

    // Property 1: construction succeeds exactly for finite, positive maxima
    let kind: VehicleKind = journey.kind.into();
    let mut vehicle = match build_vehicle(kind, journey.max_speed) {
        Ok(vehicle) => {
            assert!(valid_max, "accepted max_speed {}", journey.max_speed);
            vehicle
        }
        Err(_) => {
            assert!(!valid_max, "rejected max_speed {}", journey.max_speed);
            return;
        }
    };

    // Property 2: a fresh vehicle passes the verifier at every valid top speed
    let mut fresh = build_vehicle(kind, journey.max_speed).expect("max_speed accepted above");
    assert_eq!(lsp_check(fresh.as_mut()), Ok(true), "{}", fresh);

    for op in journey.ops {
        let op = match op {
            FuzzOp::Accelerate(delta) => Operation::Accelerate(delta),
            FuzzOp::Brake(delta) => Operation::Brake(delta),
        };
        // Positive includes +inf; NaN compares false
        let valid_delta = op.delta() > 0.0;
        let before = vehicle.speed();

        match op.apply(vehicle.as_mut()) {
            Ok(()) => {
                // Property 3: only valid requests are accepted, and they move speed the right way
                assert!(valid_delta, "{} was accepted", op);
                match op {
                    Operation::Accelerate(_) => assert!(vehicle.speed() >= before),
                    Operation::Brake(_) => assert!(vehicle.speed() <= before),
                }
            }
            Err(_) => {
                // Property 4: rejection leaves state untouched
                assert!(!valid_delta, "{} was rejected", op);
                assert_eq!(vehicle.speed(), before);
            }
        }

        // Property 5: the envelope always holds
        assert!(vehicle.speed() >= 0.0 && vehicle.speed() <= vehicle.max_speed());
        assert_eq!(vehicle.max_speed(), journey.max_speed);
    }

    // Property 6: the verifier agrees mid-journey, whenever its fixed extreme
    // brake is still large enough to stop the vehicle
    if vehicle.speed() + SCRIPT_ACCELERATE <= SCRIPT_EXTREME_BRAKE {
        assert_eq!(lsp_check(vehicle.as_mut()), Ok(true), "{}", vehicle);
    }
});
