//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::fleet::build_vehicle;
use crate::types::{VehicleError, VehicleKind};
use crate::vehicle::Vehicle;
use crate::verify::VerificationReport;

/// Upper bound on accelerate calls `vehicle_at_speed` will make.
const MAX_RAMP_CALLS: usize = 10_000;

/// Build a vehicle and accelerate it until it reaches `target` (or its ceiling).
///
/// Capped variants need several calls to get there; this makes them as many times
/// as it takes, stopping early if a call makes no progress.
pub fn vehicle_at_speed(
    kind: VehicleKind,
    max_speed: f64,
    target: f64,
) -> Result<Box<dyn Vehicle>, VehicleError> {
    let mut vehicle = build_vehicle(kind, max_speed)?;
    let target = target.min(max_speed);

    for _ in 0..MAX_RAMP_CALLS {
        let speed = vehicle.speed();
        if speed >= target {
            break;
        }
        vehicle.accelerate(target - speed)?;
        if vehicle.speed() == speed {
            break;
        }
    }

    Ok(vehicle)
}

/// One stationary vehicle of every kind, all with the same top speed.
pub fn one_of_each(max_speed: f64) -> Result<Vec<Box<dyn Vehicle>>, VehicleError> {
    VehicleKind::ALL
        .iter()
        .map(|&kind| build_vehicle(kind, max_speed))
        .collect()
}

/// `(before, after)` speed pairs for each scripted request in a report.
pub fn trajectory(report: &VerificationReport) -> Vec<(f64, f64)> {
    report
        .steps
        .iter()
        .map(|step| (step.before, step.after))
        .collect()
}
