// Copyright 2025-present The rampcheck Authors
// SPDX-License-Identifier: Apache-2.0

//! Building and verifying groups of vehicles.

use crate::types::{VehicleError, VehicleKind};
use crate::vehicle::{Bicycle, Car, ElectricScooter, Vehicle};
use crate::verify::{check_contract, ContractViolation, VerificationReport};

/// Top speeds of the demo fleet, in demo order.
pub const DEMO_FLEET: [(VehicleKind, f64); 3] = [
    (VehicleKind::Car, 200.0),
    (VehicleKind::Bicycle, 40.0),
    (VehicleKind::ElectricScooter, 25.0),
];

/// Build a stationary vehicle of the given kind behind the shared contract.
pub fn build_vehicle(kind: VehicleKind, max_speed: f64) -> Result<Box<dyn Vehicle>, VehicleError> {
    Ok(match kind {
        VehicleKind::Car => Box::new(Car::new(max_speed)?),
        VehicleKind::Bicycle => Box::new(Bicycle::new(max_speed)?),
        VehicleKind::ElectricScooter => Box::new(ElectricScooter::new(max_speed)?),
    })
}

/// Car(200), Bicycle(40), ElectricScooter(25).
pub fn demo_fleet() -> Result<Vec<Box<dyn Vehicle>>, VehicleError> {
    DEMO_FLEET
        .iter()
        .map(|&(kind, max_speed)| build_vehicle(kind, max_speed))
        .collect()
}

/// Verify every vehicle, independently.
///
/// A violation on one vehicle does not stop the rest from being checked. Results
/// line up with the input order.
pub fn verify_fleet(
    fleet: &mut [Box<dyn Vehicle>],
) -> Vec<Result<VerificationReport, ContractViolation>> {
    fleet
        .iter_mut()
        .map(|vehicle| check_contract(vehicle.as_mut()))
        .collect()
}
