// Copyright 2025-present The rampcheck Authors
// SPDX-License-Identifier: Apache-2.0

//! The three contract-abiding vehicles.
//!
//! Each one is a `Chassis` with a fixed ramp policy. They differ only in how fast
//! speed can rise per call; braking and clamping are identical.

use super::{Chassis, Vehicle};
use crate::types::{RampPolicy, VehicleError, VehicleKind};
use std::fmt;

/// Generate a variant newtype over `Chassis` and wire it into `Vehicle`.
macro_rules! vehicle_variant {
    ($(#[$meta:meta])* $name:ident => $kind:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            chassis: Chassis,
        }

        impl $name {
            /// Create a stationary vehicle with the given top speed.
            ///
            /// Returns `Err` if `max_speed` is not finite and positive.
            pub fn new(max_speed: f64) -> Result<Self, VehicleError> {
                Ok(Self {
                    chassis: Chassis::new(max_speed, $kind.ramp_policy())?,
                })
            }
        }

        impl Vehicle for $name {
            fn kind(&self) -> VehicleKind {
                $kind
            }

            fn speed(&self) -> f64 {
                self.chassis.speed()
            }

            fn max_speed(&self) -> f64 {
                self.chassis.max_speed()
            }

            fn ramp_policy(&self) -> RampPolicy {
                self.chassis.policy()
            }

            fn accelerate(&mut self, delta: f64) -> Result<(), VehicleError> {
                self.chassis.accelerate(delta)
            }

            fn brake(&mut self, delta: f64) -> Result<(), VehicleError> {
                self.chassis.brake(delta)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.snapshot(), f)
            }
        }
    };
}

vehicle_variant!(
    /// Unrestricted ramp: every acceleration request is applied in full.
    Car => VehicleKind::Car
);

vehicle_variant!(
    /// Step-capped ramp: at most `BICYCLE_STEP_CAP` speed units per call.
    Bicycle => VehicleKind::Bicycle
);

vehicle_variant!(
    /// Ratio-capped ramp: at most `SCOOTER_RAMP_RATIO` of its own top speed per call.
    ElectricScooter => VehicleKind::ElectricScooter
);
