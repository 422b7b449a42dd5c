// Copyright 2025-present The rampcheck Authors
// SPDX-License-Identifier: Apache-2.0

//! The vehicle contract and the state that enforces it.
//!
//! `Vehicle` is the surface callers program against. Any implementation must keep
//! `0 ≤ speed ≤ max_speed`, never lower speed on `accelerate`, never raise it on
//! `brake`, and reject non-positive deltas without touching state. Swap one
//! variant for another and none of that changes; only the ramp differs.
//!
//! `Chassis` holds the speed and does the arithmetic once for every variant. The
//! variants in `variants` are thin wrappers that pick a `RampPolicy`.
//!
//! ```text
//! ┌─────────────┐   accelerate(δ)   ┌──────────────────────────┐
//! │ dyn Vehicle │──────────────────▶│ Chassis                  │
//! │ Car         │   brake(δ)        │  δ' = policy.effective(δ)│
//! │ Bicycle     │                   │  speed = min(max, s + δ')│
//! │ Scooter     │                   │  speed = max(0,   s - δ) │
//! └─────────────┘                   └──────────────────────────┘
//! ```

mod operation;
mod variants;

pub use operation::{Operation, ParseOperationError};
pub use variants::{Bicycle, Car, ElectricScooter};

use crate::types::{Argument, RampPolicy, VehicleError, VehicleKind, VehicleSnapshot};
use crate::verify::contracts;
use std::fmt;

/// The shared speed contract.
///
/// Implementations render as `<VariantName>(speed=<1 decimal>, max=<1 decimal>)`.
pub trait Vehicle: fmt::Debug + fmt::Display {
    /// Which variant this is.
    fn kind(&self) -> VehicleKind;

    /// Current speed, always within `[0, max_speed()]`.
    fn speed(&self) -> f64;

    /// Upper speed bound, fixed at construction.
    fn max_speed(&self) -> f64;

    /// How much of an acceleration request this vehicle applies per call.
    fn ramp_policy(&self) -> RampPolicy;

    /// Raise speed by at most `delta`, clamped at `max_speed()`.
    ///
    /// Returns `InvalidArgument` (and leaves speed unchanged) unless `delta` is
    /// positive. `f64::INFINITY` is positive and lands exactly on the ceiling,
    /// or as far as the ramp policy allows.
    fn accelerate(&mut self, delta: f64) -> Result<(), VehicleError>;

    /// Lower speed by `delta`, clamped at 0.
    ///
    /// Returns `InvalidArgument` (and leaves speed unchanged) unless `delta` is
    /// positive. `f64::INFINITY` stops the vehicle.
    fn brake(&mut self, delta: f64) -> Result<(), VehicleError>;

    /// Copy out the current state.
    fn snapshot(&self) -> VehicleSnapshot {
        VehicleSnapshot {
            kind: self.kind(),
            speed: self.speed(),
            max_speed: self.max_speed(),
        }
    }
}

/// Speed state plus the ramp policy that governs it.
///
/// # Invariants (enforced at construction and by every mutation)
/// - `max_speed` is finite and `> 0`
/// - `0 ≤ speed ≤ max_speed`
#[derive(Debug, Clone, PartialEq)]
pub struct Chassis {
    speed: f64,
    max_speed: f64,
    policy: RampPolicy,
}

impl Chassis {
    /// Create a stationary chassis.
    ///
    /// Returns `Err` if `max_speed` is not finite and positive.
    pub fn new(max_speed: f64, policy: RampPolicy) -> Result<Self, VehicleError> {
        let max_speed = VehicleError::require_positive(Argument::MaxSpeed, max_speed)?;
        Ok(Self {
            speed: 0.0,
            max_speed,
            policy,
        })
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    #[inline]
    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    #[inline]
    pub fn policy(&self) -> RampPolicy {
        self.policy
    }

    /// Apply the ramp policy to `delta`, then add and clamp at the top.
    pub fn accelerate(&mut self, delta: f64) -> Result<(), VehicleError> {
        let delta = VehicleError::require_positive(Argument::AccelerateDelta, delta)?;
        let before = self.speed;

        let effective = self.policy.effective_delta(delta, self.max_speed);
        contracts::check_effective_delta(delta, effective);

        self.speed = (before + effective).min(self.max_speed);

        contracts::check_accelerate_monotonic(before, self.speed);
        contracts::check_speed_in_bounds(self.speed, self.max_speed);
        Ok(())
    }

    /// Subtract the full `delta` and clamp at zero.
    pub fn brake(&mut self, delta: f64) -> Result<(), VehicleError> {
        let delta = VehicleError::require_positive(Argument::BrakeDelta, delta)?;
        let before = self.speed;

        self.speed = (before - delta).max(0.0);

        contracts::check_brake_monotonic(before, self.speed);
        contracts::check_speed_in_bounds(self.speed, self.max_speed);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_chassis_is_stationary() {
        let chassis = Chassis::new(50.0, RampPolicy::Unrestricted).unwrap();
        assert_eq!(chassis.speed(), 0.0);
        assert_eq!(chassis.max_speed(), 50.0);
    }

    #[test]
    fn chassis_rejects_non_positive_max_speed() {
        for bad in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            let result = Chassis::new(bad, RampPolicy::Unrestricted);
            assert!(matches!(
                result,
                Err(VehicleError::InvalidArgument {
                    argument: Argument::MaxSpeed,
                    ..
                })
            ));
        }
    }

    #[test]
    fn rejected_delta_leaves_state_unchanged() {
        let mut chassis = Chassis::new(50.0, RampPolicy::StepCap(5.0)).unwrap();
        chassis.accelerate(4.0).unwrap();
        let before = chassis.clone();

        assert!(chassis.accelerate(0.0).is_err());
        assert!(chassis.accelerate(-1.0).is_err());
        assert!(chassis.brake(0.0).is_err());
        assert!(chassis.brake(f64::NAN).is_err());

        assert_eq!(chassis, before);
    }

    #[test]
    fn brake_is_never_ramped() {
        let mut chassis = Chassis::new(100.0, RampPolicy::StepCap(5.0)).unwrap();
        for _ in 0..10 {
            chassis.accelerate(50.0).unwrap();
        }
        assert_eq!(chassis.speed(), 50.0);

        chassis.brake(30.0).unwrap();
        assert_eq!(chassis.speed(), 20.0);
    }

    #[test]
    fn subnormal_max_speed_stays_in_bounds() {
        let mut chassis =
            Chassis::new(f64::MIN_POSITIVE / 1e10, RampPolicy::RatioCap(0.15)).unwrap();
        chassis.accelerate(1.0).unwrap();
        assert!(chassis.speed() >= 0.0);
        assert!(chassis.speed() <= chassis.max_speed());
    }

    #[test]
    fn huge_deltas_clamp_without_overflow() {
        let mut chassis = Chassis::new(f64::MAX, RampPolicy::Unrestricted).unwrap();
        chassis.accelerate(f64::MAX).unwrap();
        chassis.accelerate(f64::MAX).unwrap();
        assert_eq!(chassis.speed(), f64::MAX);

        chassis.brake(f64::MAX).unwrap();
        assert_eq!(chassis.speed(), 0.0);
    }

    #[test]
    fn infinite_deltas_clamp_exactly() {
        let mut car = Chassis::new(200.0, RampPolicy::Unrestricted).unwrap();
        car.accelerate(f64::INFINITY).unwrap();
        assert_eq!(car.speed(), 200.0);
        car.brake(f64::INFINITY).unwrap();
        assert_eq!(car.speed(), 0.0);

        let mut bicycle = Chassis::new(40.0, RampPolicy::StepCap(5.0)).unwrap();
        bicycle.accelerate(f64::INFINITY).unwrap();
        assert_eq!(bicycle.speed(), 5.0);

        let mut scooter = Chassis::new(f64::MAX, RampPolicy::RatioCap(0.15)).unwrap();
        scooter.accelerate(f64::INFINITY).unwrap();
        assert_eq!(scooter.speed(), f64::MAX * 0.15);
    }
}
