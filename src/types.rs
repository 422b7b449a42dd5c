// Copyright 2025-present The rampcheck Authors
// SPDX-License-Identifier: Apache-2.0

//! The building blocks every vehicle shares.
//!
//! These types describe what a vehicle is (its kind), how it ramps up (its
//! policy), and what it looks like from the outside (a snapshot). The vehicle
//! state itself lives in `vehicle::Chassis`; nothing here can mutate a speed.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Speed bound**: `0 ≤ speed ≤ max_speed` before and after every operation.
//! - **Ramp policy**: `0 ≤ effective_delta(delta) ≤ delta` for every positive `delta`.
//!   A policy may narrow how much of a request is applied, never widen it.
//! - **Inputs**: `max_speed` is finite and strictly positive. Every `delta` is
//!   strictly positive and not NaN; `+∞` is a valid delta that clamping absorbs.
//!   Anything else is an `InvalidArgument`, and the vehicle is left untouched.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// RAMP CONSTANTS
// =============================================================================

/// Largest speed increase a bicycle accepts in one `accelerate` call.
///
/// Independent of the bicycle's own `max_speed`.
pub const BICYCLE_STEP_CAP: f64 = 5.0;

/// Fraction of `max_speed` an electric scooter may gain in one `accelerate` call.
pub const SCOOTER_RAMP_RATIO: f64 = 0.15;

// =============================================================================
// VEHICLE KIND
// =============================================================================

/// The three vehicle variants that share the speed contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VehicleKind {
    /// Applies every requested delta in full.
    Car,
    /// Caps each acceleration step at [`BICYCLE_STEP_CAP`].
    Bicycle,
    /// Caps each acceleration step at `max_speed * SCOOTER_RAMP_RATIO`.
    ElectricScooter,
}

impl VehicleKind {
    /// All kinds, in demo order.
    pub const ALL: [VehicleKind; 3] = [
        VehicleKind::Car,
        VehicleKind::Bicycle,
        VehicleKind::ElectricScooter,
    ];

    /// Variant name as it appears in rendered output.
    pub fn name(self) -> &'static str {
        match self {
            VehicleKind::Car => "Car",
            VehicleKind::Bicycle => "Bicycle",
            VehicleKind::ElectricScooter => "ElectricScooter",
        }
    }

    /// The ramp policy this kind accelerates with.
    pub fn ramp_policy(self) -> RampPolicy {
        match self {
            VehicleKind::Car => RampPolicy::Unrestricted,
            VehicleKind::Bicycle => RampPolicy::StepCap(BICYCLE_STEP_CAP),
            VehicleKind::ElectricScooter => RampPolicy::RatioCap(SCOOTER_RAMP_RATIO),
        }
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// RAMP POLICY
// =============================================================================

/// How much of a requested acceleration is actually applied in one call.
///
/// Braking is never ramped: the full delta is always subtracted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RampPolicy {
    /// Full delta applied.
    Unrestricted,
    /// Fixed per-step cap, in speed units.
    StepCap(f64),
    /// Per-step cap proportional to the vehicle's own maximum.
    RatioCap(f64),
}

impl RampPolicy {
    /// Per-step cap for a vehicle with the given maximum, if the policy has one.
    #[inline]
    pub fn cap(self, max_speed: f64) -> Option<f64> {
        match self {
            RampPolicy::Unrestricted => None,
            RampPolicy::StepCap(cap) => Some(cap),
            RampPolicy::RatioCap(ratio) => Some(max_speed * ratio),
        }
    }

    /// Portion of `delta` this policy lets through.
    ///
    /// INVARIANT: result ≤ delta (policies only ever narrow a request).
    #[inline]
    pub fn effective_delta(self, delta: f64, max_speed: f64) -> f64 {
        match self.cap(max_speed) {
            Some(cap) => delta.min(cap),
            None => delta,
        }
    }
}

// =============================================================================
// ERRORS
// =============================================================================

/// Which input an [`VehicleError::InvalidArgument`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Argument {
    /// `max_speed` passed to a constructor.
    MaxSpeed,
    /// `delta` passed to `accelerate`.
    AccelerateDelta,
    /// `delta` passed to `brake`.
    BrakeDelta,
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::MaxSpeed => f.write_str("max_speed"),
            Argument::AccelerateDelta => f.write_str("acceleration delta"),
            Argument::BrakeDelta => f.write_str("braking delta"),
        }
    }
}

impl Argument {
    /// Whether `value` is in range for this input.
    ///
    /// A top speed must be finite. A delta may be `+∞`, which the clamps turn
    /// into "all the way to `max_speed`" or "all the way to 0".
    #[inline]
    pub fn accepts(self, value: f64) -> bool {
        // `value <= 0.0` alone lets NaN through
        let positive = value > 0.0;
        match self {
            Argument::MaxSpeed => positive && value.is_finite(),
            Argument::AccelerateDelta | Argument::BrakeDelta => positive,
        }
    }

    fn requirement(self) -> &'static str {
        match self {
            Argument::MaxSpeed => "a finite number > 0",
            Argument::AccelerateDelta | Argument::BrakeDelta => "a number > 0",
        }
    }
}

/// Error type for vehicle construction and operations.
#[derive(Debug, Clone, PartialEq)]
pub enum VehicleError {
    /// An input was zero, negative, NaN, or (for `max_speed`) infinite.
    InvalidArgument { argument: Argument, value: f64 },
}

impl VehicleError {
    /// Accept `value` only if `argument` allows it (see [`Argument::accepts`]).
    #[inline]
    pub fn require_positive(argument: Argument, value: f64) -> Result<f64, VehicleError> {
        if argument.accepts(value) {
            Ok(value)
        } else {
            Err(VehicleError::InvalidArgument { argument, value })
        }
    }
}

impl fmt::Display for VehicleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VehicleError::InvalidArgument { argument, value } => {
                write!(
                    f,
                    "{} must be {} (got {})",
                    argument,
                    argument.requirement(),
                    value
                )
            }
        }
    }
}

impl std::error::Error for VehicleError {}

// =============================================================================
// SNAPSHOT
// =============================================================================

/// A read-only copy of a vehicle's state at one moment.
///
/// Renders as `<VariantName>(speed=<1 decimal>, max=<1 decimal>)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleSnapshot {
    pub kind: VehicleKind,
    pub speed: f64,
    pub max_speed: f64,
}

impl fmt::Display for VehicleSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}(speed={:.1}, max={:.1})",
            self.kind.name(),
            self.speed,
            self.max_speed
        )
    }
}
