// Copyright 2025-present The rampcheck Authors
// SPDX-License-Identifier: Apache-2.0

//! The script the verifier runs, and what it reports back.
//!
//! A verification run is five fixed steps. Each step either passes and leaves a
//! `StepRecord`, or fails with a `ContractViolation` naming the step and the
//! numbers that broke it. A passing run produces a `VerificationReport`.
//!
//! | Step                | Request                    | Must hold afterwards          |
//! |---------------------|----------------------------|-------------------------------|
//! | `InitialState`      | none                       | `0 ≤ speed ≤ max`, `max > 0`  |
//! | `Accelerate`        | `accelerate(10)`           | `speed ≥ before`, in bounds   |
//! | `Brake`             | `brake(3)`                 | `speed ≤ before`, `speed ≥ 0` |
//! | `ExtremeBrake`      | `brake(1_000_000)`         | `speed == 0`                  |
//! | `ExtremeAccelerate` | `accelerate(2 × max)`      | `speed ≤ max`                 |

use crate::types::{VehicleError, VehicleKind, VehicleSnapshot};
use crate::vehicle::Operation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Delta for the ordinary accelerate step.
pub const SCRIPT_ACCELERATE: f64 = 10.0;

/// Delta for the ordinary brake step.
pub const SCRIPT_BRAKE: f64 = 3.0;

/// Delta for the extreme brake step, far beyond any realistic speed.
pub const SCRIPT_EXTREME_BRAKE: f64 = 1_000_000.0;

/// The extreme accelerate step asks for this multiple of `max_speed`.
pub const SCRIPT_EXTREME_ACCELERATE_FACTOR: f64 = 2.0;

/// One step of the fixed verification script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScriptStep {
    InitialState,
    Accelerate,
    Brake,
    ExtremeBrake,
    ExtremeAccelerate,
}

impl ScriptStep {
    /// The whole script, in execution order.
    pub const SCRIPT: [ScriptStep; 5] = [
        ScriptStep::InitialState,
        ScriptStep::Accelerate,
        ScriptStep::Brake,
        ScriptStep::ExtremeBrake,
        ScriptStep::ExtremeAccelerate,
    ];

    /// The request this step makes, for a vehicle with the given maximum.
    ///
    /// `InitialState` only inspects, so it has none. Above `f64::MAX / 2` the
    /// extreme accelerate request overflows to `+∞`, which is still a valid delta.
    pub fn operation(self, max_speed: f64) -> Option<Operation> {
        match self {
            ScriptStep::InitialState => None,
            ScriptStep::Accelerate => Some(Operation::Accelerate(SCRIPT_ACCELERATE)),
            ScriptStep::Brake => Some(Operation::Brake(SCRIPT_BRAKE)),
            ScriptStep::ExtremeBrake => Some(Operation::Brake(SCRIPT_EXTREME_BRAKE)),
            ScriptStep::ExtremeAccelerate => Some(Operation::Accelerate(
                max_speed * SCRIPT_EXTREME_ACCELERATE_FACTOR,
            )),
        }
    }
}

impl fmt::Display for ScriptStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScriptStep::InitialState => "initial state",
            ScriptStep::Accelerate => "accelerate",
            ScriptStep::Brake => "brake",
            ScriptStep::ExtremeBrake => "extreme brake",
            ScriptStep::ExtremeAccelerate => "extreme accelerate",
        };
        f.write_str(name)
    }
}

/// Error type for a broken contract, as seen from outside the vehicle.
///
/// Distinct from `VehicleError`: that one is the caller's fault, this one is the
/// implementation's.
#[derive(Debug, Clone, PartialEq)]
pub enum ContractViolation {
    /// The freshly handed-over vehicle was already outside its envelope.
    InitialState { speed: f64, max_speed: f64 },
    /// Accelerate lowered speed, or brake raised it.
    NotMonotonic {
        step: ScriptStep,
        before: f64,
        after: f64,
    },
    /// Speed left `[0, max_speed]`.
    OutOfBounds {
        step: ScriptStep,
        speed: f64,
        max_speed: f64,
    },
    /// An overwhelming brake did not bring speed to exactly zero.
    FloorNotReached { speed: f64 },
    /// An overwhelming accelerate pushed speed past `max_speed`.
    CeilingExceeded { speed: f64, max_speed: f64 },
    /// The vehicle refused a request that satisfies its preconditions.
    Rejected {
        step: ScriptStep,
        source: VehicleError,
    },
}

impl fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractViolation::InitialState { speed, max_speed } => write!(
                f,
                "initial state: speed {} with max_speed {} is outside the envelope",
                speed, max_speed
            ),
            ContractViolation::NotMonotonic {
                step,
                before,
                after,
            } => write!(f, "{}: speed moved the wrong way ({} -> {})", step, before, after),
            ContractViolation::OutOfBounds {
                step,
                speed,
                max_speed,
            } => write!(f, "{}: speed {} outside [0, {}]", step, speed, max_speed),
            ContractViolation::FloorNotReached { speed } => write!(
                f,
                "{}: speed {} did not clamp to 0",
                ScriptStep::ExtremeBrake,
                speed
            ),
            ContractViolation::CeilingExceeded { speed, max_speed } => write!(
                f,
                "{}: speed {} exceeds max_speed {}",
                ScriptStep::ExtremeAccelerate,
                speed,
                max_speed
            ),
            ContractViolation::Rejected { step, source } => {
                write!(f, "{}: valid request rejected: {}", step, source)
            }
        }
    }
}

impl std::error::Error for ContractViolation {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ContractViolation::Rejected { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Speed on either side of one scripted request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepRecord {
    pub step: ScriptStep,
    pub operation: Operation,
    pub before: f64,
    pub after: f64,
}

/// Everything a passing verification run observed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationReport {
    pub kind: VehicleKind,
    pub initial: VehicleSnapshot,
    pub steps: Vec<StepRecord>,
    pub final_state: VehicleSnapshot,
}
