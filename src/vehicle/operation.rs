// Copyright 2025-present The rampcheck Authors
// SPDX-License-Identifier: Apache-2.0

//! A single accelerate/brake request as data.
//!
//! Lets the CLI, the fuzzer, and the property tests describe operation
//! sequences without closures. Parses from `accel:10` / `brake:3` style tokens.

use super::Vehicle;
use crate::types::VehicleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One request against a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", content = "delta", rename_all = "camelCase")]
pub enum Operation {
    Accelerate(f64),
    Brake(f64),
}

impl Operation {
    /// Requested delta, before any ramp policy.
    pub fn delta(self) -> f64 {
        match self {
            Operation::Accelerate(delta) | Operation::Brake(delta) => delta,
        }
    }

    /// Run this request against `vehicle`.
    pub fn apply(self, vehicle: &mut dyn Vehicle) -> Result<(), VehicleError> {
        match self {
            Operation::Accelerate(delta) => vehicle.accelerate(delta),
            Operation::Brake(delta) => vehicle.brake(delta),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Accelerate(delta) => write!(f, "accelerate({})", delta),
            Operation::Brake(delta) => write!(f, "brake({})", delta),
        }
    }
}

/// Error type for operation tokens that don't parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOperationError {
    /// Token has no `:` separating name and delta.
    MissingDelta { input: String },
    /// Name is not one of `accel`, `accelerate`, `a`, `brake`, `b`.
    UnknownOperation { name: String },
    /// Delta is not a number.
    InvalidDelta { input: String },
}

impl fmt::Display for ParseOperationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseOperationError::MissingDelta { input } => {
                write!(f, "'{}' is missing a delta (expected e.g. accel:10)", input)
            }
            ParseOperationError::UnknownOperation { name } => {
                write!(f, "unknown operation '{}' (expected accel or brake)", name)
            }
            ParseOperationError::InvalidDelta { input } => {
                write!(f, "'{}' is not a number", input)
            }
        }
    }
}

impl std::error::Error for ParseOperationError {}

impl FromStr for Operation {
    type Err = ParseOperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, delta) = s
            .split_once(':')
            .ok_or_else(|| ParseOperationError::MissingDelta {
                input: s.to_string(),
            })?;

        // Range checks belong to the vehicle, so negative deltas parse fine
        let delta: f64 = delta
            .trim()
            .parse()
            .map_err(|_| ParseOperationError::InvalidDelta {
                input: delta.to_string(),
            })?;

        match name.trim().to_ascii_lowercase().as_str() {
            "a" | "accel" | "accelerate" => Ok(Operation::Accelerate(delta)),
            "b" | "brake" => Ok(Operation::Brake(delta)),
            other => Err(ParseOperationError::UnknownOperation {
                name: other.to_string(),
            }),
        }
    }
}
