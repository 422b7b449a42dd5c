// Copyright 2025-present The rampcheck Authors
// SPDX-License-Identifier: Apache-2.0

//! The contract verifier.
//!
//! Drives any `dyn Vehicle` through the fixed script in `types` and checks the
//! contract after every step. This is the outside view: `contracts` catches a bad
//! `Chassis` from within, this catches any implementation of `Vehicle`, including
//! ones that never touch a `Chassis`.
//!
//! The first failed check ends the run for that vehicle.

use super::types::{ContractViolation, ScriptStep, StepRecord, VerificationReport};
use crate::types::VehicleSnapshot;
use crate::vehicle::Vehicle;

/// Run the script against `vehicle`, returning `Ok(true)` if every check passes.
///
/// The vehicle is left in whatever state the last step produced.
pub fn lsp_check(vehicle: &mut dyn Vehicle) -> Result<bool, ContractViolation> {
    check_contract(vehicle).map(|_| true)
}

/// Run the script against `vehicle` and report every step it took.
pub fn check_contract(vehicle: &mut dyn Vehicle) -> Result<VerificationReport, ContractViolation> {
    let initial = vehicle.snapshot();
    check_initial_state(&initial)?;

    let mut steps = Vec::with_capacity(ScriptStep::SCRIPT.len() - 1);

    for step in ScriptStep::SCRIPT {
        let Some(operation) = step.operation(vehicle.max_speed()) else {
            continue;
        };

        let before = vehicle.speed();
        operation
            .apply(vehicle)
            .map_err(|source| ContractViolation::Rejected { step, source })?;
        let after = vehicle.speed();

        check_step(step, before, after, vehicle.max_speed())?;

        steps.push(StepRecord {
            step,
            operation,
            before,
            after,
        });
    }

    Ok(VerificationReport {
        kind: vehicle.kind(),
        initial,
        steps,
        final_state: vehicle.snapshot(),
    })
}

/// `0 ≤ speed ≤ max_speed` and `max_speed > 0`, before anything has run.
fn check_initial_state(snapshot: &VehicleSnapshot) -> Result<(), ContractViolation> {
    let within = snapshot.speed >= 0.0
        && snapshot.max_speed > 0.0
        && snapshot.speed <= snapshot.max_speed;

    if within {
        Ok(())
    } else {
        Err(ContractViolation::InitialState {
            speed: snapshot.speed,
            max_speed: snapshot.max_speed,
        })
    }
}

/// The assertions that follow each scripted request.
///
/// Comparisons are negated so that a NaN speed fails them.
#[allow(clippy::neg_cmp_op_on_partial_ord)]
fn check_step(
    step: ScriptStep,
    before: f64,
    after: f64,
    max_speed: f64,
) -> Result<(), ContractViolation> {
    match step {
        ScriptStep::InitialState => Ok(()),
        ScriptStep::Accelerate => {
            // INVARIANT: accelerate never lowers speed
            if !(after >= before) {
                return Err(ContractViolation::NotMonotonic {
                    step,
                    before,
                    after,
                });
            }
            check_bounds(step, after, max_speed)
        }
        ScriptStep::Brake => {
            // INVARIANT: brake never raises speed
            if !(after <= before) {
                return Err(ContractViolation::NotMonotonic {
                    step,
                    before,
                    after,
                });
            }
            check_bounds(step, after, max_speed)
        }
        ScriptStep::ExtremeBrake => {
            // INVARIANT: clamp-floor is exact, not approximately zero
            if after == 0.0 {
                Ok(())
            } else {
                Err(ContractViolation::FloorNotReached { speed: after })
            }
        }
        ScriptStep::ExtremeAccelerate => {
            // INVARIANT: clamp-ceiling
            if after <= max_speed {
                Ok(())
            } else {
                Err(ContractViolation::CeilingExceeded {
                    speed: after,
                    max_speed,
                })
            }
        }
    }
}

fn check_bounds(step: ScriptStep, speed: f64, max_speed: f64) -> Result<(), ContractViolation> {
    if (0.0..=max_speed).contains(&speed) {
        Ok(())
    } else {
        Err(ContractViolation::OutOfBounds {
            step,
            speed,
            max_speed,
        })
    }
}
