// Copyright 2025-present The rampcheck Authors
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the speed envelope.
//!
//! Debug-mode assertions that run inside every `Chassis` mutation. They:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Fail at the exact operation that broke the envelope, not three calls later
//! 3. Mirror the properties `verify::checker` asserts from the outside
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! Every function here guards a property a caller of `dyn Vehicle` relies on.
//! A new ramp policy that trips one of these is not a valid variant.
//!
//! | Contract Function            | Property                               |
//! |------------------------------|----------------------------------------|
//! | `check_speed_in_bounds`      | `0 ≤ speed ≤ max_speed`                |
//! | `check_accelerate_monotonic` | `accelerate` never lowers speed        |
//! | `check_brake_monotonic`      | `brake` never raises speed             |
//! | `check_effective_delta`      | a ramp policy never widens a request   |

use crate::types::{BICYCLE_STEP_CAP, SCOOTER_RAMP_RATIO};

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// Static assertion that the ramp constants describe real, narrowing caps.
/// If either fails, the crate won't build.
const _: () = {
    // INVARIANT: step cap is positive, so accelerate always makes progress
    assert!(BICYCLE_STEP_CAP > 0.0);

    // INVARIANT: ratio cap is a fraction of max_speed, never more than all of it
    assert!(SCOOTER_RAMP_RATIO > 0.0);
    assert!(SCOOTER_RAMP_RATIO <= 1.0);
};

// ============================================================================
// SPEED ENVELOPE
// ============================================================================

/// Check that `speed` lies within `[0, max_speed]`.
///
/// # Panics (debug builds only)
/// Panics if `speed < 0` or `speed > max_speed`.
#[inline]
pub fn check_speed_in_bounds(speed: f64, max_speed: f64) {
    // INVARIANT: 0 ≤ speed ≤ max_speed
    debug_assert!(
        (0.0..=max_speed).contains(&speed),
        "Contract violation: speed {} outside [0, {}]",
        speed,
        max_speed
    );
}

/// Check that an accelerate call did not lower the speed.
#[inline]
pub fn check_accelerate_monotonic(before: f64, after: f64) {
    // INVARIANT: accelerate(delta > 0) ⇒ after ≥ before
    debug_assert!(
        after >= before,
        "Contract violation: accelerate lowered speed {} -> {}",
        before,
        after
    );
}

/// Check that a brake call did not raise the speed.
#[inline]
pub fn check_brake_monotonic(before: f64, after: f64) {
    // INVARIANT: brake(delta > 0) ⇒ after ≤ before
    debug_assert!(
        after <= before,
        "Contract violation: brake raised speed {} -> {}",
        before,
        after
    );
}

/// Check that a ramp policy let through at most the requested delta.
///
/// Zero is allowed: a ratio cap on a subnormal `max_speed` underflows.
#[inline]
pub fn check_effective_delta(requested: f64, effective: f64) {
    // INVARIANT: 0 ≤ effective ≤ requested
    debug_assert!(
        effective >= 0.0 && effective <= requested,
        "Contract violation: ramp policy turned delta {} into {}",
        requested,
        effective
    );
}
