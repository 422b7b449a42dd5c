// Copyright 2025-present The rampcheck Authors
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the rampcheck speed arithmetic.
//!
//! This standalone crate restates the ramp and clamp arithmetic that every
//! vehicle runs through its chassis, and proves the speed contract for
//! symbolic inputs using Kani.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **Envelope**: accelerate and brake keep `0 ≤ speed ≤ max_speed`
//! 2. **Monotonic**: accelerate never lowers speed, brake never raises it
//! 3. **Narrowing**: a ramp policy never applies more than was requested
//! 4. **Floor**: braking by at least the current speed lands exactly on 0

/// Fixed per-call acceleration cap for bicycles (must match src/types.rs)
pub const BICYCLE_STEP_CAP: f64 = 5.0;

/// Per-call acceleration cap for scooters, as a fraction of max speed (must match src/types.rs)
pub const SCOOTER_RAMP_RATIO: f64 = 0.15;

// ============================================================================
// RAMP AND CLAMP ARITHMETIC (restated from src/types.rs and src/vehicle/mod.rs)
// ============================================================================

/// Ramp policy, reduced to the cap it implies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ramp {
    Unrestricted,
    StepCap(f64),
    RatioCap(f64),
}

impl Ramp {
    pub const CAR: Ramp = Ramp::Unrestricted;
    pub const BICYCLE: Ramp = Ramp::StepCap(BICYCLE_STEP_CAP);
    pub const SCOOTER: Ramp = Ramp::RatioCap(SCOOTER_RAMP_RATIO);

    /// Portion of `delta` applied in one call.
    pub fn effective_delta(self, delta: f64, max_speed: f64) -> f64 {
        match self {
            Ramp::Unrestricted => delta,
            Ramp::StepCap(cap) => delta.min(cap),
            Ramp::RatioCap(ratio) => delta.min(max_speed * ratio),
        }
    }
}

/// Speed after an accepted accelerate request.
pub fn accelerate(speed: f64, max_speed: f64, delta: f64, ramp: Ramp) -> f64 {
    (speed + ramp.effective_delta(delta, max_speed)).min(max_speed)
}

/// Speed after an accepted brake request.
pub fn brake(speed: f64, delta: f64) -> f64 {
    (speed - delta).max(0.0)
}

/// The constructor's check on `max_speed`.
pub fn is_valid_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// The operations' check on `delta`. `+∞` passes; NaN compares false.
pub fn is_valid_delta(value: f64) -> bool {
    value > 0.0
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// A symbolic vehicle state satisfying the construction invariants.
    fn any_state() -> (f64, f64) {
        let max_speed: f64 = kani::any();
        kani::assume(is_valid_positive(max_speed));
        let speed: f64 = kani::any();
        kani::assume(speed >= 0.0 && speed <= max_speed);
        (speed, max_speed)
    }

    fn any_delta() -> f64 {
        let delta: f64 = kani::any();
        kani::assume(is_valid_delta(delta));
        delta
    }

    fn any_ramp() -> Ramp {
        match kani::any::<u8>() % 3 {
            0 => Ramp::CAR,
            1 => Ramp::BICYCLE,
            _ => Ramp::SCOOTER,
        }
    }

    /// Verify accelerate keeps the envelope and never lowers speed.
    #[kani::proof]
    fn verify_accelerate_envelope_and_monotonic() {
        let (speed, max_speed) = any_state();
        let delta = any_delta();
        let after = accelerate(speed, max_speed, delta, any_ramp());

        kani::assert(after >= speed, "accelerate must not lower speed");
        kani::assert(after >= 0.0, "accelerate must stay non-negative");
        kani::assert(after <= max_speed, "accelerate must respect max_speed");
    }

    /// Verify brake keeps the envelope and never raises speed.
    #[kani::proof]
    fn verify_brake_envelope_and_monotonic() {
        let (speed, max_speed) = any_state();
        let delta = any_delta();
        let after = brake(speed, delta);

        kani::assert(after <= speed, "brake must not raise speed");
        kani::assert(after >= 0.0, "brake must stay non-negative");
        kani::assert(after <= max_speed, "brake must respect max_speed");
    }

    /// Verify a ramp policy only ever narrows the request.
    #[kani::proof]
    fn verify_effective_delta_narrows() {
        let (_, max_speed) = any_state();
        let delta = any_delta();
        let effective = any_ramp().effective_delta(delta, max_speed);

        kani::assert(effective <= delta, "policy must not widen a request");
        kani::assert(effective >= 0.0, "policy must not reverse a request");
    }

    /// Verify an overwhelming brake stops the vehicle exactly.
    #[kani::proof]
    fn verify_brake_floor_is_exact() {
        let (speed, _) = any_state();
        let delta = any_delta();
        kani::assume(delta >= speed);

        kani::assert(brake(speed, delta) == 0.0, "brake past speed must land on 0");
    }

    /// Verify an overwhelming accelerate on an unrestricted ramp hits the ceiling.
    #[kani::proof]
    fn verify_unrestricted_ceiling_is_exact() {
        let (speed, max_speed) = any_state();
        let delta = any_delta();
        kani::assume(delta >= max_speed);

        kani::assert(
            accelerate(speed, max_speed, delta, Ramp::CAR) == max_speed,
            "unrestricted accelerate past max must land on max",
        );
    }
}
