// Copyright 2025-present The rampcheck Authors
// SPDX-License-Identifier: Apache-2.0

//! Vehicle variants that share one speed contract, and the tooling to prove it.
//!
//! Every vehicle keeps `0 ≤ speed ≤ max_speed`, never slows down when asked to
//! accelerate, and never speeds up when asked to brake. The three variants only
//! differ in how much of an acceleration request they apply per call. Because of
//! that, any one of them can stand in for another behind `dyn Vehicle`.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │  types.rs   │────▶│  vehicle/    │────▶│  verify/         │
//! │ (RampPolicy,│     │ (Vehicle,    │     │ (lsp_check,      │
//! │  Snapshot)  │     │  Chassis)    │     │  ContractViolation)
//! └─────────────┘     └──────────────┘     └──────────────────┘
//!                            │                      │
//!                            ▼                      ▼
//!                     ┌─────────────────────────────────┐
//!                     │            fleet.rs             │
//!                     │ (demo_fleet, verify_fleet)      │
//!                     └─────────────────────────────────┘
//! ```
//!
//! # Ramp policies
//!
//! | Variant           | Policy                 | Per-call cap              |
//! |-------------------|------------------------|---------------------------|
//! | `Car`             | `Unrestricted`         | none                      |
//! | `Bicycle`         | `StepCap(5.0)`         | 5.0 speed units           |
//! | `ElectricScooter` | `RatioCap(0.15)`       | 15% of its own max speed  |
//!
//! # Usage
//!
//! ```
//! use rampcheck::{lsp_check, Bicycle, Vehicle};
//!
//! let mut bicycle = Bicycle::new(40.0)?;
//! bicycle.accelerate(10.0)?;
//! assert_eq!(bicycle.speed(), 5.0);
//!
//! assert!(lsp_check(&mut bicycle)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Module declarations
pub mod fleet;
pub mod testing;
mod types;
pub mod vehicle;
pub mod verify;

// Re-exports for public API
pub use fleet::{build_vehicle, demo_fleet, verify_fleet, DEMO_FLEET};
pub use types::{
    Argument, RampPolicy, VehicleError, VehicleKind, VehicleSnapshot, BICYCLE_STEP_CAP,
    SCOOTER_RAMP_RATIO,
};
pub use vehicle::{
    Bicycle, Car, Chassis, ElectricScooter, Operation, ParseOperationError, Vehicle,
};
pub use verify::{
    check_contract, lsp_check, ContractViolation, ScriptStep, StepRecord, VerificationReport,
};
