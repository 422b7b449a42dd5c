// Copyright 2025-present The rampcheck Authors
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: runtime contracts and the contract verifier.
//!
//! Two complementary approaches to catching a vehicle that breaks the contract:
//!
//! 1. **Runtime contracts** (`contracts`) that panic in debug builds the moment a
//!    `Chassis` mutation leaves the speed envelope. Zero-cost in release.
//!
//! 2. **The verifier** (`lsp_check`, `check_contract`) that treats any
//!    `dyn Vehicle` as a black box, drives it through a fixed script, and returns
//!    a `ContractViolation` instead of panicking.
//!
//! Use both. The contracts catch arithmetic mistakes inside the shared chassis. The
//! verifier catches implementations that bypass it.

mod checker;
pub mod contracts;
mod types;

pub use checker::{check_contract, lsp_check};
pub use types::*;
