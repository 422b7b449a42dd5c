// Copyright 2025-present The rampcheck Authors
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the `accel:10` / `brake:3` operation syntax.
//!
//! Command-line input is untrusted. Parsing must return Ok or Err, never
//! panic, and anything that parses must render back to something that parses
//! to the same operation.

#![no_main]

use libfuzzer_sys::fuzz_target;
use rampcheck::Operation;

fuzz_target!(|input: &str| {
    if let Ok(op) = input.parse::<Operation>() {
        let rendered = op.to_string();
        let reparsed: Operation = rendered
            .replacen('(', ":", 1)
            .trim_end_matches(')')
            .parse()
            .expect("rendered operation should parse");

        if op.delta().is_nan() {
            assert!(reparsed.delta().is_nan(), "{}", input);
        } else {
            assert_eq!(op.delta(), reparsed.delta(), "{}", input);
        }
        assert_eq!(
            std::mem::discriminant(&op),
            std::mem::discriminant(&reparsed)
        );
    }
});
