// Copyright 2025-present The rampcheck Authors
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the rampcheck command-line interface.
//!
//! Three subcommands: `demo` to verify the reference fleet, `check` to verify a
//! single vehicle, and `drive` to apply a hand-written sequence of operations.
//! With no subcommand, `demo` runs.

pub mod display;

use clap::{Parser, Subcommand, ValueEnum};
use rampcheck::{Operation, VehicleKind};

#[derive(Parser)]
#[command(
    name = "rampcheck",
    about = "Verify that vehicle variants honor a shared speed contract",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Verify Car(200), Bicycle(40) and ElectricScooter(25), showing state before and after
    Demo {
        /// Print verification reports as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Verify a single freshly built vehicle
    Check {
        /// Vehicle variant
        #[arg(short, long, value_enum)]
        kind: KindArg,

        /// Top speed (must be > 0)
        #[arg(short, long, allow_negative_numbers = true)]
        max_speed: f64,

        /// Print the verification report as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Apply operations in order and print the state after each one
    Drive {
        /// Vehicle variant
        #[arg(short, long, value_enum)]
        kind: KindArg,

        /// Top speed (must be > 0)
        #[arg(short, long, allow_negative_numbers = true)]
        max_speed: f64,

        /// Operations such as `accel:10` or `brake:3`
        #[arg(required = true)]
        ops: Vec<Operation>,
    },
}

/// Vehicle variant as spelled on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Car,
    Bicycle,
    #[value(alias = "electric-scooter")]
    Scooter,
}

impl From<KindArg> for VehicleKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Car => VehicleKind::Car,
            KindArg::Bicycle => VehicleKind::Bicycle,
            KindArg::Scooter => VehicleKind::ElectricScooter,
        }
    }
}
