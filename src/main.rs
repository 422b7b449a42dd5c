// Copyright 2025-present The rampcheck Authors
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use serde::Serialize;

use rampcheck::{
    build_vehicle, check_contract, demo_fleet, verify_fleet, Operation, Vehicle, VehicleKind,
    VehicleSnapshot, VerificationReport,
};

mod cli;
use cli::display::{dim, row, section_bot, section_top, snapshot_line, verdict};
use cli::{Cli, Commands};

/// One vehicle's outcome in `demo --json`
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FleetEntry {
    initial: VehicleSnapshot,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<VerificationReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    violation: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command.unwrap_or(Commands::Demo { json: false }) {
        Commands::Demo { json } => run_demo(json),
        Commands::Check {
            kind,
            max_speed,
            json,
        } => run_check(kind.into(), max_speed, json),
        Commands::Drive {
            kind,
            max_speed,
            ops,
        } => run_drive(kind.into(), max_speed, &ops),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

/// Verify the reference fleet, printing it before and after
fn run_demo(json: bool) -> Result<(), String> {
    let fleet = demo_fleet().map_err(|e| e.to_string())?;
    run_fleet(fleet, json)
}

/// Verify any fleet; `Err` if at least one vehicle breaks the contract
fn run_fleet(mut fleet: Vec<Box<dyn Vehicle>>, json: bool) -> Result<(), String> {
    let initial: Vec<VehicleSnapshot> = fleet.iter().map(|v| v.snapshot()).collect();

    let results = verify_fleet(&mut fleet);
    let failures = results.iter().filter(|r| r.is_err()).count();

    if json {
        let entries: Vec<FleetEntry> = initial
            .into_iter()
            .zip(results)
            .map(|(initial, result)| match result {
                Ok(report) => FleetEntry {
                    initial,
                    ok: true,
                    report: Some(report),
                    violation: None,
                },
                Err(violation) => FleetEntry {
                    initial,
                    ok: false,
                    report: None,
                    violation: Some(violation.to_string()),
                },
            })
            .collect();
        print_json(&entries)?;
    } else {
        section_top("Initial fleet");
        for snapshot in &initial {
            row(&snapshot_line(snapshot));
        }
        section_bot();

        section_top("Checking contract");
        for (snapshot, result) in initial.iter().zip(&results) {
            let line = match result {
                Ok(_) => format!("{}: {} -> true", snapshot.kind, verdict(true)),
                Err(violation) => {
                    format!("{}: {} -> {}", snapshot.kind, verdict(false), violation)
                }
            };
            row(&line);
        }
        section_bot();

        section_top("Final state");
        for vehicle in &fleet {
            row(&snapshot_line(&vehicle.snapshot()));
        }
        section_bot();
    }

    if failures > 0 {
        return Err(format!(
            "{} of {} vehicles violated the contract",
            failures,
            fleet.len()
        ));
    }

    eprintln!("✓ {} vehicles honor the contract", fleet.len());
    Ok(())
}

/// Verify one vehicle built from the command line
fn run_check(kind: VehicleKind, max_speed: f64, json: bool) -> Result<(), String> {
    let mut vehicle = build_vehicle(kind, max_speed).map_err(|e| e.to_string())?;
    let report = check_contract(vehicle.as_mut()).map_err(|e| format!("{}: {}", kind, e))?;

    if json {
        return print_json(&report);
    }

    section_top(&format!("Checking {}", kind));
    row(&snapshot_line(&report.initial));
    for step in &report.steps {
        row(&format!(
            "{} {} -> {:.1}",
            dim(&format!("{:<20}", step.step.to_string())),
            step.operation,
            step.after
        ));
    }
    row(&snapshot_line(&report.final_state));
    row(&format!("{}: {} -> true", kind, verdict(true)));
    section_bot();
    Ok(())
}

/// Apply operations in order, stopping at the first rejected one
fn run_drive(kind: VehicleKind, max_speed: f64, ops: &[Operation]) -> Result<(), String> {
    let mut vehicle = build_vehicle(kind, max_speed).map_err(|e| e.to_string())?;

    section_top(&format!("Driving {}", kind));
    row(&snapshot_line(&vehicle.snapshot()));

    for op in ops {
        if let Err(e) = op.apply(vehicle.as_mut()) {
            section_bot();
            return Err(format!("{} rejected: {}", op, e));
        }
        row(&format!(
            "{} {}",
            dim(&format!("{:<20}", op.to_string())),
            snapshot_line(&vehicle.snapshot())
        ));
    }

    section_bot();
    Ok(())
}

#[cfg(feature = "serde_json")]
fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let text = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
    println!("{}", text);
    Ok(())
}

#[cfg(not(feature = "serde_json"))]
fn print_json<T: Serialize>(_value: &T) -> Result<(), String> {
    Err("JSON output requires the `serde_json` feature".to_string())
}
