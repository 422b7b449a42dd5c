//! Custom cargo commands for rampcheck.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask kani      - Run Kani proofs
//!   cargo xtask fuzz      - Run each fuzz target briefly
//!   cargo xtask check     - Quick check (no Kani)

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Constants restated in kani-proofs that must not drift from src/types.rs.
const SHARED_CONSTANTS: [&str; 2] = ["BICYCLE_STEP_CAP", "SCOOTER_RAMP_RATIO"];

const FUZZ_TARGETS: [&str; 2] = ["operation_sequences", "operation_parsing"];

/// First two lines of every licensed source file.
const LICENSE_HEADER: [&str; 2] = [
    "// Copyright 2025-present The rampcheck Authors",
    "// SPDX-License-Identifier: Apache-2.0",
];

/// Source files that are deliberately unlicensed (hidden test helpers).
const UNLICENSED: [&str; 1] = ["src/testing.rs"];

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("kani") => kani()?,
        Some("fuzz") => fuzz()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (tests + Kani + constant alignment)
  test      Run all Rust tests
  kani      Run Kani model checking proofs only
  fuzz      Run each fuzz target for 60 seconds
  check     Quick check (cargo test + clippy, no Kani)
  bench     Run benchmarks
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("rampcheck Verification Suite");
    println!("==========================================\n");

    // Step 1: Check invariant markers and license headers
    println!("[1/5] Checking invariant markers and license headers...");
    check_invariant_markers()?;
    check_license_headers()?;
    println!("✓ Invariant markers and headers present\n");

    // Step 2: Run tests
    println!("[2/5] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    // Step 3: Clippy
    println!("[3/5] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    // Step 4: Kani
    println!("[4/5] Running Kani proofs...");
    kani()?;
    println!("✓ Kani proofs hold\n");

    // Step 5: Verify constant alignment
    println!("[5/5] Verifying crate/Kani constant alignment...");
    verify_constants()?;
    println!("✓ Constants aligned\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");
    println!("\nSafe to commit changes.");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Run the standalone Kani proofs
fn kani() -> Result<()> {
    let kani_dir = project_root()?.join("kani-proofs");
    if !kani_dir.exists() {
        println!("  (no kani-proofs directory, skipping)");
        return Ok(());
    }

    let status = Command::new("cargo")
        .arg("kani")
        .current_dir(&kani_dir)
        .status()
        .context("Failed to run cargo kani (is kani-verifier installed?)")?;

    if !status.success() {
        bail!("Kani proofs failed");
    }

    Ok(())
}

/// Run every fuzz target for a fixed time budget
fn fuzz() -> Result<()> {
    let root = project_root()?;

    for target in FUZZ_TARGETS {
        println!("Fuzzing {}...", target);
        let status = Command::new("cargo")
            .args(["+nightly", "fuzz", "run", target, "--", "-max_total_time=60"])
            .current_dir(&root)
            .status()
            .with_context(|| format!("Failed to run cargo fuzz for {}", target))?;

        if !status.success() {
            bail!("fuzz target {} found a failure", target);
        }
    }

    println!("\n✓ Fuzz targets ran clean");
    Ok(())
}

/// Quick check (no Kani)
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

fn check_invariant_markers() -> Result<()> {
    let root = project_root()?;
    let src_dir = root.join("src");

    let output = Command::new("grep")
        .args(["-r", "INVARIANT:", "--include=*.rs"])
        .current_dir(&src_dir)
        .output()
        .context("Failed to run grep")?;

    let count = output.stdout.split(|&b| b == b'\n').filter(|l| !l.is_empty()).count();

    if count < 5 {
        bail!(
            "Expected at least 5 INVARIANT markers, found {}. Someone may have removed contract comments!",
            count
        );
    }

    Ok(())
}

fn check_license_headers() -> Result<()> {
    let root = project_root()?;
    let dirs = ["src", "kani-proofs/src", "fuzz/fuzz_targets"];

    let mut missing = Vec::new();
    for dir in dirs {
        let mut stack = vec![root.join(dir)];
        while let Some(path) = stack.pop() {
            if path.is_dir() {
                for entry in std::fs::read_dir(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?
                {
                    stack.push(entry?.path());
                }
                continue;
            }
            if path.extension().map_or(true, |ext| ext != "rs") {
                continue;
            }

            let relative = path.strip_prefix(&root).unwrap_or(&path);
            if UNLICENSED.iter().any(|u| relative == std::path::Path::new(u)) {
                continue;
            }

            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let head: Vec<&str> = content.lines().take(2).collect();
            if head != LICENSE_HEADER {
                missing.push(relative.display().to_string());
            }
        }
    }

    if !missing.is_empty() {
        bail!(
            "{} file(s) lack the license header:\n  {}",
            missing.len(),
            missing.join("\n  ")
        );
    }

    Ok(())
}

fn verify_constants() -> Result<()> {
    let root = project_root()?;

    let types_rs = std::fs::read_to_string(root.join("src/types.rs"))
        .context("Failed to read src/types.rs")?;

    let kani_path = root.join("kani-proofs/src/lib.rs");
    if !kani_path.exists() {
        println!("  (no kani-proofs/src/lib.rs, skipping constant check)");
        return Ok(());
    }

    let kani_rs = std::fs::read_to_string(&kani_path)
        .context("Failed to read kani-proofs/src/lib.rs")?;

    for name in SHARED_CONSTANTS {
        let crate_value = extract_const(&types_rs, name)
            .with_context(|| format!("{} not found in src/types.rs", name))?;
        let kani_value = extract_const(&kani_rs, name)
            .with_context(|| format!("{} not found in kani-proofs/src/lib.rs", name))?;

        if crate_value != kani_value {
            bail!("{}: crate has {}, Kani proofs have {}", name, crate_value, kani_value);
        }
        println!("  {} = {}", name, crate_value);
    }

    Ok(())
}

fn extract_const(content: &str, name: &str) -> Option<f64> {
    // Look for "pub const NAME: f64 = 5.0;"
    let prefix = format!("pub const {}:", name);
    content
        .lines()
        .map(str::trim)
        .find(|line| line.starts_with(&prefix))
        .and_then(|line| line.split('=').nth(1))
        .map(|value| value.split("//").next().unwrap_or("").trim().trim_end_matches(';'))
        .and_then(|value| value.trim().parse::<f64>().ok())
}
