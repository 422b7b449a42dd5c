// Copyright 2025-present The rampcheck Authors
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the rampcheck CLI.
//!
//! Color output that respects your terminal. OneDark for dark terminals, One
//! Light for light ones. The detection tries `RAMPCHECK_THEME` first (for
//! explicit control), then `COLORFGBG` (set by some terminals), then macOS system
//! appearance, then defaults to dark.
//!
//! Respects `NO_COLOR`, and drops all escape codes when stdout is not a TTY, so
//! piped output is exactly the plain `Display` text.
//!
//! # Theme detection order
//!
//! 1. `RAMPCHECK_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. macOS appearance (via defaults read)
//! 4. Default to dark theme

use rampcheck::{VehicleKind, VehicleSnapshot};
use std::sync::OnceLock;

// Box drawing width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 60;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Cached theme detection result
static THEME: OnceLock<Theme> = OnceLock::new();

/// Parse an explicit theme name.
fn parse_theme(value: &str) -> Option<Theme> {
    match value.to_lowercase().as_str() {
        "light" | "l" => Some(Theme::Light),
        "dark" | "d" => Some(Theme::Dark),
        _ => None,
    }
}

/// Interpret `COLORFGBG` ("fg;bg"). Background colors 7+ (except 8) are light.
fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
    let bg: u8 = value.split(';').next_back()?.parse().ok()?;
    if bg >= 7 && bg != 8 {
        Some(Theme::Light)
    } else {
        Some(Theme::Dark)
    }
}

/// Detect terminal theme from environment
fn detect_theme() -> Theme {
    // 1. Explicit override
    if let Some(theme) = std::env::var("RAMPCHECK_THEME")
        .ok()
        .as_deref()
        .and_then(parse_theme)
    {
        return theme;
    }

    // 2. COLORFGBG, set by xterm, rxvt and friends
    if let Some(theme) = std::env::var("COLORFGBG")
        .ok()
        .as_deref()
        .and_then(theme_from_colorfgbg)
    {
        return theme;
    }

    // 3. macOS: Check system appearance
    #[cfg(target_os = "macos")]
    {
        if let Ok(output) = std::process::Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
        {
            // "Dark" means dark mode; absence or error means light mode
            let stdout = String::from_utf8_lossy(&output.stdout);
            if !stdout.contains("Dark") && output.status.success() {
                return Theme::Light;
            }
        }
    }

    // 4. Default to dark (most developer terminals)
    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// ONEDARK / ONE LIGHT COLOR PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════
//
// OneDark: https://github.com/joshdick/onedark.vim
// One Light: https://github.com/sonph/onehalf

/// True color escape sequence helper
fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
}

pub use colors::*;

/// OneDark palette
mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221); // #c678dd
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

/// One Light palette
mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164); // #a626a4
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

// ═══════════════════════════════════════════════════════════════════════════
// THEME-AWARE COLOR ACCESSORS
// ═══════════════════════════════════════════════════════════════════════════

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        themed(GRAY, &[], "┌"),
        label_part,
        themed(GRAY, &[], &format!("{}┐", "─".repeat(remaining)))
    );
}

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content) + 1);
    println!(
        "{} {}{}{}",
        themed(GRAY, &[], "│"),
        content,
        " ".repeat(pad),
        themed(GRAY, &[], "│")
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!(
        "{}",
        themed(GRAY, &[], &format!("└{}┘", "─".repeat(BOX_WIDTH)))
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color per variant, so the same vehicle reads the same in every section
fn kind_color(kind: VehicleKind) -> fn() -> String {
    match kind {
        VehicleKind::Car => BLUE,
        VehicleKind::Bicycle => MAGENTA,
        VehicleKind::ElectricScooter => YELLOW,
    }
}

/// `Car(speed=10.0, max=200.0)` with the variant name colored
pub fn snapshot_line(snapshot: &VehicleSnapshot) -> String {
    let plain = snapshot.to_string();
    let name = snapshot.kind.name();
    match plain.strip_prefix(name) {
        Some(rest) => format!("{}{}", themed(kind_color(snapshot.kind), &[BOLD], name), rest),
        None => plain,
    }
}

/// Pass/fail badge for a verification result
pub fn verdict(ok: bool) -> String {
    if ok {
        themed(GREEN, &[BOLD], "contract OK")
    } else {
        themed(RED, &[BOLD], "contract VIOLATED")
    }
}

/// Dimmed secondary text (deltas, step names)
pub fn dim(text: &str) -> String {
    themed(GRAY, &[DIM], text)
}
