//! Build script for risetide-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates risetide.toml and turns it into `defaults.rs` constants

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Mirrors the floors enforced by `ProcessSettings`
const MIN_HOLD_MINUTES: u16 = 1;
const MIN_HIGH_THRESHOLD_CM: u16 = 2;
const THRESHOLD_GAP_CM: u16 = 5;
const MIN_TARGET_CYCLES: u16 = 1;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct Defaults {
    settings: Settings,
    #[serde(default)]
    timing: Timing,
    #[serde(default)]
    sensor: Sensor,
    #[serde(default)]
    actuators: Actuators,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct Settings {
    hold_minutes: u16,
    high_threshold_cm: u16,
    low_threshold_cm: u16,
    target_cycles: u16,
}

#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct Timing {
    long_press_ms: u32,
    repeat_ms: u32,
    edge_settle_ms: u32,
    single_shot_settle_ms: u32,
    refresh_ms: u32,
    announce_ms: u32,
    loop_period_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            long_press_ms: 500,
            repeat_ms: 100,
            edge_settle_ms: 20,
            single_shot_settle_ms: 200,
            refresh_ms: 200,
            announce_ms: 1_000,
            loop_period_ms: 10,
        }
    }
}

#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct Sensor {
    echo_timeout_us: u32,
}

impl Default for Sensor {
    fn default() -> Self {
        Self {
            echo_timeout_us: 30_000,
        }
    }
}

#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct Actuators {
    fill_active_low: bool,
    drain_active_low: bool,
}

impl Default for Actuators {
    fn default() -> Self {
        Self {
            fill_active_low: true,
            drain_active_low: true,
        }
    }
}

fn main() {
    setup_linker();
    let defaults = load_defaults();
    validate_settings(&defaults.settings);
    validate_timing(&defaults.timing, defaults.sensor.echo_timeout_us);
    generate_defaults(&defaults);

    println!("cargo:warning=risetide.toml validated successfully");
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Read and deserialize risetide.toml
fn load_defaults() -> Defaults {
    println!("cargo:rerun-if-changed=risetide.toml");

    let config_path = Path::new("risetide.toml");

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail(
            "ERROR: Failed to read risetide.toml",
            &[
                "The firmware compiles its power-up defaults from risetide.toml.".to_string(),
                format!("Error: {}", e),
            ],
        ),
    };

    match toml::from_str(&content) {
        Ok(defaults) => defaults,
        Err(e) => fail(
            "ERROR: Invalid risetide.toml",
            &e.to_string().lines().map(str::to_string).collect::<Vec<_>>(),
        ),
    }
}

/// Check the floors and the threshold gap
fn validate_settings(settings: &Settings) {
    let mut errors = Vec::new();

    if settings.hold_minutes < MIN_HOLD_MINUTES {
        errors.push(format!(
            "[settings] hold_minutes must be at least {}",
            MIN_HOLD_MINUTES
        ));
    }
    if settings.high_threshold_cm < MIN_HIGH_THRESHOLD_CM {
        errors.push(format!(
            "[settings] high_threshold_cm must be at least {}",
            MIN_HIGH_THRESHOLD_CM
        ));
    }
    if settings.low_threshold_cm < settings.high_threshold_cm.saturating_add(THRESHOLD_GAP_CM) {
        errors.push(format!(
            "[settings] low_threshold_cm must be >= high_threshold_cm + {}",
            THRESHOLD_GAP_CM
        ));
    }
    if settings.target_cycles < MIN_TARGET_CYCLES {
        errors.push(format!(
            "[settings] target_cycles must be at least {}",
            MIN_TARGET_CYCLES
        ));
    }

    if !errors.is_empty() {
        fail("ERROR: Invalid [settings] in risetide.toml", &errors);
    }
}

/// Check timing values the control loop divides or waits on
fn validate_timing(timing: &Timing, echo_timeout_us: u32) {
    let mut errors = Vec::new();

    for (name, value) in [
        ("repeat_ms", timing.repeat_ms),
        ("refresh_ms", timing.refresh_ms),
        ("loop_period_ms", timing.loop_period_ms),
    ] {
        if value == 0 {
            errors.push(format!("[timing] {} must be greater than 0", name));
        }
    }
    if timing.loop_period_ms > timing.edge_settle_ms {
        errors.push("[timing] loop_period_ms must not exceed edge_settle_ms".to_string());
    }
    if !(1_000..=100_000).contains(&echo_timeout_us) {
        errors.push("[sensor] echo_timeout_us must be 1000-100000".to_string());
    }

    if !errors.is_empty() {
        fail("ERROR: Invalid timing in risetide.toml", &errors);
    }
}

/// Write the validated values as Rust constants
fn generate_defaults(defaults: &Defaults) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let mut f = File::create(out_dir.join("defaults.rs")).unwrap();

    let s = &defaults.settings;
    let t = &defaults.timing;
    writeln!(f, "// Generated from risetide.toml by build.rs").unwrap();
    writeln!(f, "pub const HOLD_MINUTES: u16 = {};", s.hold_minutes).unwrap();
    writeln!(f, "pub const HIGH_THRESHOLD_CM: u16 = {};", s.high_threshold_cm).unwrap();
    writeln!(f, "pub const LOW_THRESHOLD_CM: u16 = {};", s.low_threshold_cm).unwrap();
    writeln!(f, "pub const TARGET_CYCLES: u16 = {};", s.target_cycles).unwrap();
    writeln!(f, "pub const LONG_PRESS_MS: u32 = {};", t.long_press_ms).unwrap();
    writeln!(f, "pub const REPEAT_MS: u32 = {};", t.repeat_ms).unwrap();
    writeln!(f, "pub const EDGE_SETTLE_MS: u32 = {};", t.edge_settle_ms).unwrap();
    writeln!(
        f,
        "pub const SINGLE_SHOT_SETTLE_MS: u32 = {};",
        t.single_shot_settle_ms
    )
    .unwrap();
    writeln!(f, "pub const REFRESH_MS: u32 = {};", t.refresh_ms).unwrap();
    writeln!(f, "pub const ANNOUNCE_MS: u32 = {};", t.announce_ms).unwrap();
    writeln!(f, "pub const LOOP_PERIOD_MS: u32 = {};", t.loop_period_ms).unwrap();
    writeln!(
        f,
        "pub const ECHO_TIMEOUT_US: u32 = {};",
        defaults.sensor.echo_timeout_us
    )
    .unwrap();
    writeln!(
        f,
        "pub const FILL_ACTIVE_LOW: bool = {};",
        defaults.actuators.fill_active_low
    )
    .unwrap();
    writeln!(
        f,
        "pub const DRAIN_ACTIVE_LOW: bool = {};",
        defaults.actuators.drain_active_low
    )
    .unwrap();
}

/// Abort the build with a boxed error report
fn fail(title: &str, lines: &[String]) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  {:<64} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        lines
            .iter()
            .map(|line| {
                let truncated = if line.len() > 62 {
                    format!("{}...", &line[..59])
                } else {
                    line.to_string()
                };
                format!("║  • {:<62} ║", truncated)
            })
            .collect::<Vec<_>>()
            .join("\n")
    );
}
