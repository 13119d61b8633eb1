//! Compiled-in configuration
//!
//! Power-up defaults come from risetide.toml, validated and turned into
//! constants by build.rs. Runtime changes made from the buttons live in
//! RAM only.

use defmt::*;

use risetide_core::config::{ControllerTiming, ProcessSettings, SettingsError};

/// Constants generated from risetide.toml
pub mod defaults {
    include!(concat!(env!("OUT_DIR"), "/defaults.rs"));
}

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Default settings break a floor or the threshold gap
    Settings(SettingsError),
}

impl From<SettingsError> for ConfigError {
    fn from(e: SettingsError) -> Self {
        ConfigError::Settings(e)
    }
}

/// Settings from the compiled-in defaults
fn default_settings() -> Result<ProcessSettings, ConfigError> {
    let settings = ProcessSettings::new(
        defaults::HOLD_MINUTES,
        defaults::HIGH_THRESHOLD_CM,
        defaults::LOW_THRESHOLD_CM,
        defaults::TARGET_CYCLES,
    )?;
    Ok(settings)
}

/// Loop timing from the compiled-in defaults
pub fn controller_timing() -> ControllerTiming {
    ControllerTiming {
        long_press_ms: defaults::LONG_PRESS_MS,
        repeat_ms: defaults::REPEAT_MS,
        edge_settle_ms: defaults::EDGE_SETTLE_MS,
        single_shot_settle_ms: defaults::SINGLE_SHOT_SETTLE_MS,
        refresh_ms: defaults::REFRESH_MS,
        announce_ms: defaults::ANNOUNCE_MS,
    }
}

/// Settings to boot with, falling back to the built-in values
pub fn load_settings() -> ProcessSettings {
    match default_settings() {
        Ok(settings) => {
            info!(
                "Settings: hold={}min high={}cm low={}cm cycles={}",
                settings.hold_minutes(),
                settings.high_threshold_cm(),
                settings.low_threshold_cm(),
                settings.target_cycles()
            );
            settings
        }
        Err(e) => {
            warn!("Invalid compiled-in settings ({:?}), using built-in values", e);
            ProcessSettings::default()
        }
    }
}
