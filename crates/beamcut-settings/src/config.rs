//! Exporter configuration with JSON and TOML persistence.
//!
//! Holds the machine geometry, feed rates, sampling parameters and
//! G-code snippets the exporter needs, with validation applied on both
//! load and save.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{SettingsError, SettingsResult};

/// Complete exporter configuration.
///
/// Aggregates machine geometry, feed rates, sampling parameters and the
/// G-code snippets inserted around tool state changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Work origin X offset from the machine origin (mm).
    pub offset_x: f64,
    /// Work origin Y offset from the machine origin (mm).
    pub offset_y: f64,
    /// Usable bed width (mm).
    pub bed_width: f64,
    /// Usable bed height (mm).
    pub bed_height: f64,
    /// Feed rate for travel moves (mm/s).
    pub travel_feed: f64,
    /// Feed rate for cutting moves (mm/s).
    pub working_feed: f64,
    /// Sampling resolution along each segment's curve parameter.
    pub step_size: f64,
    /// Largest positional jump bridged without a travel move (mm).
    pub gap_threshold: f64,
    /// G-code inserted after the fixed preamble.
    #[serde(default)]
    pub start_gcode: String,
    /// G-code appended at the very end of the program.
    #[serde(default)]
    pub end_gcode: String,
    /// G-code that engages the tool.
    #[serde(default)]
    pub tool_on_gcode: String,
    /// G-code that disengages the tool.
    #[serde(default)]
    pub tool_off_gcode: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            bed_width: 220.0,
            bed_height: 220.0,
            travel_feed: 800.0,
            working_feed: 400.0,
            step_size: 0.01,
            gap_threshold: 0.07,
            start_gcode: String::new(),
            end_gcode: String::new(),
            tool_on_gcode: String::new(),
            tool_off_gcode: String::new(),
        }
    }
}

impl Config {
    /// Create a new config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from a file (JSON or TOML, by extension).
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)?
        } else {
            return Err(unsupported_format(path));
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to a file (JSON or TOML, by extension).
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(self)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::to_string_pretty(self)?
        } else {
            return Err(unsupported_format(path));
        };

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate all configuration values.
    pub fn validate(&self) -> SettingsResult<()> {
        // Validate bed geometry
        if self.bed_width <= 0.0 {
            return Err(invalid("bed_width", "must be positive"));
        }
        if self.bed_height <= 0.0 {
            return Err(invalid("bed_height", "must be positive"));
        }

        // Validate feed rates
        if self.travel_feed <= 0.0 {
            return Err(invalid("travel_feed", "must be positive"));
        }
        if self.working_feed <= 0.0 {
            return Err(invalid("working_feed", "must be positive"));
        }

        // Validate sampling parameters
        if self.step_size <= 0.0 {
            return Err(invalid("step_size", "must be positive"));
        }
        if self.gap_threshold < 0.0 {
            return Err(invalid("gap_threshold", "must not be negative"));
        }

        Ok(())
    }

    /// Default location for the persisted configuration file.
    ///
    /// Resolves to `<platform config dir>/beamcut/config.toml`.
    pub fn default_config_path() -> SettingsResult<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| {
            SettingsError::ConfigDirectory("no platform config directory".to_string())
        })?;
        Ok(dir.join("beamcut").join("config.toml"))
    }
}

fn invalid(key: &str, reason: &str) -> SettingsError {
    SettingsError::InvalidSetting {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}

fn unsupported_format(path: &Path) -> SettingsError {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("none");
    SettingsError::UnsupportedFormat(ext.to_string())
}
