//! Configuration module.
//!
//! Handles loading, validating, and merging a `config.toml`. Stock defaults
//! are the base layer; a user file passed with `--config` is merged on top.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [cover]
//! size = 500                # Edge length of the square output, in pixels
//! quality = 95              # JPEG quality (1-100)
//!
//! [scan]
//! follow_symlinks = false   # Follow symlinked directories while walking
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want:
//!
//! ```toml
//! [cover]
//! quality = 90
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::imaging::DEFAULT_COVER_SIZE;

/// Largest accepted `cover.size`. Embedded art beyond this is never useful
/// and would balloon every tagged file.
const MAX_COVER_SIZE: u32 = 10_000;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Tool configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Output size and JPEG quality of resized covers.
    pub cover: CoverConfig,
    /// Directory walking behavior.
    pub scan: ScanConfig,
}

impl Config {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cover.size == 0 || self.cover.size > MAX_COVER_SIZE {
            return Err(ConfigError::Validation(format!(
                "cover.size must be 1-{MAX_COVER_SIZE}"
            )));
        }
        if self.cover.quality == 0 || self.cover.quality > 100 {
            return Err(ConfigError::Validation(
                "cover.quality must be 1-100".into(),
            ));
        }
        Ok(())
    }
}

/// Cover transform settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoverConfig {
    /// Width and height of the re-encoded cover.
    pub size: u32,
    /// JPEG encoding quality (1 = worst, 100 = best).
    pub quality: u32,
}

impl Default for CoverConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_COVER_SIZE,
            quality: 95,
        }
    }
}

/// Directory scanning settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    pub follow_symlinks: bool,
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(Config::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Read a config file as a raw TOML value.
pub fn load_raw_config(path: &Path) -> Result<toml::Value, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<Config, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: Config = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load the effective config.
///
/// With no path, the stock defaults are returned. A path that does not exist
/// is an error: the user asked for that file explicitly.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let overlay = path.map(load_raw_config).transpose()?;
    resolve_config(stock_defaults_value(), overlay)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# cover-resize configuration
# ==========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Pass the file with: cover-resize --config config.toml resize <PATHS>...
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Cover transform
# ---------------------------------------------------------------------------
[cover]
# Edge length of the square output in pixels. Covers are stretched to
# size x size; the original aspect ratio is not kept.
size = 500

# JPEG encoding quality (1 = worst, 100 = best).
quality = 95

# ---------------------------------------------------------------------------
# Directory scanning
# ---------------------------------------------------------------------------
[scan]
# Follow symlinked directories while walking folders.
follow_symlinks = false
"##
}
