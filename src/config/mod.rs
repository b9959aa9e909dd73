//! Configuration file support for molsketch.
//!
//! Settings are read from `~/.config/molsketch/config.toml`. They cover the
//! defaults for new annotations and extra entries for the browser key table.
//! If no config file exists, defaults are used.

pub mod enums;
pub mod types;

pub use enums::ColorSpec;
pub use types::{ArrowConfig, DrawingConfig};

use crate::input::{KeyEntry, KeyTable};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "black"
/// default_thickness = 1.5
/// default_font_size = 12.0
///
/// [arrow]
/// head_length = 10.0
/// head_angle = 30.0
///
/// [[keys]]
/// code = 226
/// name = "IntlBackslash"
/// categories = ["letter"]
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Defaults for new annotations
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Arrowhead appearance
    #[serde(default)]
    pub arrow: ArrowConfig,

    /// Additional or overriding key table entries
    #[serde(default)]
    pub keys: Vec<KeyEntry>,
}

impl Config {
    /// Validates and clamps configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    fn validate_and_clamp(&mut self) {
        if !(0.5..=20.0).contains(&self.drawing.default_thickness) {
            warn!(
                "Invalid default_thickness {:.1}, clamping to 0.5-20.0 range",
                self.drawing.default_thickness
            );
            self.drawing.default_thickness =
                clamp_or(self.drawing.default_thickness, 0.5, 20.0, 1.5);
        }

        if !(6.0..=72.0).contains(&self.drawing.default_font_size) {
            warn!(
                "Invalid default_font_size {:.1}, clamping to 6.0-72.0 range",
                self.drawing.default_font_size
            );
            self.drawing.default_font_size =
                clamp_or(self.drawing.default_font_size, 6.0, 72.0, 12.0);
        }

        if !(2.0..=50.0).contains(&self.arrow.head_length) {
            warn!(
                "Invalid arrow head_length {:.1}, clamping to 2.0-50.0 range",
                self.arrow.head_length
            );
            self.arrow.head_length = clamp_or(self.arrow.head_length, 2.0, 50.0, 10.0);
        }

        if !(15.0..=60.0).contains(&self.arrow.head_angle) {
            warn!(
                "Invalid arrow head_angle {:.1}°, clamping to 15.0-60.0° range",
                self.arrow.head_angle
            );
            self.arrow.head_angle = clamp_or(self.arrow.head_angle, 15.0, 60.0, 30.0);
        }

        let valid_weight = matches!(
            self.drawing.font_weight.to_lowercase().as_str(),
            "normal" | "bold" | "light" | "ultralight" | "heavy" | "ultrabold"
        ) || self
            .drawing
            .font_weight
            .parse::<u32>()
            .is_ok_and(|w| (100..=900).contains(&w));

        if !valid_weight {
            warn!(
                "Invalid font_weight '{}', falling back to 'normal'",
                self.drawing.font_weight
            );
            self.drawing.font_weight = "normal".to_string();
        }

        if !matches!(
            self.drawing.font_style.to_lowercase().as_str(),
            "normal" | "italic" | "oblique"
        ) {
            warn!(
                "Invalid font_style '{}', falling back to 'normal'",
                self.drawing.font_style
            );
            self.drawing.font_style = "normal".to_string();
        }
    }

    /// Returns the path to the configuration file (`~/.config/molsketch/config.toml`).
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("molsketch");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads the user configuration, or defaults if the file does not exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path, or defaults if it does not exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Serializes the configuration to `config_path`, creating parent directories.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// The standard key table with this configuration's `[[keys]]` entries applied.
    pub fn key_table(&self) -> Result<KeyTable> {
        if self.keys.is_empty() {
            return Ok(KeyTable::standard().clone());
        }
        KeyTable::standard()
            .with_overrides(&self.keys)
            .context("Invalid [[keys]] entry in config")
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

fn clamp_or(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(min, max)
    }
}
