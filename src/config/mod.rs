//! Configuration file support for pinemark.
//!
//! This module handles loading and validating user settings from the
//! configuration file located at `~/.config/pinemark/config.toml`. Settings
//! include drawing defaults and capture preferences.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod types;

// Re-export commonly used types at module level
pub use types::{CaptureConfig, DrawingConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::canvas::Color;
use crate::input::Brush;
use crate::input::brush::{MAX_STROKE_WIDTH, MIN_STROKE_WIDTH};

/// Main configuration structure containing all user settings.
///
/// This is the root type deserialized from the TOML file. All fields have
/// sensible defaults and fall back to those when missing from the file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "#DB2777"
/// default_width = 5.0
///
/// [capture]
/// save_directory = "~/Pictures/Pine"
/// ```
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Drawing tool defaults (color, stroke width)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Capture/save preferences
    #[serde(default)]
    pub capture: CaptureConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped (or replaced with the default) and a
    /// warning is logged, so a hand-edited config file can never put the
    /// engine into an unusable state.
    fn validate_and_clamp(&mut self) {
        if !(MIN_STROKE_WIDTH..=MAX_STROKE_WIDTH).contains(&self.drawing.default_width) {
            log::warn!(
                "Invalid default_width {:.1}, clamping to {:.0}-{:.0} range",
                self.drawing.default_width,
                MIN_STROKE_WIDTH,
                MAX_STROKE_WIDTH
            );
            self.drawing.default_width = self
                .drawing
                .default_width
                .clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH);
        }

        if Color::from_hex(&self.drawing.default_color).is_err() {
            log::warn!(
                "Invalid default_color '{}', falling back to '#DB2777'",
                self.drawing.default_color
            );
            self.drawing.default_color = "#DB2777".to_string();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined
    /// (e.g. HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("pinemark");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path (used by tests).
    pub fn load_from(config_path: &std::path::Path) -> Result<Self> {
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

    /// The brush the controller starts with, derived from the drawing
    /// defaults. Called after `validate_and_clamp`, so the hex string is
    /// known-good; a parse failure here still degrades to the default brush.
    pub fn initial_brush(&self) -> Brush {
        match Color::from_hex(&self.drawing.default_color) {
            Ok(color) => Brush::new(color, self.drawing.default_width),
            Err(err) => {
                log::warn!("default_color unusable ({err}), using built-in brush");
                Brush::default()
            }
        }
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the example config from `config.example.toml` to the user's
    /// config directory (`pinemark --init-config`).
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(&config_path, default_config)?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }
}
