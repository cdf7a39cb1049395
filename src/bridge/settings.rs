//! Persisted user settings and the settings collaborator contract.
//!
//! Settings live in a small JSON document (`settings.json` under the user
//! config directory). The engine only ever touches them through the
//! [`SettingsStore`] trait so tests and the shell can substitute their own
//! storage.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default accelerator for showing/hiding the overlay.
pub const DEFAULT_TOGGLE_PINE: &str = "Ctrl+Alt+P";

/// Rebindable global hotkeys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotkeySettings {
    /// Accelerator that shows/hides the overlay window.
    #[serde(default = "default_toggle_pine")]
    pub toggle_pine: String,
}

impl Default for HotkeySettings {
    fn default() -> Self {
        Self {
            toggle_pine: default_toggle_pine(),
        }
    }
}

fn default_toggle_pine() -> String {
    DEFAULT_TOGGLE_PINE.to_string()
}

/// Root of the persisted settings document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub hotkeys: HotkeySettings,
}

/// Errors surfaced by settings persistence.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not determine the user config directory")]
    NoConfigDir,

    #[error("failed to read settings from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("settings file {path} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to serialize settings: {0}")]
    Serialize(serde_json::Error),

    #[error("failed to write settings to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Contract for reading and writing the persisted settings.
///
/// The hotkey recorder reads on mount and writes on commit/reset; a write
/// failure must leave the previous document intact so the caller can roll
/// back its in-memory state.
pub trait SettingsStore {
    fn load(&self) -> Result<Settings, SettingsError>;
    fn save(&self, settings: &Settings) -> Result<(), SettingsError>;
}

/// JSON-file-backed settings store.
pub struct JsonSettingsStore {
    path: PathBuf,
}

impl JsonSettingsStore {
    /// Store rooted at an explicit file path (used by tests).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the standard location, `~/.config/pinemark/settings.json`.
    ///
    /// # Errors
    /// Fails only when the user config directory cannot be determined.
    pub fn at_default_location() -> Result<Self, SettingsError> {
        let dir = dirs::config_dir().ok_or(SettingsError::NoConfigDir)?;
        Ok(Self::new(dir.join("pinemark").join("settings.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for JsonSettingsStore {
    /// Loads the settings document, or defaults when none exists yet.
    fn load(&self) -> Result<Settings, SettingsError> {
        if !self.path.exists() {
            log::info!("settings file not found, using defaults");
            log::debug!("expected settings at: {}", self.path.display());
            return Ok(Settings::default());
        }

        let raw = fs::read_to_string(&self.path).map_err(|source| SettingsError::Read {
            path: self.path.clone(),
            source,
        })?;

        let settings = serde_json::from_str(&raw).map_err(|source| SettingsError::Parse {
            path: self.path.clone(),
            source,
        })?;

        log::debug!("loaded settings from {}", self.path.display());
        Ok(settings)
    }

    fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| SettingsError::Write {
                path: self.path.clone(),
                source,
            })?;
        }

        let raw = serde_json::to_string_pretty(settings).map_err(SettingsError::Serialize)?;

        fs::write(&self.path, raw).map_err(|source| SettingsError::Write {
            path: self.path.clone(),
            source,
        })?;

        log::info!("saved settings to {}", self.path.display());
        Ok(())
    }
}
