//! Configuration section types.

use serde::{Deserialize, Serialize};

/// Drawing tool defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawingConfig {
    /// Initial brush color as a hex string.
    #[serde(default = "default_color")]
    pub default_color: String,

    /// Initial stroke width in pixels.
    #[serde(default = "default_width")]
    pub default_width: f64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_width: default_width(),
        }
    }
}

fn default_color() -> String {
    "#DB2777".to_string()
}

fn default_width() -> f64 {
    5.0
}

/// Capture/save preferences.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Directory saved captures default to. Empty means the user's
    /// download folder.
    #[serde(default)]
    pub save_directory: Option<String>,
}
