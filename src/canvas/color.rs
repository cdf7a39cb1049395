//! RGBA color type, hex parsing, and the toolbar preset palette.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use pinemark::canvas::Color;
/// let pink = Color::from_hex("#DB2777").unwrap();
/// let faded = pink.with_alpha(0.65);
/// assert!(faded.a < pink.a);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

/// Errors produced when parsing a hex color string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("hex color must start with '#': {0}")]
    MissingHash(String),

    #[error("hex color must have 6 or 8 digits: {0}")]
    BadLength(String),

    #[error("invalid hex digit in color: {0}")]
    BadDigit(String),
}

impl Color {
    /// Creates a new color from RGBA components.
    ///
    /// All values should be in the range 0.0 to 1.0.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Parses a `#RRGGBB` or `#RRGGBBAA` hex string.
    ///
    /// This is the format the toolbar's color swatches and the config file
    /// use. Parsing is case-insensitive.
    ///
    /// # Errors
    /// Returns a [`ColorParseError`] describing which rule the string broke.
    pub fn from_hex(s: &str) -> Result<Self, ColorParseError> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(trimmed.to_string()))?;

        if digits.len() != 6 && digits.len() != 8 {
            return Err(ColorParseError::BadLength(trimmed.to_string()));
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::BadDigit(trimmed.to_string()));
        }

        let component = |range: std::ops::Range<usize>| -> Result<f64, ColorParseError> {
            u8::from_str_radix(&digits[range], 16)
                .map(|v| v as f64 / 255.0)
                .map_err(|_| ColorParseError::BadDigit(trimmed.to_string()))
        };

        let r = component(0..2)?;
        let g = component(2..4)?;
        let b = component(4..6)?;
        let a = if digits.len() == 8 {
            component(6..8)?
        } else {
            1.0
        };

        Ok(Self { r, g, b, a })
    }

    /// Formats the color as a `#RRGGBB` hex string (alpha is not encoded).
    pub fn to_hex(&self) -> String {
        let to_byte = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02X}{:02X}{:02X}",
            to_byte(self.r),
            to_byte(self.g),
            to_byte(self.b)
        )
    }

    /// Returns the same color with its alpha replaced.
    ///
    /// The highlight mode uses this to apply its fixed opacity transform to
    /// the current base color regardless of the base alpha.
    pub fn with_alpha(&self, alpha: f64) -> Self {
        Self {
            a: alpha.clamp(0.0, 1.0),
            ..*self
        }
    }
}

// ============================================================================
// Preset Palette (toolbar swatches)
// ============================================================================

/// Default brush color, the pink the toolbar starts with (`#DB2777`).
pub const DEFAULT_BRUSH: Color = Color {
    r: 219.0 / 255.0,
    g: 39.0 / 255.0,
    b: 119.0 / 255.0,
    a: 1.0,
};

/// The hex strings of the toolbar's color presets, in swatch order.
pub const PRESET_PALETTE: [&str; 9] = [
    "#DC2626", "#EA580C", "#CA8A04", "#16A34A", "#2563EB", "#9333EA", "#DB2777", "#FFFFFF",
    "#000000",
];
