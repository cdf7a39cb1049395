//! Brush configuration shared across draw modes.

use crate::canvas::{Color, LineCap, StrokeStyle, color::DEFAULT_BRUSH};

/// Fixed opacity applied to highlighter strokes regardless of the base
/// color's own alpha.
pub const HIGHLIGHT_ALPHA: f64 = 0.65;

/// Lower bound for the stroke width.
pub const MIN_STROKE_WIDTH: f64 = 1.0;

/// Upper bound for the stroke width.
pub const MAX_STROKE_WIDTH: f64 = 30.0;

/// Current brush state: base color and stroke width.
///
/// Owned exclusively by the mode controller. The color stored here is the
/// user's picked color at full strength; mode-specific transforms (the
/// highlighter alpha) are derived from it on every change, never baked in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brush {
    pub color: Color,
    pub width: f64,
}

impl Default for Brush {
    fn default() -> Self {
        Self {
            color: DEFAULT_BRUSH,
            width: 5.0,
        }
    }
}

impl Brush {
    pub fn new(color: Color, width: f64) -> Self {
        Self {
            color,
            width: clamp_width(width),
        }
    }

    /// Stroke style for free-draw mode: full color, round caps.
    pub fn free_style(&self) -> StrokeStyle {
        StrokeStyle {
            color: self.color,
            width: self.width,
            cap: LineCap::Round,
        }
    }

    /// Stroke style for highlight mode: the base color at the fixed
    /// highlighter alpha, square caps for flat stroke ends.
    pub fn highlight_style(&self) -> StrokeStyle {
        StrokeStyle {
            color: self.color.with_alpha(HIGHLIGHT_ALPHA),
            width: self.width,
            cap: LineCap::Square,
        }
    }
}

/// Clamps a requested stroke width to the sane positive range.
pub fn clamp_width(width: f64) -> f64 {
    if !width.is_finite() {
        log::warn!("non-finite stroke width {width} replaced with minimum");
        return MIN_STROKE_WIDTH;
    }
    width.clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH)
}
