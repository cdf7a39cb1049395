//! Drawing-surface boundary types.
//!
//! This module defines the core canvas-facing types used by the annotation
//! engine:
//! - [`Color`]: RGBA color with hex parsing and the toolbar preset palette
//! - [`ObjectId`] / [`ShapeKind`]: opaque object identity and primitives
//! - [`DrawSurface`]: the capability contract the external canvas fulfills
//! - [`MemorySurface`]: in-process implementation for tests and headless use

pub mod color;
pub mod memory;
pub mod object;
pub mod surface;

// Re-export commonly used types at module level
pub use color::{Color, ColorParseError};
pub use memory::MemorySurface;
pub use object::{ObjectId, ShapeKind};
pub use surface::{DrawSurface, LineCap, StrokeStyle};

// Re-export palette constants for public API
#[allow(unused_imports)]
pub use color::{DEFAULT_BRUSH, PRESET_PALETTE};
