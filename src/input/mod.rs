//! Input handling and the interaction-mode state machine.
//!
//! This module decides what a pointer gesture currently does. It owns the
//! active mode (select, free-draw, highlight, eraser, shape-insert), the
//! brush configuration, and the dispatch of pointer events to the mode that
//! should see them.

pub mod brush;
pub mod controller;
pub mod events;
pub mod mode;

// Re-export commonly used types at module level
pub use brush::{Brush, HIGHLIGHT_ALPHA};
pub use controller::ModeController;
pub use events::{Key, PointerButton};
pub use mode::{Mode, ModeKind};
