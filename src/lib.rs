//! Annotation interaction engine for the Pine screen overlay.
//!
//! The shell (window, tray, real screen capture, OS shortcut registration)
//! stays outside this crate; everything it needs crosses the trait
//! boundaries in [`bridge`] and [`canvas::DrawSurface`]. What lives here is
//! the interaction core: the draw-mode state machine, the undo/redo log,
//! the drag eraser, and the hotkey recorder.

pub mod bridge;
pub mod canvas;
pub mod config;
pub mod engine;
pub mod eraser;
pub mod history;
pub mod hotkey;
pub mod input;

pub use config::Config;
pub use engine::{OverlayEngine, Signal};
