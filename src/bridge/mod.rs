//! Contracts for the external collaborators the engine talks to.
//!
//! The surrounding shell (window, tray, real screen capture, OS shortcut
//! registration) is reached exclusively through the traits in this module:
//! - [`SettingsStore`]: read/write of the persisted settings document
//! - [`ShortcutRegistrar`]: the live global show/hide shortcut
//! - [`CaptureBackend`] / [`CaptureService`]: the capture-and-save round trip

pub mod capture;
pub mod settings;
pub mod shortcuts;

// Re-export commonly used types at module level
pub use capture::{CaptureBackend, CaptureError, CaptureRequest, CaptureService, SaveOutcome};
pub use settings::{JsonSettingsStore, Settings, SettingsError, SettingsStore};
pub use shortcuts::{NullRegistrar, ShortcutRegistrar};

// Re-export for public API
#[allow(unused_imports)]
pub use settings::DEFAULT_TOGGLE_PINE;
