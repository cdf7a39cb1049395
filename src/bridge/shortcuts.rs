//! Global-shortcut registration contract.

/// Shell-side registration of the overlay's global show/hide shortcut.
///
/// The hotkey recorder calls `unregister` when a recording session starts so
/// keys typed while recording do not also trigger the old binding, and
/// `register` with whichever binding is live once the session ends.
pub trait ShortcutRegistrar {
    /// Registers `accelerator` as the live global shortcut, replacing any
    /// previous registration.
    fn register(&mut self, accelerator: &str);

    /// Drops the live registration, if any.
    fn unregister(&mut self);
}

/// Registrar that only remembers what it was told; useful where no shell is
/// attached (headless runs, tests).
#[derive(Debug, Default)]
pub struct NullRegistrar {
    registered: Option<String>,
}

impl NullRegistrar {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently registered accelerator, if any.
    pub fn registered(&self) -> Option<&str> {
        self.registered.as_deref()
    }
}

impl ShortcutRegistrar for NullRegistrar {
    fn register(&mut self, accelerator: &str) {
        log::debug!("registering global shortcut {accelerator}");
        self.registered = Some(accelerator.to_string());
    }

    fn unregister(&mut self) {
        if let Some(previous) = self.registered.take() {
            log::debug!("unregistering global shortcut {previous}");
        }
    }
}
