//! Recording session for rebinding the overlay's show/hide shortcut.
//!
//! The recorder turns raw key events into one canonical accelerator string,
//! or rejects the attempt. While a session is open the live global shortcut
//! is unregistered, so keys typed into the recorder do not also trigger the
//! old binding.

use crate::bridge::settings::{SettingsStore, DEFAULT_TOGGLE_PINE};
use crate::bridge::shortcuts::ShortcutRegistrar;
use crate::input::Key;

use super::binding::is_reserved;

/// Shown in place of the bound value while keys are being recorded.
const RECORDING_PLACEHOLDER: &str = "...";

/// How a finished recording session resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    /// The candidate was validated, persisted, and is now live.
    Committed(String),
    /// The gesture contained no real key, only modifiers.
    RejectedModifierOnly,
    /// The candidate collides with a reserved application shortcut.
    RejectedReserved(String),
    /// Validation passed but persistence failed; the previous binding stays.
    PersistFailed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RecorderState {
    Idle,
    Recording,
}

/// Non-modifier token accumulated during a gesture, in press order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Alnum(char),
    Function(u8),
}

/// Captures key events during a recording session and normalizes them into
/// a canonical shortcut string.
pub struct HotkeyRecorder {
    current_binding: String,
    state: RecorderState,
    ctrl: bool,
    shift: bool,
    alt: bool,
    tokens: Vec<Token>,
}

impl HotkeyRecorder {
    /// Creates a recorder around the binding that is currently live.
    pub fn new(current_binding: impl Into<String>) -> Self {
        Self {
            current_binding: current_binding.into(),
            state: RecorderState::Idle,
            ctrl: false,
            shift: false,
            alt: false,
            tokens: Vec::new(),
        }
    }

    /// Creates a recorder seeded from the persisted settings; falls back to
    /// the default binding when the store cannot be read.
    pub fn from_store(store: &dyn SettingsStore) -> Self {
        let binding = match store.load() {
            Ok(settings) => settings.hotkeys.toggle_pine,
            Err(err) => {
                log::warn!("could not load settings, using default binding: {err}");
                DEFAULT_TOGGLE_PINE.to_string()
            }
        };
        Self::new(binding)
    }

    /// The accelerator currently bound (independent of any open session).
    pub fn current_binding(&self) -> &str {
        &self.current_binding
    }

    /// What the settings UI should display right now.
    pub fn display_value(&self) -> &str {
        match self.state {
            RecorderState::Idle => &self.current_binding,
            RecorderState::Recording => RECORDING_PLACEHOLDER,
        }
    }

    pub fn is_recording(&self) -> bool {
        self.state == RecorderState::Recording
    }

    /// Opens a recording session.
    ///
    /// The live shortcut is unregistered for the duration. A second call
    /// while a session is already open is rejected (returns `false`); the
    /// open session keeps its accumulated state.
    pub fn start_recording(&mut self, registrar: &mut dyn ShortcutRegistrar) -> bool {
        if self.state == RecorderState::Recording {
            log::warn!("hotkey recording already in progress, ignoring start request");
            return false;
        }

        self.clear_gesture();
        self.state = RecorderState::Recording;
        registrar.unregister();
        log::debug!("hotkey recording started");
        true
    }

    /// Accumulates one pressed key into the open gesture.
    ///
    /// Modifiers register at most once each; the first alphanumeric key and
    /// the first function key win, later ones are ignored.
    pub fn on_key_down(&mut self, key: Key) {
        if self.state != RecorderState::Recording {
            return;
        }

        match key {
            Key::Ctrl => self.ctrl = true,
            Key::Shift => self.shift = true,
            Key::Alt => self.alt = true,
            Key::Char(c) if c.is_ascii_alphanumeric() => {
                if self.tokens.iter().any(|t| matches!(t, Token::Alnum(_))) {
                    log::debug!("ignoring second alphanumeric key '{c}' (first wins)");
                } else {
                    self.tokens.push(Token::Alnum(c.to_ascii_uppercase()));
                }
            }
            Key::Function(n) if (1..=24).contains(&n) => {
                if self.tokens.iter().any(|t| matches!(t, Token::Function(_))) {
                    log::debug!("ignoring second function key F{n} (first wins)");
                } else {
                    self.tokens.push(Token::Function(n));
                }
            }
            other => log::debug!("ignoring unrecordable key {other:?}"),
        }
    }

    /// Finalizes the gesture on key release.
    ///
    /// Validation, in order: a candidate made of modifiers alone is
    /// rejected; a candidate colliding with a reserved shortcut is rejected;
    /// otherwise the candidate is persisted and becomes live. Both rejection
    /// paths and a persistence failure restore the previous binding, display
    /// and registration included.
    ///
    /// Returns `None` when no session is open.
    pub fn on_key_up(
        &mut self,
        store: &dyn SettingsStore,
        registrar: &mut dyn ShortcutRegistrar,
    ) -> Option<RecordOutcome> {
        if self.state != RecorderState::Recording {
            return None;
        }

        let outcome = if self.tokens.is_empty() {
            log::info!("rejecting modifier-only hotkey");
            RecordOutcome::RejectedModifierOnly
        } else {
            let candidate = self.candidate_string();
            self.apply_candidate(&candidate, store)
        };

        // Whatever the path, the session ends here and a binding must be
        // registered again: the new one on commit, the old one otherwise.
        self.clear_gesture();
        self.state = RecorderState::Idle;
        registrar.register(&self.current_binding);

        Some(outcome)
    }

    /// Closes an open session without committing anything.
    ///
    /// Transient gesture state is cleared and the current binding is
    /// re-registered; calling this with no open session is a no-op.
    pub fn stop_recording(&mut self, registrar: &mut dyn ShortcutRegistrar) {
        if self.state != RecorderState::Recording {
            return;
        }

        self.clear_gesture();
        self.state = RecorderState::Idle;
        registrar.register(&self.current_binding);
        log::debug!("hotkey recording stopped without commit");
    }

    /// Rebinds to the default accelerator through the full validation and
    /// persistence path (the settings menu's Reset button).
    pub fn reset_to_default(
        &mut self,
        store: &dyn SettingsStore,
        registrar: &mut dyn ShortcutRegistrar,
    ) -> RecordOutcome {
        let outcome = self.apply_candidate(DEFAULT_TOGGLE_PINE, store);
        registrar.register(&self.current_binding);
        outcome
    }

    /// Validates and persists a candidate accelerator.
    ///
    /// The same candidate as the current binding still runs the full path:
    /// persistence is attempted, not short-circuited.
    fn apply_candidate(&mut self, candidate: &str, store: &dyn SettingsStore) -> RecordOutcome {
        if is_reserved(candidate) {
            log::info!("rejecting reserved hotkey {candidate}");
            return RecordOutcome::RejectedReserved(candidate.to_string());
        }

        let mut settings = store.load().unwrap_or_default();
        settings.hotkeys.toggle_pine = candidate.to_string();

        match store.save(&settings) {
            Ok(()) => {
                log::info!("hotkey rebound to {candidate}");
                self.current_binding = candidate.to_string();
                RecordOutcome::Committed(candidate.to_string())
            }
            Err(err) => {
                log::error!("failed to persist hotkey {candidate}: {err}");
                RecordOutcome::PersistFailed(err.to_string())
            }
        }
    }

    /// Builds the canonical candidate: modifiers in `Ctrl+Shift+Alt`
    /// priority order, non-modifier tokens last in press order.
    fn candidate_string(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if self.ctrl {
            parts.push("Ctrl".to_string());
        }
        if self.shift {
            parts.push("Shift".to_string());
        }
        if self.alt {
            parts.push("Alt".to_string());
        }
        for token in &self.tokens {
            match token {
                Token::Alnum(c) => parts.push(c.to_string()),
                Token::Function(n) => parts.push(format!("F{n}")),
            }
        }
        parts.join("+")
    }

    fn clear_gesture(&mut self) {
        self.ctrl = false;
        self.shift = false;
        self.alt = false;
        self.tokens.clear();
    }
}
