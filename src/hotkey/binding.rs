//! Shortcut string parsing and the reserved-shortcut set.

use std::fmt;

/// A single keybinding: a key with optional modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyBinding {
    /// Parse a keybinding string like "Ctrl+Alt+P" or "F10".
    /// Modifiers can appear in any order: "Alt+Ctrl+P", "Shift+Ctrl+W", etc.
    /// Supports spaces around '+' (e.g., "Ctrl + Alt + P").
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty keybinding string".to_string());
        }

        // Normalize by removing spaces around '+'
        let normalized = s.replace(" + ", "+").replace("+ ", "+").replace(" +", "+");
        let parts: Vec<&str> = normalized.split('+').collect();

        let mut ctrl = false;
        let mut shift = false;
        let mut alt = false;
        let mut key_parts = Vec::new();

        for part in parts {
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => ctrl = true,
                "shift" => shift = true,
                "alt" => alt = true,
                _ => key_parts.push(part),
            }
        }

        if key_parts.is_empty() {
            return Err(format!("No key specified in: {s}"));
        }

        // Join handles the case where the key itself is '+'
        // ("Ctrl+Shift++" splits into empty trailing parts).
        let key = key_parts.join("+");
        let key = if key.is_empty() { "+".to_string() } else { key };

        Ok(Self {
            key,
            ctrl,
            shift,
            alt,
        })
    }

    /// Check if this keybinding matches the given input state.
    pub fn matches(&self, key: &str, ctrl: bool, shift: bool, alt: bool) -> bool {
        self.key.eq_ignore_ascii_case(key)
            && self.ctrl == ctrl
            && self.shift == shift
            && self.alt == alt
    }

    /// Whether two bindings trigger on the same input, independent of how
    /// either was written (modifier order, key case).
    pub fn conflicts_with(&self, other: &KeyBinding) -> bool {
        self.matches(&other.key, other.ctrl, other.shift, other.alt)
    }
}

impl fmt::Display for KeyBinding {
    /// Canonical form: modifiers in fixed `Ctrl+Shift+Alt` order, key last.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ctrl {
            write!(f, "Ctrl+")?;
        }
        if self.shift {
            write!(f, "Shift+")?;
        }
        if self.alt {
            write!(f, "Alt+")?;
        }
        f.write_str(&self.key)
    }
}

/// Shortcuts the application claims for itself while the overlay is focused
/// (undo, redo, save). A rebind onto one of these is rejected.
pub const RESERVED_SHORTCUTS: [&str; 3] = ["Ctrl+Z", "Ctrl+Y", "Ctrl+S"];

/// Checks a candidate accelerator against the reserved set.
///
/// Comparison goes through parsed bindings, so modifier order and key case
/// in the candidate do not matter.
pub fn is_reserved(candidate: &str) -> bool {
    let Ok(parsed) = KeyBinding::parse(candidate) else {
        return false;
    };

    RESERVED_SHORTCUTS.iter().any(|reserved| {
        KeyBinding::parse(reserved)
            .map(|r| r.conflicts_with(&parsed))
            .unwrap_or(false)
    })
}
