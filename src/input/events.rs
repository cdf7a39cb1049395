//! Generic input event types for shell-independent handling.

/// Generic key representation.
///
/// The shell maps its native key codes to these values before forwarding
/// events to the engine; the hotkey recorder consumes them directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Function key F1..=F24, identified by number
    Function(u8),
    /// Ctrl modifier
    Ctrl,
    /// Shift modifier
    Shift,
    /// Alt modifier
    Alt,
    /// Escape key
    Escape,
    /// Return/Enter key
    Return,
    /// Backspace key
    Backspace,
    /// Space bar
    Space,
    /// Unmapped or unrecognized key
    Unknown,
}

/// Pointer button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Primary button (drawing and erasing)
    Left,
    /// Secondary button (cancel)
    Right,
    /// Middle button (currently unused)
    Middle,
}
