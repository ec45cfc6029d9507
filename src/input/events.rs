//! Decoded input events.
//!
//! Input is treated as single-byte: `KeyCode::Char` carries the raw byte,
//! not a decoded code point.

// =============================================================================
// Event
// =============================================================================

/// A decoded input event.
///
/// Only keys are produced today. Resize, paste and mouse events will land
/// here as new variants, so match with a wildcard arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Event {
    Key(KeyEvent),
}

impl Event {
    /// The key event, if this is one.
    pub fn as_key(&self) -> Option<&KeyEvent> {
        match self {
            Event::Key(key) => Some(key),
        }
    }
}

impl From<KeyEvent> for Event {
    fn from(key: KeyEvent) -> Self {
        Event::Key(key)
    }
}

// =============================================================================
// Keys
// =============================================================================

/// A key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    /// Key press with default modifiers (`NONE`).
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::default(),
        }
    }

    /// Key press with `flags` added on top of the default modifiers.
    pub fn with_modifiers(code: KeyCode, flags: KeyModifiers) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::default() | flags,
        }
    }
}

/// Key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Backspace,
    Enter,
    Up,
    Down,
    Right,
    Left,
    Home,
    End,
    PageUp,
    PageDown,
    Tab,
    BackTab,
    Delete,
    Insert,
    /// Zero-based function key index: `Function(0)` is F1.
    Function(u8),
    /// Raw input byte.
    Char(u8),
    Esc,
}

bitflags::bitflags! {
    /// Keyboard modifiers.
    ///
    /// `NONE` is a real flag, set by default, and it is not cleared when
    /// another flag is added. `NONE | CONTROL` is a valid value, so check
    /// the flag you care about rather than comparing against `NONE`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct KeyModifiers: u16 {
        const NONE      = 1 << 0;
        const SHIFT     = 1 << 1;
        const ALT       = 1 << 2;
        const CONTROL   = 1 << 3;
        const SUPER     = 1 << 4;
        const HYPER     = 1 << 5;
        const META      = 1 << 6;
        const CAPS_LOCK = 1 << 7;
        const NUM_LOCK  = 1 << 8;
    }
}

impl Default for KeyModifiers {
    fn default() -> Self {
        KeyModifiers::NONE
    }
}
