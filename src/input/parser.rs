//! Escape sequence decoder for terminal input.
//!
//! Maps the bytes of one read to at most one key event:
//! - CSI sequences (arrows, Home, End, BackTab, Insert, PageUp/Down)
//! - Alt+key and Alt+Ctrl+key (ESC + byte)
//! - Control keys (bytes 1-31)
//! - Function keys, via the lookup table in [`super::keymap`]
//! - Single printable bytes
//!
//! Malformed or unknown sequences decode to `None`. The decoder keeps no
//! state between calls, so a sequence split across two reads is dropped.

use super::events::{KeyCode, KeyEvent, KeyModifiers};
use super::keymap;

const ESC: u8 = 0x1b;
const DEL: u8 = 0x7f;
const BS: u8 = 0x08;

/// Offset from a control byte to its lowercase letter (0x03 + 96 = 'c').
const CTRL_OFFSET: u8 = 96;

// =============================================================================
// Decoder
// =============================================================================

/// Decode one read window into a key event.
///
/// Dispatch is first-match: ESC sequences, Tab, Delete, Enter/Backspace,
/// control bytes, then the function-key table, then a lone byte as `Char`.
pub fn decode(bytes: &[u8]) -> Option<KeyEvent> {
    let matched = match bytes {
        [ESC, ..] => decode_escape(bytes),
        [b'\t', ..] => Some(KeyEvent::new(KeyCode::Tab)),
        [DEL, ..] => Some(KeyEvent::new(KeyCode::Delete)),
        [b'\r' | b'\n'] => Some(KeyEvent::new(KeyCode::Enter)),
        [BS] => Some(KeyEvent::new(KeyCode::Backspace)),
        [b, ..] if is_control(*b) => Some(ctrl(*b)),
        _ => None,
    };

    matched
        .or_else(|| keymap::lookup(bytes))
        .or_else(|| match bytes {
            [b] => Some(KeyEvent::with_modifiers(KeyCode::Char(*b), shift_for(*b))),
            _ => None,
        })
}

fn decode_escape(bytes: &[u8]) -> Option<KeyEvent> {
    match bytes.get(1) {
        None => Some(KeyEvent::new(KeyCode::Esc)),
        Some(b'[') => decode_csi(&bytes[2..]),
        Some(&b) if is_escaped_control(b) => Some(KeyEvent::with_modifiers(
            KeyCode::Char(b + CTRL_OFFSET),
            KeyModifiers::CONTROL | KeyModifiers::ALT,
        )),
        Some(&b) if bytes.len() == 2 => Some(KeyEvent::with_modifiers(
            KeyCode::Char(b),
            KeyModifiers::ALT | shift_for(b),
        )),
        Some(_) => None,
    }
}

/// `params` is everything after `ESC [`.
fn decode_csi(params: &[u8]) -> Option<KeyEvent> {
    let code = match params {
        // Bare `ESC [` is Alt+[ on most terminals, but it arrives unmodified.
        [] => return Some(KeyEvent::new(KeyCode::Char(b'['))),
        [b'A', ..] => KeyCode::Up,
        [b'B', ..] => KeyCode::Down,
        [b'C', ..] => KeyCode::Right,
        [b'D', ..] => KeyCode::Left,
        [b'H', ..] => KeyCode::Home,
        [b'F', ..] => KeyCode::End,
        [b'Z', ..] => {
            return Some(KeyEvent::with_modifiers(KeyCode::BackTab, KeyModifiers::SHIFT));
        }
        [b'2', b'~', ..] => KeyCode::Insert,
        [b'5', b'~', ..] => KeyCode::PageUp,
        [b'6', b'~', ..] => KeyCode::PageDown,
        _ => return None,
    };
    Some(KeyEvent::new(code))
}

// =============================================================================
// Helpers
// =============================================================================

/// Control bytes that decode as Ctrl+letter.
///
/// Backspace, Tab, LF and CR are keys in their own right, and 0x1b is ESC.
fn is_control(b: u8) -> bool {
    matches!(b, 0x01..=0x07 | 0x0b | 0x0c | 0x0e..=0x1a | 0x1c..=0x1f)
}

/// Control bytes that decode as Alt+Ctrl+letter after an ESC.
fn is_escaped_control(b: u8) -> bool {
    matches!(b, 0x01..=0x1a | 0x1c..=0x1f)
}

fn ctrl(b: u8) -> KeyEvent {
    KeyEvent::with_modifiers(KeyCode::Char(b + CTRL_OFFSET), KeyModifiers::CONTROL)
}

fn shift_for(b: u8) -> KeyModifiers {
    if b.is_ascii_uppercase() {
        KeyModifiers::SHIFT
    } else {
        KeyModifiers::empty()
    }
}

// =============================================================================
// Tests
// =============================================================================
