//! Function-key lookup table.
//!
//! Maps complete escape sequences to function keys. Two encodings are
//! registered and both claim F1-F4:
//! - CSI `ESC [ <n> ~` for n in 10..=34, skipping 16, 22, 27 and 30
//! - SS3 `ESC O P/Q/R/S`
//!
//! Different terminals send one or the other, so neither wins.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::events::{KeyCode, KeyEvent};

/// Numeric CSI codes with no function key behind them.
const SKIPPED_CODES: [u8; 4] = [16, 22, 27, 30];

/// SS3 final bytes for F1-F4.
const SS3_KEYS: [u8; 4] = [b'P', b'Q', b'R', b'S'];

static FUNCTION_KEYS: LazyLock<HashMap<Vec<u8>, KeyEvent>> = LazyLock::new(build);

fn build() -> HashMap<Vec<u8>, KeyEvent> {
    let mut map = HashMap::new();

    let codes = (10u8..=34).filter(|n| !SKIPPED_CODES.contains(n));
    for (index, code) in codes.enumerate() {
        map.insert(
            format!("\x1b[{}~", code).into_bytes(),
            KeyEvent::new(KeyCode::Function(index as u8)),
        );
    }

    for (index, &final_byte) in SS3_KEYS.iter().enumerate() {
        map.insert(
            vec![0x1b, b'O', final_byte],
            KeyEvent::new(KeyCode::Function(index as u8)),
        );
    }

    map
}

/// Look up a complete escape sequence.
pub fn lookup(seq: &[u8]) -> Option<KeyEvent> {
    FUNCTION_KEYS.get(seq).copied()
}
