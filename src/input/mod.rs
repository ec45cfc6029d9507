//! Terminal input - stdin bytes → key events.
//!
//! # Architecture
//!
//! ```text
//! stdin ──read ≤8 bytes──► reader ──window──► parser ──► Option<KeyEvent>
//!                                               │
//!                                            keymap (function keys)
//! ```
//!
//! No buffering happens between reads: every read window is decoded on its own.

pub mod events;
pub mod keymap;
pub mod parser;
pub mod reader;

pub use events::{Event, KeyCode, KeyEvent, KeyModifiers};
pub use parser::decode;
pub use reader::{EventReader, READ_WINDOW, read_event};
