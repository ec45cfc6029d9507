//! # spark-term
//!
//! Raw terminal input layer for Rust.
//!
//! Switches a terminal into raw mode, decodes the bytes it sends into key
//! events, reports window geometry and writes ANSI control sequences.
//!
//! ## Architecture
//!
//! ```text
//! terminal::enable_raw_mode(config) ──► RawSession (restores on disable/drop)
//!                                            │ VMIN/VTIME
//!                                            ▼
//! stdin ──► input::EventReader ──► input::decode ──► Option<Event>
//!
//! ansi::{MoveTo, EnterAlternateScreen, ...} ──► stdout
//! ansi::cursor::position ◄── ESC [ row ; col R
//! ```
//!
//! Everything is synchronous. Each call is one or more blocking syscalls on
//! the calling thread; polling comes from the raw-mode timeout, so loop on
//! [`EventReader::read`](input::EventReader::read) to poll.
//!
//! ## Modules
//!
//! - [`input`] - Event types, escape sequence decoder, reader
//! - [`terminal`] - Raw mode sessions and window size
//! - [`ansi`] - ANSI commands and the cursor position query
//! - [`error`] - Error type

pub mod ansi;
pub mod error;
pub mod input;
pub mod terminal;

pub use error::{Error, Result};

pub use input::{Event, EventReader, KeyCode, KeyEvent, KeyModifiers, decode, read_event};

pub use terminal::{
    AttributeBackend, RawConfig, RawSession, TtyBackend, WindowSize, enable_raw_mode, window_size,
};
