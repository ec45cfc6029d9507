//! Synchronous event reader.
//!
//! One call is one `read(2)` of at most [`READ_WINDOW`] bytes, handed to the
//! decoder as-is. Whether the read blocks or times out is decided by the
//! active raw-mode configuration (VMIN/VTIME), not here.

use std::io::{self, Read};

use tracing::trace;

use super::events::Event;
use super::parser;
use crate::error::Result;

/// Maximum bytes consumed per read. Long enough for every sequence the
/// decoder knows.
pub const READ_WINDOW: usize = 8;

/// Reads and decodes input events.
pub struct EventReader<R> {
    input: R,
}

impl EventReader<io::Stdin> {
    /// Reader over the process stdin.
    pub fn stdin() -> Self {
        Self::new(io::stdin())
    }
}

impl<R: Read> EventReader<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    /// Read once and decode.
    ///
    /// Returns `Ok(None)` when nothing was read (EOF or raw-mode timeout) and
    /// when the bytes did not decode to a known key. Read errors are returned
    /// without retry.
    pub fn read(&mut self) -> Result<Option<Event>> {
        let mut buf = [0u8; READ_WINDOW];
        let n = self.input.read(&mut buf)?;
        if n == 0 {
            trace!("read returned no bytes");
            return Ok(None);
        }

        let bytes = &buf[..n];
        match parser::decode(bytes) {
            Some(key) => {
                trace!(?key, n, "decoded key");
                Ok(Some(Event::Key(key)))
            }
            None => {
                trace!(?bytes, "dropped undecodable input");
                Ok(None)
            }
        }
    }

    pub fn get_ref(&self) -> &R {
        &self.input
    }
}

/// Read one event from stdin.
pub fn read_event() -> Result<Option<Event>> {
    EventReader::stdin().read()
}
