//! Error types for terminal control.
//!
//! Decoding never fails: unrecognised input is "no event", not an error.
//! Everything that talks to the OS or parses a terminal reply lands here.

use std::io;

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Raw mode and window size need a POSIX terminal.
    #[error("terminal control is not supported on this platform")]
    UnsupportedPlatform,

    /// A terminal syscall (tcgetattr, tcsetattr, ioctl) reported failure.
    #[error("unexpected OS error in {op}")]
    Os {
        op: &'static str,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),

    /// Polling timeout does not fit in VTIME (tenths of a second, one byte).
    #[error("raw mode timeout {0}ms exceeds the 25500ms maximum")]
    InvalidTimeout(u32),

    /// The terminal answered a cursor position request with something unexpected.
    #[error("malformed cursor position response: {0}")]
    CursorResponse(String),
}

impl Error {
    /// Wrap the current `errno` for a failed syscall.
    #[cfg(unix)]
    pub(crate) fn last_os(op: &'static str) -> Self {
        Error::Os {
            op,
            source: io::Error::last_os_error(),
        }
    }
}
