//! Terminal setup and teardown.
//!
//! Raw mode is a [`RawSession`]: enabling returns the session, dropping or
//! disabling it puts the terminal back exactly as it was.
//!
//! ```no_run
//! use spark_term::terminal::{self, RawConfig};
//!
//! let session = terminal::enable_raw_mode(RawConfig::polling(100)?)?;
//! // ... read events ...
//! session.disable()?;
//! # Ok::<(), spark_term::Error>(())
//! ```
//!
//! Everything here is synchronous and meant for one thread. Only one session
//! per terminal should be live at a time; nothing enforces that.

pub mod raw_mode;
pub mod tty;
pub mod window_size;

pub use raw_mode::{AttributeBackend, MAX_TIMEOUT_MS, RawConfig, RawSession};
pub use tty::TtyBackend;
#[cfg(unix)]
pub use tty::{is_tty, raw_attributes};
#[cfg(unix)]
pub use window_size::window_size_of;
pub use window_size::{WindowSize, window_size};

use crate::error::Result;

/// Put the terminal on stdin into raw mode.
pub fn enable_raw_mode(config: RawConfig) -> Result<RawSession<TtyBackend>> {
    RawSession::enable(TtyBackend::stdin()?, config)
}
