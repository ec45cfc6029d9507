//! ANSI escape sequences for terminal control.
//!
//! Alternate screen and bracketed paste are crossterm's own commands,
//! re-exported. The cursor sequences are [`crossterm::Command`]s too, so
//! everything here mixes freely in `queue!` / `execute!`:
//!
//! ```no_run
//! use std::io::{self, Write};
//! use crossterm::queue;
//! use spark_term::ansi::{EnterAlternateScreen, MoveTo};
//!
//! let mut out = io::stdout();
//! queue!(out, EnterAlternateScreen, MoveTo(0, 0))?;
//! out.flush()?;
//! # Ok::<(), io::Error>(())
//! ```
//!
//! Coordinates are 0-indexed; the 1-indexed wire format is handled here.

use std::fmt;

use crossterm::Command;

pub mod cursor;

/// Escape character.
pub const ESC: &str = "\x1b";

/// Control Sequence Introducer.
pub const CSI: &str = "\x1b[";

/// Commands here have no console API equivalent.
macro_rules! ansi_only {
    () => {
        #[cfg(windows)]
        fn execute_winapi(&self) -> std::io::Result<()> {
            Err(std::io::Error::new(
                std::io::ErrorKind::Unsupported,
                "this command requires ANSI escape sequence support",
            ))
        }

        #[cfg(windows)]
        fn is_ansi_code_supported(&self) -> bool {
            true
        }
    };
}

// =============================================================================
// Screen and Paste
// =============================================================================

pub use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
pub use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};

// =============================================================================
// Cursor Movement
// =============================================================================

/// Move the cursor to column `x`, row `y` (0-indexed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveTo(pub u16, pub u16);

impl Command for MoveTo {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        write!(f, "{}{};{}H", CSI, u32::from(self.1) + 1, u32::from(self.0) + 1)
    }

    ansi_only!();
}

/// Move the cursor up n rows. Zero is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveUp(pub u16);

/// Move the cursor down n rows. Zero is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveDown(pub u16);

/// Move the cursor right n columns. Zero is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRight(pub u16);

/// Move the cursor left n columns. Zero is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveLeft(pub u16);

/// `CSI n <dir>`, skipped for n = 0 since terminals read 0 as 1.
fn write_relative(f: &mut impl fmt::Write, n: u16, dir: char) -> fmt::Result {
    if n > 0 {
        write!(f, "{}{}{}", CSI, n, dir)
    } else {
        Ok(())
    }
}

impl Command for MoveUp {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        write_relative(f, self.0, 'A')
    }

    ansi_only!();
}

impl Command for MoveDown {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        write_relative(f, self.0, 'B')
    }

    ansi_only!();
}

impl Command for MoveRight {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        write_relative(f, self.0, 'C')
    }

    ansi_only!();
}

impl Command for MoveLeft {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        write_relative(f, self.0, 'D')
    }

    ansi_only!();
}

/// Ask the terminal to report the cursor position (DSR 6).
///
/// The reply arrives on the input stream; see [`cursor::position`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestCursorPosition;

impl Command for RequestCursorPosition {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        f.write_str("\x1b[6n")
    }

    ansi_only!();
}
