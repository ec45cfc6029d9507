//! Raw mode sessions.
//!
//! [`RawSession::enable`] captures the current terminal attributes, switches
//! the terminal to raw mode and hands back a session that owns the captured
//! attributes. The terminal returns to its previous state when the session is
//! disabled or dropped, whichever comes first.
//!
//! Attribute access goes through [`AttributeBackend`], so the lifecycle can be
//! driven against an in-memory terminal as well as a real tty.

use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Largest polling timeout: VTIME is one byte of tenths of a second.
pub const MAX_TIMEOUT_MS: u32 = 25_500;

// =============================================================================
// Config
// =============================================================================

/// How reads behave while the session is active.
///
/// - blocking: VMIN=1, VTIME=0. A read waits for at least one byte.
/// - polling: VMIN=0, VTIME=timeout/100. A read returns 0 bytes once the
///   timeout expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawConfig {
    blocking: bool,
    timeout_ms: u32,
}

impl RawConfig {
    /// Validate and build a config. Timeouts above [`MAX_TIMEOUT_MS`] are
    /// rejected, not clamped.
    pub fn new(blocking: bool, timeout_ms: u32) -> Result<Self> {
        if timeout_ms > MAX_TIMEOUT_MS {
            return Err(Error::InvalidTimeout(timeout_ms));
        }
        Ok(Self { blocking, timeout_ms })
    }

    /// Reads wait until a byte arrives.
    pub fn blocking() -> Self {
        Self {
            blocking: true,
            timeout_ms: 0,
        }
    }

    /// Reads give up after `timeout_ms`, rounded down to tenths of a second.
    pub fn polling(timeout_ms: u32) -> Result<Self> {
        Self::new(false, timeout_ms)
    }

    pub fn is_blocking(&self) -> bool {
        self.blocking
    }

    pub fn timeout_ms(&self) -> u32 {
        self.timeout_ms
    }

    /// Minimum bytes before a read returns.
    pub fn vmin(&self) -> u8 {
        if self.blocking { 1 } else { 0 }
    }

    /// Read timeout in tenths of a second.
    pub fn vtime(&self) -> u8 {
        if self.blocking {
            0
        } else {
            // timeout_ms <= 25500 is checked on construction.
            (self.timeout_ms / 100).min(u8::MAX as u32) as u8
        }
    }
}

impl Default for RawConfig {
    fn default() -> Self {
        Self::blocking()
    }
}

// =============================================================================
// Backend
// =============================================================================

/// Terminal attribute storage: a real tty or a stand-in.
pub trait AttributeBackend {
    /// Snapshot of every attribute the backend can restore.
    type Attributes: Clone;

    fn get_attributes(&mut self) -> Result<Self::Attributes>;

    /// Apply attributes, discarding pending input.
    fn set_attributes(&mut self, attrs: &Self::Attributes) -> Result<()>;

    /// Raw-mode version of `attrs` for `config`.
    fn make_raw(&self, attrs: &Self::Attributes, config: &RawConfig) -> Self::Attributes;
}

// =============================================================================
// Session
// =============================================================================

/// An active raw-mode session.
///
/// Holding one means the terminal is in raw mode. `disable` consumes it, so a
/// terminal cannot be restored twice or restored without being captured.
pub struct RawSession<B: AttributeBackend> {
    backend: B,
    original: B::Attributes,
    config: RawConfig,
    active: bool,
}

impl<B: AttributeBackend> RawSession<B> {
    /// Capture the current attributes, then switch to raw mode.
    pub fn enable(mut backend: B, config: RawConfig) -> Result<Self> {
        let original = backend.get_attributes()?;
        let raw = backend.make_raw(&original, &config);
        backend.set_attributes(&raw)?;

        debug!(
            vmin = config.vmin(),
            vtime = config.vtime(),
            "raw mode enabled"
        );

        Ok(Self {
            backend,
            original,
            config,
            active: true,
        })
    }

    /// Restore the captured attributes and end the session.
    pub fn disable(mut self) -> Result<()> {
        self.restore()
    }

    pub fn config(&self) -> RawConfig {
        self.config
    }

    /// Attributes captured before raw mode was applied.
    pub fn original_attributes(&self) -> &B::Attributes {
        &self.original
    }

    fn restore(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        // Cleared first so a failed restore is not attempted again on drop.
        self.active = false;
        self.backend.set_attributes(&self.original)?;
        debug!("raw mode disabled");
        Ok(())
    }
}

impl<B: AttributeBackend> Drop for RawSession<B> {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            warn!(error = %err, "failed to restore terminal attributes");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Attrs {
        canonical: bool,
        echo: bool,
        vmin: u8,
        vtime: u8,
        speed: u32,
    }

    const COOKED: Attrs = Attrs {
        canonical: true,
        echo: true,
        vmin: 1,
        vtime: 0,
        speed: 38_400,
    };

    /// In-memory terminal; the state is shared so tests can inspect it
    /// after the session has taken ownership of the backend.
    #[derive(Clone)]
    struct MemoryTerminal {
        attrs: Rc<RefCell<Attrs>>,
        fail_set: bool,
    }

    impl MemoryTerminal {
        fn new() -> Self {
            Self {
                attrs: Rc::new(RefCell::new(COOKED)),
                fail_set: false,
            }
        }

        fn current(&self) -> Attrs {
            self.attrs.borrow().clone()
        }
    }

    impl AttributeBackend for MemoryTerminal {
        type Attributes = Attrs;

        fn get_attributes(&mut self) -> Result<Attrs> {
            Ok(self.current())
        }

        fn set_attributes(&mut self, attrs: &Attrs) -> Result<()> {
            if self.fail_set {
                return Err(Error::Os {
                    op: "tcsetattr",
                    source: std::io::Error::from_raw_os_error(25),
                });
            }
            *self.attrs.borrow_mut() = attrs.clone();
            Ok(())
        }

        fn make_raw(&self, attrs: &Attrs, config: &RawConfig) -> Attrs {
            Attrs {
                canonical: false,
                echo: false,
                vmin: config.vmin(),
                vtime: config.vtime(),
                ..attrs.clone()
            }
        }
    }

    #[test]
    fn test_blocking_config() {
        let config = RawConfig::blocking();
        assert!(config.is_blocking());
        assert_eq!(config.vmin(), 1);
        assert_eq!(config.vtime(), 0);
        assert_eq!(RawConfig::default(), config);
    }

    #[test]
    fn test_polling_config() {
        let config = RawConfig::polling(1_250).unwrap();
        assert!(!config.is_blocking());
        assert_eq!(config.vmin(), 0);
        assert_eq!(config.vtime(), 12);
    }

    #[test]
    fn test_timeout_boundary() {
        let config = RawConfig::polling(MAX_TIMEOUT_MS).unwrap();
        assert_eq!(config.vtime(), 255);

        let err = RawConfig::polling(25_600).unwrap_err();
        assert!(matches!(err, Error::InvalidTimeout(25_600)));
        assert!(RawConfig::new(true, 25_501).is_err());
    }

    #[test]
    fn test_enable_applies_raw() {
        let term = MemoryTerminal::new();
        let session = RawSession::enable(term.clone(), RawConfig::polling(500).unwrap()).unwrap();

        let raw = term.current();
        assert!(!raw.canonical);
        assert!(!raw.echo);
        assert_eq!((raw.vmin, raw.vtime), (0, 5));
        assert_eq!(session.original_attributes(), &COOKED);
    }

    #[test]
    fn test_disable_restores() {
        let term = MemoryTerminal::new();
        let session = RawSession::enable(term.clone(), RawConfig::blocking()).unwrap();
        assert_ne!(term.current(), COOKED);

        session.disable().unwrap();
        assert_eq!(term.current(), COOKED);
    }

    #[test]
    fn test_drop_restores() {
        let term = MemoryTerminal::new();
        {
            let _session = RawSession::enable(term.clone(), RawConfig::blocking()).unwrap();
            assert!(!term.current().canonical);
        }
        assert_eq!(term.current(), COOKED);
    }

    #[test]
    fn test_failed_enable_leaves_terminal_alone() {
        let mut term = MemoryTerminal::new();
        term.fail_set = true;
        let result = RawSession::enable(term.clone(), RawConfig::blocking());
        assert!(matches!(result, Err(Error::Os { op: "tcsetattr", .. })));
        assert_eq!(term.current(), COOKED);
    }

    #[test]
    fn test_failed_restore_is_reported_once() {
        let term = MemoryTerminal::new();
        let mut session = RawSession::enable(term.clone(), RawConfig::blocking()).unwrap();
        session.backend.fail_set = true;
        assert!(session.disable().is_err());
    }
}
