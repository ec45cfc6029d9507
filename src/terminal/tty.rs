//! OS terminal backend.
//!
//! Selected at compile time. Unix gets termios through `libc`; every other
//! target gets a backend whose constructor returns
//! [`Error::UnsupportedPlatform`](crate::Error::UnsupportedPlatform), so
//! callers can fall back instead of crashing.

pub use imp::TtyBackend;
#[cfg(unix)]
pub use imp::{is_tty, raw_attributes};

#[cfg(unix)]
mod imp {
    use std::io;
    use std::os::unix::io::{AsRawFd, RawFd};

    use crate::error::{Error, Result};
    use crate::terminal::raw_mode::{AttributeBackend, RawConfig};

    /// termios access on a file descriptor.
    #[derive(Debug, Clone, Copy)]
    pub struct TtyBackend {
        fd: RawFd,
    }

    impl TtyBackend {
        /// Backend on the process stdin.
        pub fn stdin() -> Result<Self> {
            Ok(Self::from_fd(io::stdin().as_raw_fd()))
        }

        /// Backend on an arbitrary descriptor. The descriptor is borrowed,
        /// not closed on drop.
        pub fn from_fd(fd: RawFd) -> Self {
            Self { fd }
        }
    }

    impl AttributeBackend for TtyBackend {
        type Attributes = libc::termios;

        fn get_attributes(&mut self) -> Result<libc::termios> {
            // SAFETY: termios is plain data; tcgetattr fills every field.
            let mut termios: libc::termios = unsafe { std::mem::zeroed() };
            // SAFETY: the pointer is to a live local; a bad fd is reported via errno.
            if unsafe { libc::tcgetattr(self.fd, &mut termios) } != 0 {
                return Err(Error::last_os("tcgetattr"));
            }
            Ok(termios)
        }

        fn set_attributes(&mut self, attrs: &libc::termios) -> Result<()> {
            // SAFETY: attrs is a valid reference for the duration of the call.
            if unsafe { libc::tcsetattr(self.fd, libc::TCSAFLUSH, attrs) } != 0 {
                return Err(Error::last_os("tcsetattr"));
            }
            Ok(())
        }

        fn make_raw(&self, attrs: &libc::termios, config: &RawConfig) -> libc::termios {
            raw_attributes(attrs, config)
        }
    }

    /// Raw-mode copy of `attrs`.
    ///
    /// 8-bit characters with the receiver on, no canonical mode, echo,
    /// signal keys or input/output translation. VMIN/VTIME come from `config`.
    pub fn raw_attributes(attrs: &libc::termios, config: &RawConfig) -> libc::termios {
        let mut raw = *attrs;
        raw.c_iflag &= !(libc::IGNBRK
            | libc::BRKINT
            | libc::PARMRK
            | libc::ISTRIP
            | libc::INLCR
            | libc::IGNCR
            | libc::ICRNL
            | libc::IXON);
        raw.c_oflag &= !libc::OPOST;
        raw.c_lflag &= !(libc::ECHO | libc::ECHONL | libc::ICANON | libc::ISIG | libc::IEXTEN);
        raw.c_cflag &= !(libc::CSIZE | libc::PARENB);
        raw.c_cflag |= libc::CS8 | libc::CREAD;
        raw.c_cc[libc::VMIN] = config.vmin();
        raw.c_cc[libc::VTIME] = config.vtime();
        raw
    }

    /// Whether `fd` refers to a terminal.
    pub fn is_tty(fd: RawFd) -> bool {
        // SAFETY: isatty only inspects the descriptor and reports EBADF for
        // an invalid one, so any integer is a valid argument.
        unsafe { libc::isatty(fd) == 1 }
    }
}

#[cfg(not(unix))]
mod imp {
    use crate::error::{Error, Result};
    use crate::terminal::raw_mode::{AttributeBackend, RawConfig};

    /// Placeholder backend; it cannot be constructed.
    #[derive(Debug, Clone, Copy)]
    pub struct TtyBackend {
        _private: (),
    }

    impl TtyBackend {
        pub fn stdin() -> Result<Self> {
            Err(Error::UnsupportedPlatform)
        }
    }

    impl AttributeBackend for TtyBackend {
        type Attributes = ();

        fn get_attributes(&mut self) -> Result<()> {
            Err(Error::UnsupportedPlatform)
        }

        fn set_attributes(&mut self, _attrs: &()) -> Result<()> {
            Err(Error::UnsupportedPlatform)
        }

        fn make_raw(&self, _attrs: &(), _config: &RawConfig) {}
    }
}
