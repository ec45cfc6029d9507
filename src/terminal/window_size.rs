//! Terminal window size.

use crate::error::Result;

/// Terminal geometry at the time of the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowSize {
    pub cols: u16,
    pub rows: u16,
    /// Pixel width, 0 when the terminal does not report it.
    pub width_px: u16,
    /// Pixel height, 0 when the terminal does not report it.
    pub height_px: u16,
}

/// Size of the terminal on stdout.
pub fn window_size() -> Result<WindowSize> {
    #[cfg(unix)]
    {
        use std::os::unix::io::AsRawFd;
        window_size_of(std::io::stdout().as_raw_fd())
    }
    #[cfg(not(unix))]
    {
        Err(crate::error::Error::UnsupportedPlatform)
    }
}

/// Size of the terminal behind `fd` (`TIOCGWINSZ`).
#[cfg(unix)]
pub fn window_size_of(fd: std::os::unix::io::RawFd) -> Result<WindowSize> {
    use crate::error::Error;

    // SAFETY: winsize is plain data; the ioctl fills it on success.
    let mut ws: libc::winsize = unsafe { std::mem::zeroed() };
    if unsafe { libc::ioctl(fd, libc::TIOCGWINSZ, &mut ws) } != 0 {
        return Err(Error::last_os("ioctl(TIOCGWINSZ)"));
    }

    let size = WindowSize {
        cols: ws.ws_col,
        rows: ws.ws_row,
        width_px: ws.ws_xpixel,
        height_px: ws.ws_ypixel,
    };
    tracing::debug!(?size, "window size");
    Ok(size)
}
