//! Raw mode lifecycle against a termios-shaped fake terminal.
//!
//! The fake stores real `libc::termios` values and uses the same raw-mode
//! transformation as the tty backend, so restores can be compared field for
//! field with what was captured.

#![cfg(unix)]

use std::cell::RefCell;
use std::fs::File;
use std::os::unix::io::AsRawFd;
use std::rc::Rc;

use spark_term::terminal::{
    AttributeBackend, RawConfig, RawSession, TtyBackend, is_tty, raw_attributes,
};
use spark_term::{Error, Result};

#[derive(Clone)]
struct FakeTty {
    attrs: Rc<RefCell<libc::termios>>,
    writes: Rc<RefCell<usize>>,
}

impl FakeTty {
    fn new() -> Self {
        let mut t: libc::termios = unsafe { std::mem::zeroed() };
        t.c_iflag = libc::ICRNL | libc::IXON;
        t.c_oflag = libc::OPOST;
        t.c_lflag = libc::ECHO | libc::ICANON | libc::ISIG;
        t.c_cflag = libc::CS8 | libc::CREAD;
        t.c_cc[libc::VMIN] = 1;
        t.c_cc[libc::VINTR] = 3;
        Self {
            attrs: Rc::new(RefCell::new(t)),
            writes: Rc::new(RefCell::new(0)),
        }
    }

    fn current(&self) -> libc::termios {
        *self.attrs.borrow()
    }
}

impl AttributeBackend for FakeTty {
    type Attributes = libc::termios;

    fn get_attributes(&mut self) -> Result<libc::termios> {
        Ok(self.current())
    }

    fn set_attributes(&mut self, attrs: &libc::termios) -> Result<()> {
        *self.attrs.borrow_mut() = *attrs;
        *self.writes.borrow_mut() += 1;
        Ok(())
    }

    fn make_raw(&self, attrs: &libc::termios, config: &RawConfig) -> libc::termios {
        raw_attributes(attrs, config)
    }
}

#[test]
fn enable_then_disable_restores_identical_attributes() {
    let tty = FakeTty::new();
    let before = tty.current();

    let session = RawSession::enable(tty.clone(), RawConfig::polling(300).unwrap()).unwrap();
    let raw = tty.current();
    assert_ne!(raw, before);
    assert_eq!(raw.c_lflag & libc::ICANON, 0);
    assert_eq!(raw.c_cc[libc::VMIN], 0);
    assert_eq!(raw.c_cc[libc::VTIME], 3);
    assert_eq!(session.original_attributes(), &before);

    session.disable().unwrap();
    assert_eq!(tty.current(), before);
    assert_eq!(*tty.writes.borrow(), 2);
}

#[test]
fn early_return_restores() {
    fn work(tty: FakeTty) -> Result<()> {
        let _session = RawSession::enable(tty, RawConfig::blocking())?;
        RawConfig::polling(30_000)?;
        Ok(())
    }

    let tty = FakeTty::new();
    let before = tty.current();
    assert!(matches!(work(tty.clone()), Err(Error::InvalidTimeout(30_000))));
    assert_eq!(tty.current(), before);
}

#[test]
fn sessions_are_independent() {
    let first = FakeTty::new();
    let second = FakeTty::new();

    let a = RawSession::enable(first.clone(), RawConfig::blocking()).unwrap();
    let b = RawSession::enable(second.clone(), RawConfig::polling(100).unwrap()).unwrap();
    assert_eq!(a.config().vmin(), 1);
    assert_eq!(b.config().vtime(), 1);

    drop(b);
    assert_eq!(second.current().c_lflag & libc::ICANON, libc::ICANON);
    assert_eq!(first.current().c_lflag & libc::ICANON, 0);
    a.disable().unwrap();
    assert_eq!(first.current().c_lflag & libc::ICANON, libc::ICANON);
}

#[test]
fn non_tty_descriptor_fails_to_enable() {
    let null = File::open("/dev/null").unwrap();
    let fd = null.as_raw_fd();
    assert!(!is_tty(fd));

    let result = RawSession::enable(TtyBackend::from_fd(fd), RawConfig::blocking());
    assert!(matches!(result, Err(Error::Os { op: "tcgetattr", .. })));
}
