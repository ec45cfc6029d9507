//! Key echo - prints every decoded key until `q` is pressed.
//!
//! Run with: RUST_LOG=spark_term=trace cargo run --example key_echo

use std::io::{self, Write};

use crossterm::queue;
use spark_term::ansi::{DisableBracketedPaste, EnableBracketedPaste, MoveTo, cursor};
use spark_term::{Event, EventReader, KeyCode, RawConfig, enable_raw_mode, window_size};
use tracing_subscriber::EnvFilter;

fn main() -> spark_term::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let size = window_size()?;
    let session = enable_raw_mode(RawConfig::polling(500)?)?;
    let mut out = io::stdout();

    queue!(out, EnableBracketedPaste, MoveTo(0, 0))?;
    write!(out, "{}x{} terminal, press q to quit\r\n", size.cols, size.rows)?;
    out.flush()?;

    let (x, y) = cursor::position_stdio()?;
    write!(out, "cursor at {},{}\r\n", x, y)?;

    let mut reader = EventReader::stdin();
    loop {
        let Some(event) = reader.read()? else {
            continue;
        };
        match event {
            Event::Key(key) => {
                write!(out, "{:?} {:?}\r\n", key.code, key.modifiers)?;
                out.flush()?;
                if key.code == KeyCode::Char(b'q') {
                    break;
                }
            }
            _ => {}
        }
    }

    queue!(out, DisableBracketedPaste)?;
    out.flush()?;
    session.disable()
}
