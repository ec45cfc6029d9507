//! Cursor position query (DSR 6 / CPR).
//!
//! Writes `ESC [ 6 n`, then blocks reading the input stream until the
//! terminal's `ESC [ row ; col R` reply arrives.
//!
//! This read goes straight to the input stream, not through
//! [`EventReader`](crate::input::EventReader). Keys typed while the query is
//! in flight are consumed with the reply, and a query issued while another
//! thread reads events can lose its reply to that reader.

use std::io::{self, Read, Write};

use crossterm::QueueableCommand;
use tracing::trace;

use super::RequestCursorPosition;
use crate::error::{Error, Result};

/// Longest reply accepted before giving up.
pub const MAX_RESPONSE_LEN: usize = 32;

/// Query the cursor position over the process stdin/stdout.
///
/// Stdin must be in raw mode, otherwise the reply waits for Enter.
pub fn position_stdio() -> Result<(u16, u16)> {
    position(&mut io::stdin().lock(), &mut io::stdout().lock())
}

/// Query the cursor position. Returns 0-indexed `(x, y)`, matching
/// [`MoveTo`](super::MoveTo).
pub fn position<R: Read, W: Write>(input: &mut R, output: &mut W) -> Result<(u16, u16)> {
    output.queue(RequestCursorPosition)?;
    output.flush()?;

    let response = read_response(input)?;
    trace!(response = ?String::from_utf8_lossy(&response), "cursor position reply");
    parse_response(&response)
}

/// Read byte by byte up to and including the `R` terminator.
fn read_response<R: Read>(input: &mut R) -> Result<Vec<u8>> {
    let mut response = Vec::with_capacity(MAX_RESPONSE_LEN);
    let mut byte = [0u8; 1];

    loop {
        if input.read(&mut byte)? == 0 {
            return Err(malformed("input closed before reply", &response));
        }
        response.push(byte[0]);
        if byte[0] == b'R' {
            return Ok(response);
        }
        if response.len() >= MAX_RESPONSE_LEN {
            return Err(malformed("reply too long", &response));
        }
    }
}

/// Parse `ESC [ row ; col R` into 0-indexed `(x, y)`.
///
/// Anything before the last ESC is input that arrived ahead of the reply and
/// is discarded.
pub fn parse_response(response: &[u8]) -> Result<(u16, u16)> {
    let start = response
        .iter()
        .rposition(|&b| b == 0x1b)
        .ok_or_else(|| malformed("missing ESC", response))?;

    let body = response[start + 1..]
        .strip_prefix(b"[")
        .ok_or_else(|| malformed("missing '['", response))?;
    let body = body
        .strip_suffix(b"R")
        .ok_or_else(|| malformed("missing 'R'", response))?;

    let split = body
        .iter()
        .position(|&b| b == b';')
        .ok_or_else(|| malformed("missing ';'", response))?;

    let row = parse_coordinate(&body[..split], response)?;
    let col = parse_coordinate(&body[split + 1..], response)?;

    Ok((col, row))
}

/// Parse a 1-indexed coordinate into a 0-indexed one. The wire value can be
/// one past `u16::MAX`, which is what `MoveTo(u16::MAX, _)` sends.
fn parse_coordinate(digits: &[u8], response: &[u8]) -> Result<u16> {
    if digits.is_empty() {
        return Err(malformed("empty coordinate", response));
    }
    let value = digits.iter().try_fold(0u32, |acc, &b| {
        if !b.is_ascii_digit() {
            return Err(malformed("invalid digit", response));
        }
        acc.checked_mul(10)
            .and_then(|n| n.checked_add(u32::from(b - b'0')))
            .ok_or_else(|| malformed("coordinate overflow", response))
    })?;
    u16::try_from(value.saturating_sub(1))
        .map_err(|_| malformed("coordinate overflow", response))
}

fn malformed(reason: &str, response: &[u8]) -> Error {
    Error::CursorResponse(format!(
        "{}: {:?}",
        reason,
        String::from_utf8_lossy(response)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_response() {
        assert_eq!(parse_response(b"\x1b[1;1R").unwrap(), (0, 0));
        assert_eq!(parse_response(b"\x1b[24;80R").unwrap(), (79, 23));
    }

    #[test]
    fn test_parse_top_of_range() {
        assert_eq!(parse_response(b"\x1b[65536;65536R").unwrap(), (u16::MAX, u16::MAX));
        assert!(parse_response(b"\x1b[65537;1R").is_err());
    }

    #[test]
    fn test_parse_skips_leading_input() {
        assert_eq!(parse_response(b"ab\x1b[3;7R").unwrap(), (6, 2));
    }

    #[test]
    fn test_parse_errors() {
        let cases: [&[u8]; 7] = [
            b"24;80R",
            b"\x1b24;80R",
            b"\x1b[2480R",
            b"\x1b[24;8xR",
            b"\x1b[;80R",
            b"\x1b[24;R",
            b"\x1b[99999;1R",
        ];
        for bad in cases {
            assert!(
                matches!(parse_response(bad), Err(Error::CursorResponse(_))),
                "{:?} should not parse",
                bad
            );
        }
    }

    #[test]
    fn test_position_writes_request() {
        let mut input = Cursor::new(b"\x1b[5;10R".to_vec());
        let mut output = Vec::new();
        assert_eq!(position(&mut input, &mut output).unwrap(), (9, 4));
        assert_eq!(output, b"\x1b[6n");
    }

    #[test]
    fn test_position_stops_at_terminator() {
        let mut input = Cursor::new(b"\x1b[2;2Rq".to_vec());
        let mut output = Vec::new();
        position(&mut input, &mut output).unwrap();
        assert_eq!(input.position(), 6);
    }

    #[test]
    fn test_position_eof() {
        let mut input = Cursor::new(b"\x1b[5;".to_vec());
        let mut output = Vec::new();
        assert!(matches!(
            position(&mut input, &mut output),
            Err(Error::CursorResponse(_))
        ));
    }

    #[test]
    fn test_position_reply_too_long() {
        let mut input = Cursor::new(vec![b'1'; 64]);
        let mut output = Vec::new();
        assert!(matches!(
            position(&mut input, &mut output),
            Err(Error::CursorResponse(_))
        ));
        assert_eq!(input.position(), MAX_RESPONSE_LEN as u64);
    }
}
