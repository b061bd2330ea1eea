//! The shared CRLF line-reading primitive.
//!
//! Every line-oriented part of the wire format (status line, header block,
//! chunk framing) reads through this one function, so the termination and
//! end-of-stream rules live in exactly one place.

use std::io::{self, Read};

use crate::protocol::ParseError;

/// Reads bytes one at a time until the two-byte sequence CR LF is seen and
/// returns the accumulated text with the trailing CR stripped.
///
/// Bytes map one-to-one onto chars (single-byte wire text); a bare LF without
/// a preceding CR is ordinary line content.
///
/// No upper bound is placed on the line length, matching the wire behaviour
/// this crate reproduces; a peer that never sends CRLF can grow the buffer
/// without limit.
///
/// # Errors
///
/// [`ParseError::TruncatedStream`] if the stream ends before a CR LF is found.
pub(crate) fn read_line<R: Read>(reader: &mut R) -> Result<String, ParseError> {
    let mut line: Vec<u8> = Vec::new();
    let mut byte = [0u8; 1];
    loop {
        match reader.read(&mut byte) {
            Ok(0) => return Err(ParseError::TruncatedStream),
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(ParseError::Io { source: e }),
        }

        if byte[0] == b'\n' && line.last() == Some(&b'\r') {
            line.pop();
            return Ok(line.into_iter().map(char::from).collect());
        }

        line.push(byte[0]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_up_to_crlf() {
        let mut stream = &b"200 OK\r\nrest"[..];
        assert_eq!(read_line(&mut stream).unwrap(), "200 OK");
        assert_eq!(stream, b"rest");
    }

    #[test]
    fn empty_line() {
        let mut stream = &b"\r\n"[..];
        assert_eq!(read_line(&mut stream).unwrap(), "");
    }

    #[test]
    fn bare_lf_is_content() {
        let mut stream = &b"a\nb\r\n"[..];
        assert_eq!(read_line(&mut stream).unwrap(), "a\nb");
    }

    #[test]
    fn bare_cr_is_content() {
        let mut stream = &b"a\rb\r\n"[..];
        assert_eq!(read_line(&mut stream).unwrap(), "a\rb");
    }

    #[test]
    fn eof_before_crlf_is_truncated() {
        let mut stream = &b"no terminator"[..];
        let err = read_line(&mut stream).unwrap_err();
        assert!(matches!(err, ParseError::TruncatedStream));
    }

    #[test]
    fn eof_after_cr_is_truncated() {
        let mut stream = &b"half\r"[..];
        let err = read_line(&mut stream).unwrap_err();
        assert!(matches!(err, ParseError::TruncatedStream));
    }
}
