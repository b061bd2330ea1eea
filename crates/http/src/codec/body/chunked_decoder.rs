//! Decoder for chunked transfer encoding.
//!
//! A chunked payload is a sequence of length-prefixed segments: each chunk is
//! a hex size on its own line, the data bytes, and a CRLF immediately after
//! the data. A zero-sized chunk terminates the sequence. Trailer fields after
//! the final chunk are not supported; the line following the zero chunk must
//! be empty like every other chunk suffix.

use std::io::Read;

use bytes::{Bytes, BytesMut};
use tracing::trace;

use crate::codec::body::LengthDecoder;
use crate::codec::line_reader::read_line;
use crate::ensure;
use crate::protocol::ParseError;

/// Reads a chunked payload and returns the concatenation of all chunk data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkedDecoder;

impl ChunkedDecoder {
    /// Decodes the full chunk sequence, consuming the terminating zero chunk
    /// and its trailing CRLF.
    ///
    /// # Errors
    ///
    /// - [`ParseError::InvalidChunkLength`] if a size line is not valid hex
    /// - [`ParseError::ChunkFraming`] if chunk data is not followed by an
    ///   empty line
    /// - [`ParseError::TruncatedStream`] if the stream ends mid-sequence
    pub fn decode<R: Read>(&self, reader: &mut R) -> Result<Bytes, ParseError> {
        let mut payload = BytesMut::new();
        loop {
            let length = read_chunk_size(reader)?;
            let chunk = LengthDecoder::new(length).decode(reader)?;

            let suffix = read_line(reader)?;
            ensure!(suffix.is_empty(), ParseError::chunk_framing(suffix));

            if length == 0 {
                trace!(total = payload.len(), "finished reading chunked payload");
                return Ok(payload.freeze());
            }

            trace!(len = length, "read chunk");
            payload.extend_from_slice(&chunk);
        }
    }
}

/// Reads one chunk-size line and parses it as a hexadecimal integer.
fn read_chunk_size<R: Read>(reader: &mut R) -> Result<usize, ParseError> {
    let line = read_line(reader)?;
    if line.is_empty() || !line.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ParseError::invalid_chunk_length(line));
    }
    usize::from_str_radix(&line, 16).ok().ok_or_else(|| ParseError::invalid_chunk_length(&line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_chunks_up_to_zero_chunk() {
        let mut stream = &b"4\r\nWiki\r\n0\r\n\r\n"[..];
        let bytes = ChunkedDecoder.decode(&mut stream).unwrap();
        assert_eq!(&bytes[..], b"Wiki");
        assert!(stream.is_empty());
    }

    #[test]
    fn concatenates_multiple_chunks() {
        let mut stream = &b"5\r\nhello\r\n7\r\n, world\r\n0\r\n\r\n"[..];
        let bytes = ChunkedDecoder.decode(&mut stream).unwrap();
        assert_eq!(&bytes[..], b"hello, world");
    }

    #[test]
    fn hex_sizes_accept_both_cases() {
        let mut stream = &b"A\r\n0123456789\r\na\r\nabcdefghij\r\n0\r\n\r\n"[..];
        let bytes = ChunkedDecoder.decode(&mut stream).unwrap();
        assert_eq!(&bytes[..], b"0123456789abcdefghij");
    }

    #[test]
    fn stops_exactly_at_zero_chunk() {
        let mut stream = &b"2\r\nhi\r\n0\r\n\r\ntrailing bytes"[..];
        let bytes = ChunkedDecoder.decode(&mut stream).unwrap();
        assert_eq!(&bytes[..], b"hi");
        assert_eq!(stream, b"trailing bytes");
    }

    #[test]
    fn empty_payload() {
        let mut stream = &b"0\r\n\r\n"[..];
        let bytes = ChunkedDecoder.decode(&mut stream).unwrap();
        assert!(bytes.is_empty());
    }

    #[test]
    fn invalid_hex_size_line() {
        let mut stream = &b"G\r\n"[..];
        let err = ChunkedDecoder.decode(&mut stream).unwrap_err();
        assert!(matches!(err, ParseError::InvalidChunkLength { text } if text == "G"));
    }

    #[test]
    fn empty_size_line_is_invalid() {
        let mut stream = &b"\r\n"[..];
        let err = ChunkedDecoder.decode(&mut stream).unwrap_err();
        assert!(matches!(err, ParseError::InvalidChunkLength { .. }));
    }

    #[test]
    fn signed_size_line_is_invalid() {
        let mut stream = &b"+5\r\nhello\r\n0\r\n\r\n"[..];
        let err = ChunkedDecoder.decode(&mut stream).unwrap_err();
        assert!(matches!(err, ParseError::InvalidChunkLength { .. }));
    }

    #[test]
    fn chunk_not_followed_by_empty_line() {
        let mut stream = &b"4\r\nWikiextra\r\n0\r\n\r\n"[..];
        let err = ChunkedDecoder.decode(&mut stream).unwrap_err();
        assert!(matches!(err, ParseError::ChunkFraming { text } if text == "extra"));
    }

    #[test]
    fn truncated_mid_chunk() {
        let mut stream = &b"5\r\nhel"[..];
        let err = ChunkedDecoder.decode(&mut stream).unwrap_err();
        assert!(matches!(err, ParseError::TruncatedStream));
    }

    #[test]
    fn truncated_after_last_chunk() {
        let mut stream = &b"4\r\nWiki\r\n0\r\n"[..];
        let err = ChunkedDecoder.decode(&mut stream).unwrap_err();
        assert!(matches!(err, ParseError::TruncatedStream));
    }
}
