//! Decoder for payloads with a known byte length.

use std::io::Read;

use bytes::Bytes;
use tracing::trace;

use crate::protocol::ParseError;

/// Reads exactly the number of bytes given by the Content-Length header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthDecoder {
    length: usize,
}

impl LengthDecoder {
    pub fn new(length: usize) -> Self {
        Self { length }
    }

    /// Reads exactly `length` bytes from the stream.
    ///
    /// A zero length reads nothing and yields an empty buffer.
    ///
    /// # Errors
    ///
    /// [`ParseError::TruncatedStream`] if the stream ends before the count is
    /// satisfied.
    pub fn decode<R: Read>(&self, reader: &mut R) -> Result<Bytes, ParseError> {
        if self.length == 0 {
            return Ok(Bytes::new());
        }

        let mut buf = vec![0u8; self.length];
        reader.read_exact(&mut buf).map_err(ParseError::from_read)?;
        trace!(len = self.length, "read length-bounded payload");
        Ok(Bytes::from(buf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_exact_count() {
        let mut stream = &b"hello rest"[..];
        let bytes = LengthDecoder::new(5).decode(&mut stream).unwrap();
        assert_eq!(&bytes[..], b"hello");
        assert_eq!(stream, b" rest");
    }

    #[test]
    fn exact_length_stream() {
        let mut stream = &b"hello"[..];
        let bytes = LengthDecoder::new(5).decode(&mut stream).unwrap();
        assert_eq!(&bytes[..], b"hello");
    }

    #[test]
    fn short_stream_is_truncated() {
        let mut stream = &b"hell"[..];
        let err = LengthDecoder::new(5).decode(&mut stream).unwrap_err();
        assert!(matches!(err, ParseError::TruncatedStream));
    }

    #[test]
    fn zero_length_reads_nothing() {
        let mut stream = &b"untouched"[..];
        let bytes = LengthDecoder::new(0).decode(&mut stream).unwrap();
        assert!(bytes.is_empty());
        assert_eq!(stream, b"untouched");
    }
}
