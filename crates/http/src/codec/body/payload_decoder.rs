//! The two-stage payload decoder.
//!
//! Decoding a payload runs in up to two passes over the stream position that
//! follows the header block:
//!
//! 1. **Transfer decoding** pulls the framed bytes off the wire: `identity`
//!    reads exactly `Content-Length` bytes, `chunked` reassembles the chunk
//!    sequence. The transfer layer accepts nothing else; compression names in
//!    `Transfer-Encoding` are rejected rather than decoded in place.
//! 2. **Content decoding** then optionally inflates the transfer-decoded
//!    buffer through the codec named by `Content-Encoding`.
//!
//! With only `Content-Encoding` present, identity transfer decoding runs
//! first; with neither header, identity decoding alone produces the body.

use std::io::Read;

use bytes::Bytes;
use tracing::trace;

use crate::codec::body::{ChunkedDecoder, LengthDecoder};
use crate::codec::content::ContentCodecs;
use crate::protocol::{Body, HeaderList, ParseError};

const TRANSFER_ENCODING: &str = "Transfer-Encoding";
const CONTENT_ENCODING: &str = "Content-Encoding";
const CONTENT_LENGTH: &str = "Content-Length";

const IDENTITY: &str = "identity";
const CHUNKED: &str = "chunked";

/// Decodes a message payload into a [`Body`], driven by the header block.
#[derive(Debug)]
pub struct PayloadDecoder<'a> {
    codecs: &'a ContentCodecs,
}

impl<'a> PayloadDecoder<'a> {
    pub fn new(codecs: &'a ContentCodecs) -> Self {
        Self { codecs }
    }

    /// Runs both decoding stages against a stream positioned right after the
    /// header block.
    ///
    /// # Errors
    ///
    /// Errors from the framing and codec layers propagate unchanged; see
    /// [`ParseError`].
    pub fn decode<R: Read>(&self, headers: &HeaderList, reader: &mut R) -> Result<Body, ParseError> {
        let bytes = match (headers.value(TRANSFER_ENCODING), headers.value(CONTENT_ENCODING)) {
            (Some(transfer), content) => {
                let raw = self.transfer_decode(headers, transfer, reader)?;
                match content {
                    Some(content) => self.content_decode(content, raw)?,
                    None => raw,
                }
            }
            (None, Some(content)) => {
                let raw = self.transfer_decode(headers, IDENTITY, reader)?;
                self.content_decode(content, raw)?
            }
            (None, None) => self.transfer_decode(headers, IDENTITY, reader)?,
        };

        Ok(Body::new(bytes))
    }

    /// First pass: pulls the framed payload bytes off the stream.
    fn transfer_decode<R: Read>(
        &self,
        headers: &HeaderList,
        encoding: &str,
        reader: &mut R,
    ) -> Result<Bytes, ParseError> {
        match encoding {
            IDENTITY => {
                let length = headers.require_usize(CONTENT_LENGTH)?;
                LengthDecoder::new(length).decode(reader)
            }
            CHUNKED => ChunkedDecoder.decode(reader),
            other => Err(ParseError::unsupported_transfer_encoding(other)),
        }
    }

    /// Second pass: inflates the transfer-decoded buffer.
    fn content_decode(&self, encoding: &str, input: Bytes) -> Result<Bytes, ParseError> {
        if encoding == IDENTITY {
            return Ok(input);
        }

        let codec = self.codecs.get(encoding).ok_or_else(|| ParseError::unsupported_content_encoding(encoding))?;
        let inflated = codec.decode(&input).map_err(|e| ParseError::invalid_encoded_data(encoding, e))?;
        trace!(encoding, compressed = input.len(), inflated = inflated.len(), "content-decoded payload");
        Ok(Bytes::from(inflated))
    }
}
