//! The incoming response message.

use std::io::Read;

use tracing::debug;

use crate::codec::{self, ContentCodecs, PayloadDecoder};
use crate::protocol::{Body, HeaderList, ParseError};

/// A fully parsed response: status line, header block and decoded body.
///
/// Produced by the single parsing entry point [`ResponseMessage::parse`] and
/// never mutated afterwards. The message owns all of its data; the stream it
/// was read from is not retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseMessage {
    status_line: String,
    headers: HeaderList,
    body: Body,
}

impl ResponseMessage {
    /// Parses one response from the stream using the standard content codecs.
    ///
    /// # Errors
    ///
    /// Failures from the status line read, header parse and payload decode
    /// propagate unchanged; a failed parse yields no partial message.
    pub fn parse<R: Read>(reader: &mut R) -> Result<Self, ParseError> {
        Self::parse_with(reader, &ContentCodecs::standard())
    }

    /// Parses one response using a caller-supplied codec registry.
    pub fn parse_with<R: Read>(reader: &mut R, codecs: &ContentCodecs) -> Result<Self, ParseError> {
        let status_line = codec::read_line(reader)?;
        debug!(status = %status_line, "read status line");

        let headers = HeaderList::parse(reader)?;
        let body = PayloadDecoder::new(codecs).decode(&headers, reader)?;

        Ok(Self { status_line, headers, body })
    }

    pub fn status_line(&self) -> &str {
        &self.status_line
    }

    pub fn headers(&self) -> &HeaderList {
        &self.headers
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn into_body(self) -> Body {
        self.body
    }
}
