//! The outgoing request message.

use std::io::Write;

use crate::codec;
use crate::protocol::{HeaderList, SendError};

/// A request message: method, path, protocol version and headers.
///
/// Constructed once and then serialized; there is no request body (the
/// GET-only shape this crate supports).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestMessage {
    version: String,
    method: String,
    path: String,
    headers: HeaderList,
}

impl RequestMessage {
    pub fn new(
        version: impl Into<String>,
        method: impl Into<String>,
        path: impl Into<String>,
        headers: HeaderList,
    ) -> Self {
        Self { version: version.into(), method: method.into(), path: path.into(), headers }
    }

    /// A `GET` request with protocol version `1.1`.
    pub fn get(path: impl Into<String>, headers: HeaderList) -> Self {
        Self::new("1.1", "GET", path, headers)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn headers(&self) -> &HeaderList {
        &self.headers
    }

    /// Serializes the request onto the stream: the request line
    /// `{method} {path} HTTP/{version}\r\n` followed by the header block.
    ///
    /// # Errors
    ///
    /// [`SendError::WideCharacter`] for text that does not fit in single-byte
    /// encoding, or [`SendError::Io`] if the stream write fails.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), SendError> {
        let line = codec::pack_text(&format!("{} {} HTTP/{}\r\n", self.method, self.path, self.version))?;
        writer.write_all(&line)?;
        self.headers.write_to(writer)
    }
}
