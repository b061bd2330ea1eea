use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("receive error: {source}")]
    ReceiveError {
        #[from]
        source: ParseError,
    },

    #[error("request error: {source}")]
    RequestError {
        #[from]
        source: SendError,
    },
}

/// Errors raised while parsing a response from the wire.
///
/// Every variant is fatal to the current exchange: no component catches and
/// downgrades an error from a lower layer, so whatever fails first surfaces
/// unchanged at the top-level parse entry point.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("stream ended before the message was complete")]
    TruncatedStream,

    #[error("header line without ': ' separator: {line:?}")]
    MalformedHeader { line: String },

    #[error("required header {name:?} is absent")]
    MissingHeader { name: String },

    #[error("header {name} has non-integer value {text:?}")]
    InvalidHeaderValue { name: String, text: String },

    #[error("chunk size line is not valid hex: {text:?}")]
    InvalidChunkLength { text: String },

    #[error("chunk data not followed by an empty line: {text:?}")]
    ChunkFraming { text: String },

    #[error("unsupported transfer encoding: {encoding}")]
    UnsupportedTransferEncoding { encoding: String },

    #[error("unsupported content encoding: {encoding}")]
    UnsupportedContentEncoding { encoding: String },

    #[error("missing {separator:?} separator in {text:?}")]
    MissingSeparator { separator: char, text: String },

    #[error("invalid {encoding} data: {source}")]
    InvalidEncodedData { encoding: String, source: io::Error },

    #[error("io error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

impl ParseError {
    pub fn malformed_header<S: ToString>(line: S) -> Self {
        Self::MalformedHeader { line: line.to_string() }
    }

    pub fn missing_header<S: ToString>(name: S) -> Self {
        Self::MissingHeader { name: name.to_string() }
    }

    pub fn invalid_header_value<S1: ToString, S2: ToString>(name: S1, text: S2) -> Self {
        Self::InvalidHeaderValue { name: name.to_string(), text: text.to_string() }
    }

    pub fn invalid_chunk_length<S: ToString>(text: S) -> Self {
        Self::InvalidChunkLength { text: text.to_string() }
    }

    pub fn chunk_framing<S: ToString>(text: S) -> Self {
        Self::ChunkFraming { text: text.to_string() }
    }

    pub fn unsupported_transfer_encoding<S: ToString>(encoding: S) -> Self {
        Self::UnsupportedTransferEncoding { encoding: encoding.to_string() }
    }

    pub fn unsupported_content_encoding<S: ToString>(encoding: S) -> Self {
        Self::UnsupportedContentEncoding { encoding: encoding.to_string() }
    }

    pub fn missing_separator<S: ToString>(separator: char, text: S) -> Self {
        Self::MissingSeparator { separator, text: text.to_string() }
    }

    pub fn invalid_encoded_data<S: ToString>(encoding: S, source: io::Error) -> Self {
        Self::InvalidEncodedData { encoding: encoding.to_string(), source }
    }

    /// Maps a read failure, folding `UnexpectedEof` into [`ParseError::TruncatedStream`]
    /// so short reads and missing delimiters report the same way.
    pub fn from_read(e: io::Error) -> Self {
        if e.kind() == io::ErrorKind::UnexpectedEof { Self::TruncatedStream } else { Self::Io { source: e } }
    }
}

/// Errors raised while serializing a request onto the wire.
#[derive(Error, Debug)]
pub enum SendError {
    #[error("character {ch:?} does not fit in a single byte")]
    WideCharacter { ch: char },

    #[error("io error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

impl SendError {
    pub fn wide_character(ch: char) -> Self {
        Self::WideCharacter { ch }
    }
}
