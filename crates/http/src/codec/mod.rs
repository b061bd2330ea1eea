//! Wire codec for HTTP/1.1 messages.
//!
//! This module turns raw stream bytes into the structured types of
//! [`protocol`](crate::protocol) and back:
//!
//! - a shared CRLF line-reading primitive used by every line-oriented part
//! - header block decoding and encoding
//! - [`body`]: transfer decoding (identity/chunked) and the payload pipeline
//! - [`content`]: named decompression capabilities (deflate/gzip/br)
//!
//! All operations are synchronous and pull bytes from a caller-supplied
//! blocking stream; none of them retains the stream past the call.

pub mod body;
pub mod content;
mod header;
mod line_reader;

pub use body::{ChunkedDecoder, LengthDecoder, PayloadDecoder};
pub use content::{ContentCodec, ContentCodecs};

pub(crate) use header::{decode_headers, encode_headers, pack_text};
pub(crate) use line_reader::read_line;
