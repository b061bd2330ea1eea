//! A synchronous HTTP/1.1 message framing and decoding engine
//!
//! This crate turns a raw byte stream (already connected, already
//! TLS-terminated if needed) into structured response messages, and turns
//! structured requests back into wire bytes. It processes exactly one
//! request/response exchange per invocation over a caller-supplied stream:
//! there is no connection pool, no keep-alive and no background work, just a
//! linear parse driven by blocking reads.
//!
//! # Features
//!
//! - HTTP/1.1 request serialization and response parsing
//! - Identity (Content-Length) and chunked transfer decoding
//! - deflate, gzip and brotli content decoding, with injectable codecs
//! - Ordered header model with first-match lookup and duplicate support
//! - Strict failure behaviour: malformed framing fails the whole exchange
//!
//! # Example
//!
//! ```
//! use mono_http::protocol::{HeaderField, HeaderList, RequestMessage, ResponseMessage};
//!
//! // Serialize a request onto any `Write` stream.
//! let headers: HeaderList = [
//!     HeaderField::new("Host", "example.com:80"),
//!     HeaderField::new("Accept-Encoding", "gzip, deflate, br"),
//! ]
//! .into_iter()
//! .collect();
//! let request = RequestMessage::get("/", headers);
//!
//! let mut wire = Vec::new();
//! request.write_to(&mut wire).unwrap();
//! assert!(wire.starts_with(b"GET / HTTP/1.1\r\n"));
//!
//! // Parse a response from any `Read` stream.
//! let mut stream = &b"200 OK\r\nContent-Length: 2\r\n\r\nhi"[..];
//! let response = ResponseMessage::parse(&mut stream).unwrap();
//! assert_eq!(response.status_line(), "200 OK");
//! assert_eq!(response.body().as_bytes(), b"hi");
//! ```
//!
//! # Architecture
//!
//! - [`protocol`]: the message model (headers, body, request, response) and
//!   the error taxonomy
//! - [`codec`]: the wire layer (line reading, header block codec, transfer
//!   decoders, content codecs)
//!
//! # Limitations
//!
//! - Wire text is single-byte (ASCII/Latin-1) encoded; serialization rejects
//!   characters above U+00FF rather than silently switching to UTF-8, so byte
//!   counts on the wire stay exact
//! - No trailer fields after the terminating zero-length chunk
//! - No keep-alive, pipelining, redirects, cookies or retries: one exchange
//!   per stream
//! - No cap on header or chunk-size line length; a peer that never sends
//!   CRLF can grow the line buffer without bound

pub mod codec;
pub mod protocol;

mod utils;
pub(crate) use utils::ensure;
