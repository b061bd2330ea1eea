//! Wire codec for message payloads.
//!
//! The payload of a message is framed on the wire by the transfer encoding
//! (identity with a known length, or chunked) and may additionally be
//! compressed by a content encoding. [`PayloadDecoder`] runs both stages and
//! produces the fully decoded body.

mod chunked_decoder;
mod length_decoder;
mod payload_decoder;

pub use chunked_decoder::ChunkedDecoder;
pub use length_decoder::LengthDecoder;
pub use payload_decoder::PayloadDecoder;
