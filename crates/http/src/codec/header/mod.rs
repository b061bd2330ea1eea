//! Wire codec for header blocks.

mod header_decoder;
mod header_encoder;

pub(crate) use header_decoder::decode_headers;
pub(crate) use header_encoder::{encode_headers, pack_text};
