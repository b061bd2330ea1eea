//! Content decoding capabilities.
//!
//! Content encodings are whole-body transformations applied after transfer
//! decoding. Each named encoding maps to a [`ContentCodec`] that consumes the
//! complete compressed buffer and returns the fully inflated bytes. The
//! mapping lives in a [`ContentCodecs`] registry so tests can swap in doubles
//! that simulate codec failures without real compressed fixtures.
//!
//! The legacy `compress` codec (LZW) is deliberately absent, a non-goal
//! carried over from the patent history around that format.

use std::fmt;
use std::io::{self, Read};

/// A whole-buffer decompression capability for one content encoding.
///
/// Implementations are stateless per invocation: `decode` must consume the
/// entire input and either return the complete inflated bytes or fail.
pub trait ContentCodec {
    /// Inflates a complete compressed buffer.
    ///
    /// # Errors
    ///
    /// An [`io::Error`] if the input is not valid for this codec.
    fn decode(&self, input: &[u8]) -> io::Result<Vec<u8>>;
}

/// DEFLATE (RFC 1951), the `deflate` content encoding.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeflateCodec;

impl ContentCodec for DeflateCodec {
    fn decode(&self, input: &[u8]) -> io::Result<Vec<u8>> {
        let mut output = Vec::new();
        flate2::read::DeflateDecoder::new(input).read_to_end(&mut output)?;
        Ok(output)
    }
}

/// gzip (RFC 1952), the `gzip` content encoding.
#[derive(Debug, Clone, Copy, Default)]
pub struct GzipCodec;

impl ContentCodec for GzipCodec {
    fn decode(&self, input: &[u8]) -> io::Result<Vec<u8>> {
        let mut output = Vec::new();
        flate2::read::GzDecoder::new(input).read_to_end(&mut output)?;
        Ok(output)
    }
}

/// Brotli (RFC 7932), the `br` content encoding.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrotliCodec;

impl ContentCodec for BrotliCodec {
    fn decode(&self, input: &[u8]) -> io::Result<Vec<u8>> {
        let mut output = Vec::new();
        brotli::Decompressor::new(input, 4096).read_to_end(&mut output)?;
        Ok(output)
    }
}

/// Registry mapping content-encoding names to their codecs.
///
/// Lookup is by exact name. The `identity` encoding never reaches the
/// registry; the payload decoder short-circuits it.
pub struct ContentCodecs {
    codecs: Vec<(String, Box<dyn ContentCodec>)>,
}

impl ContentCodecs {
    /// The standard set: `deflate`, `gzip` and `br`.
    pub fn standard() -> Self {
        let mut codecs = Self::empty();
        codecs.insert("deflate", Box::new(DeflateCodec));
        codecs.insert("gzip", Box::new(GzipCodec));
        codecs.insert("br", Box::new(BrotliCodec));
        codecs
    }

    pub fn empty() -> Self {
        Self { codecs: Vec::new() }
    }

    /// Registers a codec under `name`, replacing any existing entry.
    pub fn insert(&mut self, name: impl Into<String>, codec: Box<dyn ContentCodec>) {
        let name = name.into();
        self.codecs.retain(|(existing, _)| *existing != name);
        self.codecs.push((name, codec));
    }

    pub fn get(&self, name: &str) -> Option<&dyn ContentCodec> {
        self.codecs.iter().find(|(existing, _)| existing == name).map(|(_, codec)| codec.as_ref())
    }
}

impl Default for ContentCodecs {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for ContentCodecs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.codecs.iter().map(|(name, _)| name)).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn deflate_round_trip() {
        let mut encoder = flate2::write::DeflateEncoder::new(Vec::new(), flate2::Compression::default());
        encoder.write_all(b"hello").unwrap();
        let compressed = encoder.finish().unwrap();

        let inflated = DeflateCodec.decode(&compressed).unwrap();
        assert_eq!(inflated, b"hello");
    }

    #[test]
    fn gzip_round_trip() {
        let mut encoder = flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
        encoder.write_all(b"hello").unwrap();
        let compressed = encoder.finish().unwrap();

        let inflated = GzipCodec.decode(&compressed).unwrap();
        assert_eq!(inflated, b"hello");
    }

    #[test]
    fn brotli_round_trip() {
        let mut compressed = Vec::new();
        {
            let mut encoder = brotli::CompressorWriter::new(&mut compressed, 4096, 5, 22);
            encoder.write_all(b"hello").unwrap();
        }

        let inflated = BrotliCodec.decode(&compressed).unwrap();
        assert_eq!(inflated, b"hello");
    }

    #[test]
    fn gzip_rejects_garbage() {
        assert!(GzipCodec.decode(b"not gzip at all").is_err());
    }

    #[test]
    fn registry_lookup_and_override() {
        let codecs = ContentCodecs::standard();
        assert!(codecs.get("deflate").is_some());
        assert!(codecs.get("gzip").is_some());
        assert!(codecs.get("br").is_some());
        assert!(codecs.get("compress").is_none());

        let mut codecs = ContentCodecs::empty();
        codecs.insert("gzip", Box::new(DeflateCodec));
        codecs.insert("gzip", Box::new(GzipCodec));
        assert!(codecs.get("gzip").is_some());
        assert!(codecs.get("deflate").is_none());
    }
}
