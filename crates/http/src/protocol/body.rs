//! The decoded message body.

use std::fmt::{self, Write};
use std::ops::Index;

use bytes::{Buf, Bytes};

/// An immutable byte buffer holding the fully decoded message body.
///
/// The buffer is produced once by the payload decoder, after transfer and
/// content decoding have both run; consumers get read-only indexed access and
/// can open any number of independent sequential readers over the same bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Body {
    bytes: Bytes,
}

impl Body {
    pub(crate) fn new(bytes: Bytes) -> Self {
        Self { bytes }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Opens a fresh sequential reader over the body bytes.
    ///
    /// Each call yields an independent cursor starting at offset zero; reading
    /// never consumes the body itself.
    pub fn reader(&self) -> bytes::buf::Reader<Bytes> {
        self.bytes.clone().reader()
    }

    /// Renders the body as a hex/ASCII dump, 16 bytes per row.
    ///
    /// Each row shows the offset, the byte values in hex, and the printable
    /// ASCII rendering with `.` standing in for bytes outside `0x20..=0x7E`.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        // infallible: String's fmt::Write never errors
        self.write_dump(&mut out).unwrap();
        out
    }

    fn write_dump(&self, out: &mut impl Write) -> fmt::Result {
        const ROW: usize = 16;
        for (row, chunk) in self.bytes.chunks(ROW).enumerate() {
            write!(out, "{:04X} : ", row * ROW)?;
            for column in 0..ROW {
                if column != 0 {
                    out.write_char(' ')?;
                }
                match chunk.get(column) {
                    Some(byte) => write!(out, "{byte:02X}")?,
                    None => out.write_str("  ")?,
                }
            }
            out.write_str(" - ")?;
            for column in 0..ROW {
                if column != 0 {
                    out.write_char(' ')?;
                }
                match chunk.get(column) {
                    Some(&byte) if (0x20..=0x7E).contains(&byte) => out.write_char(char::from(byte))?,
                    Some(_) => out.write_char('.')?,
                    None => out.write_char(' ')?,
                }
            }
            out.write_char('\n')?;
        }
        Ok(())
    }
}

impl Index<usize> for Body {
    type Output = u8;

    fn index(&self, index: usize) -> &Self::Output {
        &self.bytes[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn body(bytes: &[u8]) -> Body {
        Body::new(Bytes::copy_from_slice(bytes))
    }

    #[test]
    fn indexed_access() {
        let body = body(b"hi");
        assert_eq!(body.len(), 2);
        assert_eq!(body[0], b'h');
        assert_eq!(body[1], b'i');
    }

    #[test]
    fn reader_is_restartable() {
        let body = body(b"hello");

        let mut first = String::new();
        body.reader().read_to_string(&mut first).unwrap();

        let mut second = String::new();
        body.reader().read_to_string(&mut second).unwrap();

        assert_eq!(first, "hello");
        assert_eq!(second, "hello");
    }

    #[test]
    fn dump_renders_hex_and_ascii() {
        let dump = body(b"Wiki\x00").dump();
        let line = dump.strip_suffix('\n').unwrap();

        // offset, 16 hex slots, separator, 16 ascii slots
        assert_eq!(line.len(), 7 + (16 * 2 + 15) + 3 + (16 + 15));
        assert!(line.starts_with("0000 : 57 69 6B 69 00 "));
        assert!(line.contains(" - W i k i ."));
    }

    #[test]
    fn dump_offsets_advance_by_sixteen() {
        let body = body(&[b'A'; 17]);
        let dump = body.dump();
        let rows: Vec<&str> = dump.lines().collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("0000 : "));
        assert!(rows[1].starts_with("0010 : "));
    }

    #[test]
    fn dump_of_empty_body_is_empty() {
        assert_eq!(body(b"").dump(), "");
    }
}
