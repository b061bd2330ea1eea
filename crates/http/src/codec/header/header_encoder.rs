//! Header block encoder.
//!
//! Serializes a [`HeaderList`] back into `name: value` lines followed by the
//! blank line that closes the block. Wire text is packed one byte per
//! character: characters above U+00FF have no single-byte representation and
//! are rejected rather than silently re-encoded as UTF-8, so byte counts on
//! the wire always equal character counts.

use std::io::Write;

use crate::ensure;
use crate::protocol::{HeaderList, SendError};

/// Packs text into single-byte-per-character wire bytes.
///
/// # Errors
///
/// [`SendError::WideCharacter`] for any character above U+00FF.
pub(crate) fn pack_text(text: &str) -> Result<Vec<u8>, SendError> {
    let mut bytes = Vec::with_capacity(text.len());
    for ch in text.chars() {
        let code = u32::from(ch);
        ensure!(code <= 0xFF, SendError::wide_character(ch));
        bytes.push(code as u8);
    }
    Ok(bytes)
}

/// Writes the header block in list order, then the terminating blank line.
pub(crate) fn encode_headers<W: Write>(headers: &HeaderList, writer: &mut W) -> Result<(), SendError> {
    for field in headers {
        let line = pack_text(&format!("{}: {}\r\n", field.name(), field.value()))?;
        writer.write_all(&line)?;
    }
    writer.write_all(b"\r\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::HeaderField;

    #[test]
    fn writes_fields_in_order_with_terminator() {
        let headers: HeaderList =
            [HeaderField::new("Host", "example.com"), HeaderField::new("Accept", "*/*")].into_iter().collect();

        let mut wire = Vec::new();
        encode_headers(&headers, &mut wire).unwrap();

        assert_eq!(wire, b"Host: example.com\r\nAccept: */*\r\n\r\n");
    }

    #[test]
    fn empty_list_writes_blank_line_only() {
        let mut wire = Vec::new();
        encode_headers(&HeaderList::default(), &mut wire).unwrap();
        assert_eq!(wire, b"\r\n");
    }

    #[test]
    fn latin1_text_packs_one_byte_per_char() {
        let bytes = pack_text("na\u{EF}ve").unwrap();
        assert_eq!(bytes, [b'n', b'a', 0xEF, b'v', b'e']);
    }

    #[test]
    fn wide_character_is_rejected() {
        let headers: HeaderList = [HeaderField::new("X-Name", "\u{3042}")].into_iter().collect();

        let mut wire = Vec::new();
        let err = encode_headers(&headers, &mut wire).unwrap_err();
        assert!(matches!(err, SendError::WideCharacter { ch } if ch == '\u{3042}'));
    }
}
