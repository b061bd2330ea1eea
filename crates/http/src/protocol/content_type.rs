//! The `Content-Type` value sub-parser.
//!
//! Parses `type/subtype[; attr=value]*` into a media type and attribute list.
//! This feeds purely presentational logic (chiefly charset selection when
//! displaying a body); body decoding in the codec layer never consults it.
//! Unlike the header block parser, attribute names and values here *are*
//! trimmed of surrounding whitespace.

use crate::protocol::{HeaderField, HeaderList, ParseError};

/// A parsed `Content-Type` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentType {
    media_type: String,
    attributes: HeaderList,
}

impl ContentType {
    /// Parses a `Content-Type` header value.
    ///
    /// The first `/` is mandatory. Without a following `;` the whole text is
    /// the media type and there are no attributes; otherwise every
    /// `;`-delimited segment must contain `=`, split on its first occurrence,
    /// both sides trimmed.
    ///
    /// # Errors
    ///
    /// [`ParseError::MissingSeparator`] if the `/` is absent or an attribute
    /// segment lacks `=`.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let slash = text.find('/').ok_or_else(|| ParseError::missing_separator('/', text))?;

        match text[slash + 1..].find(';') {
            None => Ok(Self { media_type: text.to_owned(), attributes: HeaderList::default() }),
            Some(offset) => {
                let semicolon = slash + 1 + offset;
                let attributes = parse_attributes(&text[semicolon + 1..])?;
                Ok(Self { media_type: text[..semicolon].to_owned(), attributes })
            }
        }
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn attributes(&self) -> &HeaderList {
        &self.attributes
    }

    /// The `charset` attribute, if present.
    pub fn charset(&self) -> Option<&str> {
        self.attributes.value("charset")
    }
}

fn parse_attributes(text: &str) -> Result<HeaderList, ParseError> {
    let mut fields = Vec::new();
    for segment in text.split(';') {
        let (name, value) = segment.split_once('=').ok_or_else(|| ParseError::missing_separator('=', segment))?;
        fields.push(HeaderField::new(name.trim(), value.trim()));
    }
    Ok(HeaderList::from(fields))
}
