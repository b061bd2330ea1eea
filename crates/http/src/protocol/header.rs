//! Header field and header list types.
//!
//! A header block on the wire is an ordered sequence of `name: value` lines
//! terminated by one blank line. [`HeaderList`] preserves that order exactly:
//! duplicate names are legal, and name-based lookup observes only the first
//! occurrence. Lookup is case-sensitive ordinal comparison, matching the wire
//! bytes rather than the case-folding rules of RFC 9110.

use std::fmt;
use std::io::{Read, Write};
use std::ops::Index;

use crate::codec;
use crate::protocol::{ParseError, SendError};

/// One immutable `name`/`value` pair of a header block.
///
/// Equality and hashing are structural over both fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HeaderField {
    name: String,
    value: String,
}

impl HeaderField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: value.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for HeaderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// An ordered, immutable collection of [`HeaderField`]s.
///
/// The list is append-only while it is being built and read-only afterwards;
/// no field is ever mutated in place. Equality and hashing are structural over
/// the ordered field sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct HeaderList {
    fields: Vec<HeaderField>,
}

impl HeaderList {
    /// Parses a header block from the stream.
    ///
    /// Reads CRLF-terminated lines until the blank line that closes the block.
    /// Each non-empty line must contain the two-character separator `": "`;
    /// the split happens on its first occurrence and both halves are kept
    /// verbatim, without trimming.
    ///
    /// # Errors
    ///
    /// - [`ParseError::MalformedHeader`] if a line has no `": "` separator
    /// - [`ParseError::TruncatedStream`] if the stream ends before the blank line
    pub fn parse<R: Read>(reader: &mut R) -> Result<Self, ParseError> {
        codec::decode_headers(reader)
    }

    /// Serializes the header block onto the stream.
    ///
    /// Writes each field as `name: value\r\n` in list order, followed by the
    /// blank `\r\n` that terminates the block. Text is packed one byte per
    /// character; characters above U+00FF are rejected with
    /// [`SendError::WideCharacter`].
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), SendError> {
        codec::encode_headers(self, writer)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HeaderField> {
        self.fields.iter()
    }

    /// Returns the first field whose name exactly equals `name`.
    pub fn find(&self, name: &str) -> Option<&HeaderField> {
        self.fields.iter().find(|field| field.name() == name)
    }

    /// Returns the value of the first field named `name`, if present.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.find(name).map(HeaderField::value)
    }

    /// Returns the value of the first field named `name`.
    ///
    /// # Errors
    ///
    /// [`ParseError::MissingHeader`] if no field has that name.
    pub fn require(&self, name: &str) -> Result<&str, ParseError> {
        self.value(name).ok_or_else(|| ParseError::missing_header(name))
    }

    /// Returns the value of the first field named `name` parsed as a decimal
    /// integer.
    ///
    /// # Errors
    ///
    /// - [`ParseError::MissingHeader`] if no field has that name
    /// - [`ParseError::InvalidHeaderValue`] if the value is not a valid integer
    pub fn require_usize(&self, name: &str) -> Result<usize, ParseError> {
        let text = self.require(name)?;
        text.parse().ok().ok_or_else(|| ParseError::invalid_header_value(name, text))
    }
}

impl From<Vec<HeaderField>> for HeaderList {
    fn from(fields: Vec<HeaderField>) -> Self {
        Self { fields }
    }
}

impl FromIterator<HeaderField> for HeaderList {
    fn from_iter<I: IntoIterator<Item = HeaderField>>(iter: I) -> Self {
        Self { fields: iter.into_iter().collect() }
    }
}

impl Index<usize> for HeaderList {
    type Output = HeaderField;

    fn index(&self, index: usize) -> &Self::Output {
        &self.fields[index]
    }
}

impl<'a> IntoIterator for &'a HeaderList {
    type Item = &'a HeaderField;
    type IntoIter = std::slice::Iter<'a, HeaderField>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl fmt::Display for HeaderList {
    /// Renders the list as `[name=value, name=value, ...]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        let mut prefix = "";
        for field in &self.fields {
            write!(f, "{prefix}{field}")?;
            prefix = ", ";
        }
        f.write_str("]")
    }
}
