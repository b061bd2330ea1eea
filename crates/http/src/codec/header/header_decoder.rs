//! Header block decoder.
//!
//! Reads `name: value` lines through the shared line reader until the blank
//! line that separates the header block from the body. Values are kept
//! verbatim: this parser does not trim whitespace, so a value keeps whatever
//! the peer put after the `": "` separator.

use std::io::Read;

use tracing::trace;

use crate::codec::line_reader::read_line;
use crate::protocol::{HeaderField, HeaderList, ParseError};

/// The name/value separator required on every header line.
const SEPARATOR: &str = ": ";

/// Parses a header block from the stream, consuming the terminating blank line.
///
/// # Errors
///
/// - [`ParseError::MalformedHeader`] if a non-empty line has no `": "`,
///   carrying the offending line for diagnostics
/// - [`ParseError::TruncatedStream`] if the stream ends before the blank line
pub(crate) fn decode_headers<R: Read>(reader: &mut R) -> Result<HeaderList, ParseError> {
    let mut fields = Vec::new();
    loop {
        let line = read_line(reader)?;
        if line.is_empty() {
            trace!(count = fields.len(), "finished reading header block");
            return Ok(HeaderList::from(fields));
        }

        let (name, value) = line.split_once(SEPARATOR).ok_or_else(|| ParseError::malformed_header(&line))?;
        fields.push(HeaderField::new(name, value));
    }
}
