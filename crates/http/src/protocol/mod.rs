//! Core HTTP message model.
//!
//! This module holds the structured representations the codec layer produces
//! and consumes:
//!
//! - [`HeaderField`] / [`HeaderList`]: one name/value pair, and the ordered
//!   header block with first-match lookup
//! - [`Body`]: the immutable decoded payload with indexed access, restartable
//!   readers and a hex/ASCII dump
//! - [`RequestMessage`]: method, path, version and headers, serialized onto a
//!   stream
//! - [`ResponseMessage`]: status line, headers and body, parsed from a stream
//! - [`ContentType`]: the `type/subtype; attr=value` sub-grammar used for
//!   display dispatch
//! - [`HttpError`] / [`ParseError`] / [`SendError`]: the error taxonomy
//!
//! Every type owns its data outright. Streams are borrowed only for the single
//! parse or serialize call that uses them and are never retained, so nothing
//! here needs locking; concurrent exchanges simply use one stream and one
//! message each.

mod body;
pub use body::Body;

mod content_type;
pub use content_type::ContentType;

mod error;
pub use error::HttpError;
pub use error::ParseError;
pub use error::SendError;

mod header;
pub use header::HeaderField;
pub use header::HeaderList;

mod request;
pub use request::RequestMessage;

mod response;
pub use response::ResponseMessage;
