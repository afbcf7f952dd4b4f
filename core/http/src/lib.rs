//! Types that map to concepts in HTTP.
//!
//! This crate exports the HTTP vocabulary the `responser` helpers build atop:
//! status codes and their classes, an ordered case-insensitive header map, and
//! media types with extension-based lookup. It contains no I/O and no policy;
//! response assembly lives in the `responser` crate.

#[macro_use]
mod known_media_types;
mod content_type;
mod header;
mod status;

pub use content_type::ContentType;
pub use header::{Header, HeaderMap};
pub use status::{Status, StatusClass};
