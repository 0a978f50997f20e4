//! Codec Module
//!
//! Conversion between INI text and the in-memory `Document`.
//!
//! ## Text Format
//! ```text
//! # whole-line comment (configurable marker)
//! [Application]          <- section header, label trimmed
//! Name=MyApp             <- key trimmed, value verbatim after the first '='
//! Url=a=b                <- value "a=b"
//!
//! [Database]
//! Timeout=30
//! ```
//!
//! Parsing never fails: blank lines, orphan keys before the first header,
//! lines without `=` and empty keys are skipped. Serialization is a pure
//! function of the document, so rewriting unchanged data is byte-identical.

mod parser;
mod serializer;

pub use parser::Parser;
pub use serializer::serialize;

use crate::document::Document;

/// Parse text with the default comment marker and inline comment policy
pub fn parse(text: &str) -> Document {
    Parser::default().parse(text)
}
