//! INI Serializer
//!
//! Document → text. Sections are separated by one blank line and the
//! output ends with a single newline; an empty document is empty text.

use std::fmt::Write;

use crate::document::Document;

/// Serialize a Document to INI text
pub fn serialize(document: &Document) -> String {
    let mut out = String::new();

    for (i, section) in document.sections().enumerate() {
        if i > 0 {
            out.push('\n');
        }

        // Writing into a String cannot fail
        let _ = writeln!(out, "[{}]", section.label());
        for entry in section.entries() {
            let _ = writeln!(out, "{}={}", entry.key, entry.value);
        }
    }

    out
}
