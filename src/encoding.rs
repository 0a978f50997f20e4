//! Text encodings for the backing file
//!
//! The encoding is always explicit; nothing here consults the locale.
//!
//! | Variant   | Read                         | Write                 |
//! |-----------|------------------------------|-----------------------|
//! | `Utf8`    | UTF-8, leading BOM tolerated | UTF-8, no BOM         |
//! | `Utf8Bom` | UTF-8, leading BOM tolerated | BOM + UTF-8           |
//! | `Latin1`  | one byte = one char          | chars > U+00FF reject |

use std::fmt;
use std::str::FromStr;

use crate::error::{IniError, Result};

/// UTF-8 byte order mark
pub const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Encoding used to read and write the backing file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    /// UTF-8 without byte order mark
    #[default]
    Utf8,

    /// UTF-8 with a leading byte order mark
    Utf8Bom,

    /// ISO-8859-1
    Latin1,
}

impl TextEncoding {
    /// Canonical name, as accepted by `FromStr`
    pub fn name(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Utf8Bom => "utf-8-bom",
            TextEncoding::Latin1 => "latin1",
        }
    }

    /// Decode raw file bytes into text
    pub fn decode(&self, bytes: &[u8]) -> Result<String> {
        match self {
            TextEncoding::Utf8 | TextEncoding::Utf8Bom => {
                let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
                String::from_utf8(body.to_vec()).map_err(|e| {
                    IniError::Encoding(format!(
                        "invalid UTF-8 at byte {}",
                        e.utf8_error().valid_up_to()
                    ))
                })
            }
            TextEncoding::Latin1 => Ok(bytes.iter().map(|&b| b as char).collect()),
        }
    }

    /// Encode text into raw file bytes
    pub fn encode(&self, text: &str) -> Result<Vec<u8>> {
        match self {
            TextEncoding::Utf8 => Ok(text.as_bytes().to_vec()),
            TextEncoding::Utf8Bom => {
                let mut out = Vec::with_capacity(UTF8_BOM.len() + text.len());
                out.extend_from_slice(UTF8_BOM);
                out.extend_from_slice(text.as_bytes());
                Ok(out)
            }
            TextEncoding::Latin1 => text
                .chars()
                .map(|c| {
                    u8::try_from(u32::from(c)).map_err(|_| {
                        IniError::Encoding(format!(
                            "character {:?} (U+{:04X}) is not representable in latin1",
                            c,
                            u32::from(c)
                        ))
                    })
                })
                .collect(),
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TextEncoding {
    type Err = IniError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(TextEncoding::Utf8),
            "utf-8-bom" | "utf8-bom" | "utf-8-sig" => Ok(TextEncoding::Utf8Bom),
            "latin1" | "latin-1" | "iso-8859-1" => Ok(TextEncoding::Latin1),
            other => Err(IniError::Config(format!("unknown encoding: {}", other))),
        }
    }
}
