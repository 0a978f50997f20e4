//! Configuration for inistore
//!
//! Centralized store configuration with sensible defaults.

use std::path::PathBuf;

use crate::encoding::TextEncoding;
use crate::error::{IniError, Result};

/// Default whole-line comment marker
pub const DEFAULT_COMMENT_CHAR: char = '#';

/// Main configuration for an IniStore instance
#[derive(Debug, Clone)]
pub struct StoreConfig {
    // -------------------------------------------------------------------------
    // File Configuration
    // -------------------------------------------------------------------------
    /// Backing INI file. Created empty on open if it does not exist;
    /// its parent directory must exist.
    pub path: PathBuf,

    /// Encoding used to read and rewrite the backing file
    pub encoding: TextEncoding,

    // -------------------------------------------------------------------------
    // Parser Configuration
    // -------------------------------------------------------------------------
    /// Lines whose first non-whitespace character is this marker are skipped
    pub comment_char: char,

    /// What to do with a comment marker appearing inside a value
    pub inline_comments: InlineComments,
}

/// Handling of a comment marker found inside a `key=value` line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InlineComments {
    /// Cut the value at the first marker (whitespace before it is kept)
    #[default]
    Strip,

    /// Keep the marker and everything after it as part of the value
    Retain,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./config.ini"),
            encoding: TextEncoding::Utf8,
            comment_char: DEFAULT_COMMENT_CHAR,
            inline_comments: InlineComments::Strip,
        }
    }
}

impl StoreConfig {
    /// Create a new config builder
    pub fn builder() -> StoreConfigBuilder {
        StoreConfigBuilder::default()
    }

    /// Check that the configuration can drive the parser unambiguously
    pub fn validate(&self) -> Result<()> {
        let c = self.comment_char;
        if c.is_whitespace() || matches!(c, '[' | ']' | '=') {
            return Err(IniError::Config(format!(
                "comment marker {:?} collides with INI syntax",
                c
            )));
        }
        if self.path.as_os_str().is_empty() {
            return Err(IniError::Config("path must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Builder for StoreConfig
#[derive(Default)]
pub struct StoreConfigBuilder {
    config: StoreConfig,
}

impl StoreConfigBuilder {
    /// Set the backing file path
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.path = path.into();
        self
    }

    /// Set the whole-line comment marker
    pub fn comment_char(mut self, marker: char) -> Self {
        self.config.comment_char = marker;
        self
    }

    /// Set the file encoding
    pub fn encoding(mut self, encoding: TextEncoding) -> Self {
        self.config.encoding = encoding;
        self
    }

    /// Set the inline comment policy
    pub fn inline_comments(mut self, policy: InlineComments) -> Self {
        self.config.inline_comments = policy;
        self
    }

    pub fn build(self) -> Result<StoreConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
