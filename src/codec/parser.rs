//! INI Parser
//!
//! Line-oriented text → Document conversion.

use tracing::trace;

use crate::config::{InlineComments, StoreConfig, DEFAULT_COMMENT_CHAR};
use crate::document::Document;

/// Parses INI text into a Document
#[derive(Debug, Clone, Copy)]
pub struct Parser {
    /// Whole-line comment marker
    comment_char: char,

    /// Handling of a marker inside a value
    inline_comments: InlineComments,
}

/// Classification of a single line
#[derive(Debug, PartialEq)]
enum Line<'a> {
    Skip,
    Header(&'a str),
    Pair { key: &'a str, value: &'a str },
    /// `[]`: ends the current section without starting a new one
    EmptyHeader,
    Malformed,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new(DEFAULT_COMMENT_CHAR, InlineComments::Strip)
    }
}

impl Parser {
    pub fn new(comment_char: char, inline_comments: InlineComments) -> Self {
        Self {
            comment_char,
            inline_comments,
        }
    }

    /// Build a parser matching a store configuration
    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.comment_char, config.inline_comments)
    }

    pub fn comment_char(&self) -> char {
        self.comment_char
    }

    /// Parse text into a Document. Never fails.
    pub fn parse(&self, text: &str) -> Document {
        let mut document = Document::new();

        // Folded-name lookup happens through the document, so only the
        // current section's label needs tracking here.
        let mut current: Option<String> = None;

        for (number, raw) in text.lines().enumerate() {
            match self.classify(raw) {
                Line::Skip => {}
                Line::Header(label) => {
                    current = Some(document.section_or_insert(label).label().to_string());
                }
                Line::Pair { key, value } => match &current {
                    Some(section) => {
                        document.set(section, key, value);
                    }
                    None => trace!(line = number + 1, "dropping key outside any section"),
                },
                Line::EmptyHeader => {
                    trace!(line = number + 1, "empty section header, following keys are dropped");
                    current = None;
                }
                Line::Malformed => trace!(line = number + 1, "skipping malformed line"),
            }
        }

        document
    }

    fn classify<'a>(&self, raw: &'a str) -> Line<'a> {
        // `lines()` already removed "\n" / "\r\n"; a lone trailing '\r' can remain
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with(self.comment_char) {
            return Line::Skip;
        }

        if trimmed.len() >= 2 && trimmed.starts_with('[') && trimmed.ends_with(']') {
            let label = trimmed[1..trimmed.len() - 1].trim();
            if label.is_empty() {
                return Line::EmptyHeader;
            }
            return Line::Header(label);
        }

        let Some((key, value)) = line.split_once('=') else {
            return Line::Malformed;
        };

        let key = key.trim();
        if key.is_empty() {
            return Line::Malformed;
        }

        let value = match self.inline_comments {
            InlineComments::Retain => value,
            InlineComments::Strip => match value.find(self.comment_char) {
                Some(at) => &value[..at],
                None => value,
            },
        };

        Line::Pair { key, value }
    }
}
