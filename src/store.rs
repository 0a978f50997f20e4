//! Store Module
//!
//! The facade that binds one Document to one backing file.
//!
//! ## Responsibilities
//! - Load the document on open (creating the file if absent)
//! - Validate arguments before touching the document or the disk
//! - Serve reads from memory
//! - Rewrite the full file after every mutation

use std::path::Path;

use parking_lot::RwLock;
use tracing::{debug, trace, warn};

use crate::codec::{serialize, Parser};
use crate::command::{Command, Response};
use crate::config::{InlineComments, StoreConfig};
use crate::document::Document;
use crate::encoding::TextEncoding;
use crate::error::{IniError, Result};
use crate::storage::IniFile;

/// A key/value store backed by one INI file
///
/// ## Consistency Model
///
/// - **Reads** (`get_value`, `sections`, `keys`) are served from the
///   in-memory document and never touch the disk.
/// - **Mutations** run against a working copy under the write lock. The
///   copy is serialized and written; the in-memory document is replaced
///   only once the write succeeded, so a failed write leaves memory as it
///   was before the call.
/// - **Multiple instances** on one path do not coordinate. Each sees the
///   file as it was at `open` (or the last `reload`); concurrent mutation
///   from two live instances is undefined and the last writer wins.
pub struct IniStore {
    /// Store configuration
    config: StoreConfig,

    /// Backing file
    file: IniFile,

    /// Parser configured with the store's comment handling
    parser: Parser,

    /// The in-memory document
    document: RwLock<Document>,
}

impl IniStore {
    /// Open or create a store with the given config
    ///
    /// On open:
    /// 1. Create the backing file if it does not exist
    /// 2. Otherwise read, decode and parse it
    pub fn open(config: StoreConfig) -> Result<Self> {
        config.validate()?;

        let (file, created) = IniFile::open_or_create(&config.path, config.encoding)?;
        let parser = Parser::from_config(&config);

        let document = if created {
            Document::new()
        } else {
            parser.parse(&file.read_text()?)
        };

        debug!(
            path = %config.path.display(),
            sections = document.len(),
            entries = document.entry_count(),
            "opened store"
        );

        Ok(Self {
            config,
            file,
            parser,
            document: RwLock::new(document),
        })
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified file path
    pub fn open_path(path: impl AsRef<Path>) -> Result<Self> {
        let config = StoreConfig::builder().path(path.as_ref()).build()?;
        Self::open(config)
    }

    /// Execute a command
    ///
    /// Routes commands to appropriate handlers
    pub fn execute(&self, command: Command) -> Result<Response> {
        trace!(
            command = ?command.command_type(),
            mutation = command.is_mutation(),
            "execute"
        );

        match command {
            Command::Get { section, key } => self.get_value(&section, &key).map(Response::Value),
            Command::GetOrInsert {
                section,
                key,
                default,
            } => self
                .get_value_or_insert(&section, &key, &default)
                .map(|v| Response::Value(Some(v))),
            Command::Set {
                section,
                key,
                value,
            } => self.set_value(&section, &key, &value).map(Response::Applied),
            Command::DeleteKey { section, key } => {
                self.delete_key(&section, &key).map(Response::Applied)
            }
            Command::DeleteSection { section } => {
                self.delete_section(&section).map(Response::Applied)
            }
            Command::Sections => Ok(Response::Labels(self.sections())),
            Command::Keys { section } => self.keys(&section).map(Response::Labels),
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Get a value, or `None` if the section or key is absent
    pub fn get_value(&self, section: &str, key: &str) -> Result<Option<String>> {
        validate_section(section)?;
        validate_key(key)?;

        Ok(self.document.read().get(section, key).map(str::to_string))
    }

    /// Section labels in document order
    pub fn sections(&self) -> Vec<String> {
        self.document.read().section_labels()
    }

    /// Key labels of a section in order; empty if the section is absent
    pub fn keys(&self, section: &str) -> Result<Vec<String>> {
        validate_section(section)?;

        Ok(self
            .document
            .read()
            .section(section)
            .map(|s| s.keys())
            .unwrap_or_default())
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Get a value, writing `default` into the section/key if absent
    ///
    /// Returns the stored value when present (no write), otherwise
    /// persists `default` and returns it.
    pub fn get_value_or_insert(&self, section: &str, key: &str, default: &str) -> Result<String> {
        validate_section(section)?;
        validate_key(key)?;
        validate_value(default)?;
        self.validate_new_key(key)?;
        self.validate_new_value(default)?;

        if let Some(value) = self.document.read().get(section, key) {
            return Ok(value.to_string());
        }

        // Re-checked under the write lock; another thread may have won
        let mut existing = None;
        self.apply("get_value_or_insert", |document| {
            match document.get(section, key) {
                Some(value) => {
                    existing = Some(value.to_string());
                    false
                }
                None => {
                    document.set(section, key, default);
                    true
                }
            }
        })?;

        Ok(existing.unwrap_or_else(|| default.to_string()))
    }

    /// Insert or update a value and persist. Returns `true` once written.
    pub fn set_value(&self, section: &str, key: &str, value: &str) -> Result<bool> {
        validate_section(section)?;
        validate_key(key)?;
        validate_value(value)?;
        self.validate_new_key(key)?;
        self.validate_new_value(value)?;

        self.apply("set_value", |document| {
            document.set(section, key, value);
            true
        })
    }

    /// Remove a key. Returns `false` if the section or key is absent.
    pub fn delete_key(&self, section: &str, key: &str) -> Result<bool> {
        validate_section(section)?;
        validate_key(key)?;

        self.apply("delete_key", |document| {
            document.remove(section, key).is_some()
        })
    }

    /// Remove a whole section. Returns `false` if it is absent.
    pub fn delete_section(&self, section: &str) -> Result<bool> {
        validate_section(section)?;

        self.apply("delete_section", |document| {
            document.remove_section(section).is_some()
        })
    }

    /// Re-read the backing file, replacing the in-memory document
    pub fn reload(&self) -> Result<()> {
        let mut document = self.document.write();
        *document = self.parser.parse(&self.file.read_text()?);

        debug!(
            path = %self.file.path().display(),
            sections = document.len(),
            "reloaded store"
        );
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Active text encoding
    pub fn encoding(&self) -> TextEncoding {
        self.file.encoding()
    }

    /// Backing file path
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Get the configuration
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// A key starting with the comment marker would be read back as a comment
    fn validate_new_key(&self, key: &str) -> Result<()> {
        if key.trim_start().starts_with(self.parser.comment_char()) {
            return Err(IniError::invalid_argument(format!(
                "key must not start with the comment marker {:?}",
                self.parser.comment_char()
            )));
        }
        Ok(())
    }

    /// Under `InlineComments::Strip` a marker inside a value would cut it
    /// short on the next parse
    fn validate_new_value(&self, value: &str) -> Result<()> {
        let marker = self.parser.comment_char();
        if self.config.inline_comments == InlineComments::Strip && value.contains(marker) {
            return Err(IniError::invalid_argument(format!(
                "value must not contain the comment marker {:?} while inline comments are stripped",
                marker
            )));
        }
        Ok(())
    }

    /// Run `mutate` on a working copy; if it reports a change, persist the
    /// copy and then make it current.
    fn apply<F>(&self, op: &'static str, mutate: F) -> Result<bool>
    where
        F: FnOnce(&mut Document) -> bool,
    {
        let mut document = self.document.write();

        let mut working = document.clone();
        if !mutate(&mut working) {
            trace!(op, "no change");
            return Ok(false);
        }

        if let Err(e) = self.file.write_text(&serialize(&working)) {
            warn!(op, path = %self.file.path().display(), error = %e, "persist failed");
            return Err(e);
        }

        *document = working;
        trace!(op, "persisted");
        Ok(true)
    }
}

// =============================================================================
// Argument Validation
// =============================================================================

fn has_line_break(s: &str) -> bool {
    s.contains(['\n', '\r'])
}

/// The parser trims header labels and keys, so padded names would not
/// read back as written
fn is_padded(s: &str) -> bool {
    s.trim() != s
}

fn validate_section(section: &str) -> Result<()> {
    if section.is_empty() {
        return Err(IniError::invalid_argument("section name must not be empty"));
    }
    if has_line_break(section) {
        return Err(IniError::invalid_argument(
            "section name must not contain a line break",
        ));
    }
    if is_padded(section) {
        return Err(IniError::invalid_argument(
            "section name must not start or end with whitespace",
        ));
    }
    Ok(())
}

fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(IniError::invalid_argument("key must not be empty"));
    }
    if has_line_break(key) {
        return Err(IniError::invalid_argument("key must not contain a line break"));
    }
    if is_padded(key) {
        return Err(IniError::invalid_argument(
            "key must not start or end with whitespace",
        ));
    }
    if key.contains('=') {
        return Err(IniError::invalid_argument("key must not contain '='"));
    }
    // `[k=v]` would read back as a section header
    if key.starts_with('[') {
        return Err(IniError::invalid_argument("key must not start with '['"));
    }
    Ok(())
}

fn validate_value(value: &str) -> Result<()> {
    if has_line_break(value) {
        return Err(IniError::invalid_argument(
            "value must not contain a line break",
        ));
    }
    Ok(())
}
