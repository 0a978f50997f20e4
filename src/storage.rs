//! Storage Module
//!
//! The backing INI file.
//!
//! ## Responsibilities
//! - Create the file on open when it does not exist yet
//! - Read and decode the full file text
//! - Rewrite the full file after every mutation
//!
//! ## Durability
//! The rewrite truncates and writes in place (no temp file + rename), so a
//! crash mid-write can leave a truncated file. Callers that need crash
//! atomicity must arrange it outside this crate.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::encoding::TextEncoding;
use crate::error::Result;

/// Handle to the backing file of a store
#[derive(Debug, Clone)]
pub struct IniFile {
    /// Location on disk
    path: PathBuf,

    /// Encoding for reads and rewrites
    encoding: TextEncoding,
}

impl IniFile {
    /// Open the file at `path`, creating it empty if it does not exist.
    ///
    /// Returns the handle and whether the file was newly created.
    /// Fails with `IniError::Io` if the parent directory is missing or the
    /// location is not writable.
    pub fn open_or_create(path: &Path, encoding: TextEncoding) -> Result<(Self, bool)> {
        let created = match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(_) => {
                info!(path = %path.display(), "created backing file");
                true
            }
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => false,
            Err(e) => return Err(e.into()),
        };

        let file = Self {
            path: path.to_path_buf(),
            encoding,
        };
        Ok((file, created))
    }

    /// Read and decode the full file text
    pub fn read_text(&self) -> Result<String> {
        let bytes = fs::read(&self.path)?;
        let text = self.encoding.decode(&bytes)?;
        debug!(path = %self.path.display(), bytes = bytes.len(), "read backing file");
        Ok(text)
    }

    /// Encode and rewrite the full file
    pub fn write_text(&self, text: &str) -> Result<()> {
        // Encode first so an unrepresentable character never truncates the file
        let bytes = self.encoding.encode(text)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;
        file.write_all(&bytes)?;
        file.flush()?;

        debug!(path = %self.path.display(), bytes = bytes.len(), "rewrote backing file");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }
}
