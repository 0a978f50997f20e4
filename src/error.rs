//! Error types for inistore
//!
//! Provides a unified error type for all store operations.

use thiserror::Error;

/// Result type alias using IniError
pub type Result<T> = std::result::Result<T, IniError>;

/// Unified error type for inistore operations
///
/// Absence is never an error: lookups return `None`, deletes return `false`
/// and enumerations return an empty `Vec`.
#[derive(Debug, Error)]
pub enum IniError {
    // -------------------------------------------------------------------------
    // Argument Errors
    // -------------------------------------------------------------------------
    /// Raised before any I/O when a section/key name is empty or a
    /// name/value would break the line format.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Encoding Errors
    // -------------------------------------------------------------------------
    #[error("Encoding error: {0}")]
    Encoding(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl IniError {
    /// Shorthand for building an `InvalidArgument` error
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        IniError::InvalidArgument(msg.into())
    }
}
