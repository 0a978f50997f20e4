//! # inistore
//!
//! A key/value configuration store backed by a flat INI file:
//! - Section-scoped get/set/delete of string values
//! - Case-insensitive, case-preserving section and key lookup
//! - Whole-file rewrite after every mutation
//! - Explicit text encoding and comment marker
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         IniStore                             │
//! │          (validation, read / mutate / persist)               │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  Document   │◄────────►│    Codec    │
//!   │  (RwLock)   │          │ parse/write │
//!   └─────────────┘          └──────┬──────┘
//!                                   │
//!                                   ▼
//!                           ┌─────────────┐
//!                           │   IniFile   │
//!                           │ (encoding)  │
//!                           └─────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use inistore::IniStore;
//!
//! let store = IniStore::open_path("settings.ini")?;
//! store.set_value("Application", "Name", "MyApp")?;
//! assert_eq!(store.get_value("application", "name")?, Some("MyApp".to_string()));
//! # Ok::<(), inistore::IniError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;
pub mod encoding;

pub mod document;
pub mod codec;
pub mod storage;
pub mod command;
pub mod store;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{IniError, Result};
pub use config::{InlineComments, StoreConfig};
pub use encoding::TextEncoding;
pub use document::{Document, Entry, Section};
pub use command::{Command, Response};
pub use store::IniStore;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of inistore
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
