//! Command definitions
//!
//! Every store operation as a value, so front ends (the CLI, scripted
//! batches) can route through `IniStore::execute`.

/// Command types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    Get,
    GetOrInsert,
    Set,
    DeleteKey,
    DeleteSection,
    Sections,
    Keys,
}

/// A store operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Look up a value
    Get { section: String, key: String },

    /// Look up a value, materializing `default` when absent
    GetOrInsert {
        section: String,
        key: String,
        default: String,
    },

    /// Insert or update a value
    Set {
        section: String,
        key: String,
        value: String,
    },

    /// Remove one key
    DeleteKey { section: String, key: String },

    /// Remove a whole section
    DeleteSection { section: String },

    /// List section labels
    Sections,

    /// List key labels of a section
    Keys { section: String },
}

impl Command {
    /// Get the command type
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::Get { .. } => CommandType::Get,
            Command::GetOrInsert { .. } => CommandType::GetOrInsert,
            Command::Set { .. } => CommandType::Set,
            Command::DeleteKey { .. } => CommandType::DeleteKey,
            Command::DeleteSection { .. } => CommandType::DeleteSection,
            Command::Sections => CommandType::Sections,
            Command::Keys { .. } => CommandType::Keys,
        }
    }

    /// Whether executing this command may rewrite the backing file
    pub fn is_mutation(&self) -> bool {
        matches!(
            self.command_type(),
            CommandType::GetOrInsert
                | CommandType::Set
                | CommandType::DeleteKey
                | CommandType::DeleteSection
        )
    }
}

/// Result of executing a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// `Get` / `GetOrInsert`: the value, `None` when absent
    Value(Option<String>),

    /// `Set` / `DeleteKey` / `DeleteSection`: whether anything changed
    Applied(bool),

    /// `Sections` / `Keys`: labels in order
    Labels(Vec<String>),
}
