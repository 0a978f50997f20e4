//! inistore CLI
//!
//! Command-line interface for reading and editing an INI file.
//!
//! Exit codes: 0 success, 1 key/section absent, 2 error.

use clap::{Parser, Subcommand};
use inistore::{Command, IniStore, InlineComments, Response, StoreConfig, TextEncoding};
use tracing_subscriber::{fmt, EnvFilter};

/// inistore CLI
#[derive(Parser, Debug)]
#[command(name = "inistore-cli")]
#[command(about = "Read and edit INI configuration files")]
#[command(version)]
struct Args {
    /// INI file (created if it does not exist)
    #[arg(short, long)]
    file: String,

    /// Whole-line comment marker
    #[arg(short, long, default_value = "#")]
    comment: char,

    /// File encoding (utf-8, utf-8-bom, latin1)
    #[arg(short, long, default_value = "utf-8")]
    encoding: TextEncoding,

    /// Keep an inline comment marker and its text as part of the value
    #[arg(long)]
    retain_inline_comments: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Get a value
    Get {
        section: String,
        key: String,

        /// Write this value into the file if the key is absent
        #[arg(short, long)]
        default: Option<String>,
    },

    /// Set a value
    Set {
        section: String,
        key: String,
        value: String,
    },

    /// Delete a key
    Del { section: String, key: String },

    /// Delete a whole section
    DelSection { section: String },

    /// List sections
    Sections,

    /// List keys of a section
    Keys { section: String },
}

impl From<Commands> for Command {
    fn from(command: Commands) -> Self {
        match command {
            Commands::Get {
                section,
                key,
                default: Some(default),
            } => Command::GetOrInsert {
                section,
                key,
                default,
            },
            Commands::Get {
                section,
                key,
                default: None,
            } => Command::Get { section, key },
            Commands::Set {
                section,
                key,
                value,
            } => Command::Set {
                section,
                key,
                value,
            },
            Commands::Del { section, key } => Command::DeleteKey { section, key },
            Commands::DelSection { section } => Command::DeleteSection { section },
            Commands::Sections => Command::Sections,
            Commands::Keys { section } => Command::Keys { section },
        }
    }
}

fn main() {
    // Logs go to stderr so stdout stays clean for values
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let inline_comments = if args.retain_inline_comments {
        InlineComments::Retain
    } else {
        InlineComments::Strip
    };

    let config = match StoreConfig::builder()
        .path(&args.file)
        .comment_char(args.comment)
        .encoding(args.encoding)
        .inline_comments(inline_comments)
        .build()
    {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(2);
        }
    };

    let store = match IniStore::open(config) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to open {}: {}", args.file, e);
            std::process::exit(2);
        }
    };

    let code = match store.execute(args.command.into()) {
        Ok(Response::Value(Some(value))) => {
            println!("{}", value);
            0
        }
        Ok(Response::Value(None)) | Ok(Response::Applied(false)) => 1,
        Ok(Response::Applied(true)) => 0,
        Ok(Response::Labels(labels)) => {
            for label in labels {
                println!("{}", label);
            }
            0
        }
        Err(e) => {
            tracing::error!("{}", e);
            2
        }
    };

    std::process::exit(code);
}
