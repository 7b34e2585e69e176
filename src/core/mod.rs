use std::{io, path::PathBuf};

use thiserror::Error;

use crate::services::player::MediaError;

/// Everything that can go wrong while setting up or running a player session.
#[derive(Error, Debug)]
pub enum MarqueeError {
    /// A file or directory could not be read, created or resolved.
    #[error("cannot access '{}': {source}", .path.display())]
    Io {
        /// File or directory involved
        path: PathBuf,
        /// Underlying failure
        #[source]
        source: io::Error,
    },

    /// Neither `XDG_CONFIG_HOME` nor `HOME` is usable.
    #[error("cannot locate the configuration directory: {0}")]
    ConfigDir(#[source] io::Error),

    /// A file is not valid TOML.
    #[error("invalid TOML{}: {source}", origin_suffix(.path.as_ref()))]
    Parse {
        /// File that failed to parse, if the text came from one
        path: Option<PathBuf>,
        /// Parser diagnostic
        #[source]
        source: Box<toml::de::Error>,
    },

    /// The document parsed but does not fit the configuration schema.
    #[error("invalid configuration{}: {source}", origin_suffix(.path.as_ref()))]
    Schema {
        /// Top-level file the document came from, if it came from one
        path: Option<PathBuf>,
        /// Deserializer diagnostic
        #[source]
        source: Box<toml::de::Error>,
    },

    /// An `imports` entry names a file that cannot be read.
    #[error("cannot import '{}': {source}", .path.display())]
    Import {
        /// Resolved path of the import
        path: PathBuf,
        /// Underlying failure
        #[source]
        source: io::Error,
    },

    /// A file imports itself, directly or through other files.
    #[error("circular import: {}", .chain.join(" -> "))]
    CircularImport {
        /// File names from the outermost file back to the repeated one
        chain: Vec<String>,
    },

    /// The media resource refused a command.
    #[error(transparent)]
    Playback(#[from] MediaError),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, MarqueeError>;

fn origin_suffix(path: Option<&PathBuf>) -> String {
    path.map(|p| format!(" in '{}'", p.display()))
        .unwrap_or_default()
}
