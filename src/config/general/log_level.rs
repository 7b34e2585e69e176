use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::Level;

/// Logging verbosity for the player console and library diagnostics.
///
/// Used as the fallback filter when `RUST_LOG` is not set.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Only failures such as rejected playback starts.
    Error,

    /// Failures plus clamped volumes and other corrected input.
    Warn,

    /// Session lifecycle messages (default level).
    #[default]
    Info,

    /// Every controller command and merged notification.
    Debug,

    /// Per-event monitor traffic, very verbose during playback.
    Trace,
}

impl LogLevel {
    /// The equivalent `tracing` level.
    pub fn as_level(self) -> Level {
        match self {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}
