//! Configuration schema definitions and loading.
//!
//! All configuration is serializable to/from TOML and every field has a
//! default, so an empty file is a valid configuration.

mod general;
mod loading;
mod paths;
mod player;

#[cfg(test)]
mod tests;

pub use general::{GeneralConfig, LogLevel};
pub use paths::ConfigPaths;
pub use player::PlayerConfig;

use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};

/// Main configuration structure for Marquee.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Player session settings.
    #[serde(default)]
    pub player: PlayerConfig,
}

impl Config {
    /// JSON schema describing the configuration file.
    pub fn schema() -> Schema {
        schema_for!(Config)
    }
}
