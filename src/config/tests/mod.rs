//! Unit tests for config types, defaults, and serialization.
//!
//! No filesystem dependencies - all in-memory.

#![allow(clippy::unwrap_used)]

use crate::MarqueeError;
use crate::config::{Config, LogLevel, PlayerConfig};
use crate::services::player::{FullscreenSync, PlayOrdering};

#[test]
fn config_default() {
    let config = Config::default();

    assert_eq!(config.general.log_level, LogLevel::Info);
    assert_eq!(config.player.initial_volume, 1.0);
    assert!(!config.player.start_muted);
    assert_eq!(config.player.seek_step, 10.0);
    assert_eq!(config.player.fullscreen_sync, FullscreenSync::Optimistic);
    assert_eq!(config.player.play_ordering, PlayOrdering::LastWriter);
}

#[test]
fn config_serialize_toml() {
    let toml_str = toml::to_string(&Config::default()).unwrap();

    assert!(toml_str.contains("[general]"));
    assert!(toml_str.contains("[player]"));
    assert!(toml_str.contains("fullscreen_sync = \"optimistic\""));
}

#[test]
fn config_deserialize_toml() {
    let toml_str = r#"
        [general]
        log_level = "debug"

        [player]
        initial_volume = 0.4
        fullscreen_sync = "confirmed"
        play_ordering = "latest-intent"
    "#;

    let config: Config = toml::from_str(toml_str).unwrap();

    assert_eq!(config.general.log_level, LogLevel::Debug);
    assert_eq!(config.player.initial_volume, 0.4);
    assert_eq!(config.player.fullscreen_sync, FullscreenSync::Confirmed);
    assert_eq!(config.player.play_ordering, PlayOrdering::LatestIntent);
    assert_eq!(config.player.seek_step, 10.0);
}

#[test]
fn config_serialize_roundtrip() {
    let original = Config {
        player: PlayerConfig {
            seek_step: 30.0,
            start_muted: true,
            ..PlayerConfig::default()
        },
        ..Config::default()
    };

    let toml_str = toml::to_string(&original).unwrap();
    let deserialized: Config = toml::from_str(&toml_str).unwrap();

    assert_eq!(original, deserialized);
}

#[test]
fn config_empty_toml() {
    let config = Config::from_toml_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn config_rejects_unknown_policy() {
    let result = Config::from_toml_str("[player]\nfullscreen_sync = \"eventually\"\n");
    assert!(matches!(
        result,
        Err(MarqueeError::Schema { path: None, .. })
    ));
}

#[test]
fn config_reports_malformed_toml_as_parse_error() {
    let result = Config::from_toml_str("[player\n");
    assert!(matches!(result, Err(MarqueeError::Parse { path: None, .. })));
}

#[test]
fn log_level_display_matches_serde_names() {
    for level in [
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ] {
        let serialized = toml::Value::try_from(level).unwrap();
        assert_eq!(serialized.as_str().unwrap(), level.to_string());
    }
}

#[test]
fn schema_describes_player_section() {
    let schema = serde_json::to_string(&Config::schema()).unwrap();

    assert!(schema.contains("player"));
    assert!(schema.contains("seek_step"));
}
