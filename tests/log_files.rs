//! Integration test for the data directory layout and file logging.
//!
//! Kept in its own test binary with a single test: it points `HOME` at a
//! temporary directory and installs the global subscriber.

#![allow(unsafe_code)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

use std::fs;

use marquee::config::{Config, ConfigPaths, LogLevel};
use marquee::tracing_config;
use tempfile::TempDir;

#[test]
fn session_files_live_under_home() {
    let temp = TempDir::new().unwrap();
    unsafe {
        std::env::set_var("HOME", temp.path());
        std::env::remove_var("XDG_CONFIG_HOME");
        std::env::remove_var("RUST_LOG");
    }

    assert_eq!(
        ConfigPaths::config_dir().unwrap(),
        temp.path().join(".config/marquee")
    );
    assert_eq!(Config::load().unwrap(), Config::default());
    assert!(temp.path().join(".config/marquee/config.toml").exists());

    let log_dir = ConfigPaths::log_dir().unwrap();
    assert_eq!(log_dir, temp.path().join(".marquee/logs"));
    assert!(log_dir.is_dir());

    let guard = tracing_config::init_with_file(LogLevel::Info).unwrap();
    tracing::info!("session files test");
    tracing::debug!("below the configured level");
    drop(guard);

    let logs: Vec<_> = fs::read_dir(&log_dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    assert_eq!(logs.len(), 1);

    let name = logs[0].file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("marquee") && name.ends_with(".log"), "{name}");

    let content = fs::read_to_string(&logs[0]).unwrap();
    assert!(content.contains("session files test"));
    assert!(!content.contains("below the configured level"));
}
