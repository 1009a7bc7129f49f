//! Unit tests for config module
//!
//! Tests configuration types, defaults, and serialization.
//! No filesystem dependencies - all in-memory.

#![allow(clippy::panic, clippy::unwrap_used)]

use std::path::PathBuf;

use crate::config::{Config, LogFormat, LogLevel, PanelConfig, StylingConfig};

#[test]
fn config_default_matches_fallback_panel() {
    let config = Config::default();

    assert_eq!(config.panel.fallback_width, 300);
    assert_eq!(config.panel.fallback_x, 50);
    assert_eq!(config.panel.fallback_y, 50);
    assert_eq!(config.panel.height, 100);
    assert_eq!(config.panel.title, "Test Panel");
    assert!(config.panel.follow_monitor);
    assert_eq!(config.general.log_level, LogLevel::Info);
    assert!(config.styling.stylesheet.is_none());
}

#[test]
fn config_serialize_toml() {
    let config = Config::default();

    let toml_str = toml::to_string(&config).unwrap();
    assert!(toml_str.contains("[general]"));
    assert!(toml_str.contains("[panel]"));
    assert!(toml_str.contains("[styling]"));
}

#[test]
fn config_deserialize_toml() {
    let toml_str = r##"
        [general]
        log_level = "debug"
        log_format = "json"

        [panel]
        title = "Top Bar"
        follow_monitor = false

        [styling]
        background = "#1e1e2e"
        font_size = 14
        stylesheet = "panel.css"
    "##;

    let config: Config = toml::from_str(toml_str).unwrap();

    assert_eq!(config.general.log_level, LogLevel::Debug);
    assert_eq!(config.general.log_format, LogFormat::Json);
    assert_eq!(config.panel.title, "Top Bar");
    assert!(!config.panel.follow_monitor);
    assert_eq!(config.panel.height, PanelConfig::default().height);
    assert_eq!(config.styling.background, "#1e1e2e");
    assert_eq!(config.styling.font_size, 14);
    assert_eq!(config.styling.stylesheet, Some(PathBuf::from("panel.css")));
    assert_eq!(
        config.styling.text_color,
        StylingConfig::default().text_color
    );
}

#[test]
fn config_serialize_roundtrip() {
    let original = Config::default();

    let toml_str = toml::to_string(&original).unwrap();
    let deserialized: Config = toml::from_str(&toml_str).unwrap();

    assert_eq!(original, deserialized);
}

#[test]
fn config_empty_toml() {
    let config: Config = toml::from_str("").unwrap();

    assert_eq!(config, Config::default());
}

#[test]
fn config_rejects_unknown_log_level() {
    let result: Result<Config, _> = toml::from_str(
        r#"
        [general]
        log_level = "loud"
    "#,
    );

    assert!(result.is_err());
}

#[test]
fn log_level_display_matches_filter_syntax() {
    assert_eq!(LogLevel::Error.to_string(), "error");
    assert_eq!(LogLevel::Warn.to_string(), "warn");
    assert_eq!(LogLevel::Trace.to_string(), "trace");
}
