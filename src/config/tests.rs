//! Configuration tests
//!
//! Round-trip checks for the TOML template plus precedence checks for the
//! env > file > defaults layering.

use super::*;
use crate::format::DisplayMode;
use std::collections::HashMap;

fn no_env(_: &str) -> Option<String> {
    None
}

fn parse(toml_str: &str) -> FileConfig {
    toml::from_str(toml_str).expect("test TOML should parse")
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

/// Verify that the default template can be parsed back.
#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );
}

/// Non-default values must survive serialization, including strings that
/// need escaping.
#[test]
fn test_config_roundtrip_preserves_values() {
    let mut config = Config::default();
    config.display.scientific_notation = true;
    config.time_sync.url = "http://localhost:9000/time".to_string();
    config.time_sync.attempts = 5;
    config.time_sync.timeout_secs = 2;
    config.time_sync.user_agent = "idle \"clicker\" 1.0".to_string();
    config.logging.level = "debug".to_string();
    config.logging.file_enabled = true;
    config.logging.file_rotation = LogRotation::Hourly;
    config.logging.file_prefix = "run".to_string();

    let reparsed = Config::resolve(parse(&config.to_toml()), no_env);

    assert!(reparsed.display.scientific_notation);
    assert_eq!(reparsed.time_sync.url, "http://localhost:9000/time");
    assert_eq!(reparsed.time_sync.attempts, 5);
    assert_eq!(reparsed.time_sync.timeout_secs, 2);
    assert_eq!(reparsed.time_sync.user_agent, "idle \"clicker\" 1.0");
    assert_eq!(reparsed.logging.level, "debug");
    assert!(reparsed.logging.file_enabled);
    assert_eq!(reparsed.logging.file_rotation, LogRotation::Hourly);
    assert_eq!(reparsed.logging.file_prefix, "run");
}

/// Every section of Config must show up in the template so users can
/// discover it.
#[test]
fn test_default_template_documents_all_sections() {
    let toml_str = Config::default().to_toml();

    for section in ["[display]", "[time_sync]", "[logging]"] {
        assert!(
            toml_str.contains(section),
            "{} missing from TOML output!\nTOML output:\n{}",
            section,
            toml_str
        );
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_empty_file_gives_defaults() {
    let config = Config::resolve(FileConfig::default(), no_env);

    assert!(!config.display.scientific_notation);
    assert_eq!(config.display.mode(), DisplayMode::Suffix);
    assert_eq!(config.time_sync.url, DEFAULT_TIME_URL);
    assert_eq!(config.time_sync.attempts, 3);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file_rotation, LogRotation::Daily);
}

#[test]
fn test_file_overrides_defaults() {
    let file = parse(
        r#"
[display]
scientific_notation = true

[time_sync]
attempts = 7
"#,
    );
    let config = Config::resolve(file, no_env);

    assert_eq!(config.display.mode(), DisplayMode::Scientific);
    assert_eq!(config.time_sync.attempts, 7);
    // Untouched keys keep their defaults
    assert_eq!(config.time_sync.timeout_secs, 10);
}

#[test]
fn test_env_overrides_file() {
    let file = parse(
        r#"
[display]
scientific_notation = false

[time_sync]
url = "http://from-file/"

[logging]
level = "warn"
"#,
    );
    let env: HashMap<&str, &str> = HashMap::from([
        ("GAMEKIT_SCIENTIFIC", "true"),
        ("GAMEKIT_TIME_URL", "http://from-env/"),
        ("GAMEKIT_LOG_LEVEL", "trace"),
    ]);
    let config = Config::resolve(file, |key| env.get(key).map(|v| v.to_string()));

    assert!(config.display.scientific_notation);
    assert_eq!(config.time_sync.url, "http://from-env/");
    assert_eq!(config.logging.level, "trace");
}

#[test]
fn test_env_flag_can_disable() {
    let file = parse("[display]\nscientific_notation = true\n");
    let config = Config::resolve(file, |key| {
        (key == "GAMEKIT_SCIENTIFIC").then(|| "0".to_string())
    });

    assert!(!config.display.scientific_notation);
}

#[test]
fn test_zero_attempts_becomes_one() {
    let config = Config::resolve(parse("[time_sync]\nattempts = 0\n"), no_env);
    assert_eq!(config.time_sync.attempts, 1);
}

#[test]
fn test_unknown_rotation_falls_back_to_daily() {
    let config = Config::resolve(parse("[logging]\nfile_rotation = \"weekly\"\n"), no_env);
    assert_eq!(config.logging.file_rotation, LogRotation::Daily);
}

#[test]
fn test_rotation_parses_case_insensitively() {
    assert_eq!("Hourly".parse::<LogRotation>(), Ok(LogRotation::Hourly));
    assert_eq!(" never ".parse::<LogRotation>(), Ok(LogRotation::Never));
    assert!("weekly".parse::<LogRotation>().is_err());
}

#[test]
fn test_rotation_name_roundtrip() {
    for rotation in [LogRotation::Hourly, LogRotation::Daily, LogRotation::Never] {
        assert_eq!(rotation.as_str().parse::<LogRotation>(), Ok(rotation));
    }
}

#[test]
fn test_malformed_file_is_rejected() {
    let parsed: Result<FileConfig, _> = toml::from_str("[display]\nscientific_notation = maybe\n");
    assert!(parsed.is_err());
}
