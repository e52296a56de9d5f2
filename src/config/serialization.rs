//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

/// Quote a string as a TOML basic string
fn toml_string(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

impl Config {
    /// Serialize the full config, with comments, as written to config.toml
    pub fn to_toml(&self) -> String {
        format!(
            r#"# gamekit configuration

# Number display
[display]
# Render big numbers as 1.2e6 instead of 1.2M (GAMEKIT_SCIENTIFIC overrides)
scientific_notation = {scientific}

# Network time fetch
[time_sync]
url = {url}
attempts = {attempts}
timeout_secs = {timeout}
user_agent = {user_agent}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = {log_level}
# File logging (in addition to stderr)
file_enabled = {log_file_enabled}
file_dir = {log_file_dir}
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = {log_file_prefix}
"#,
            scientific = self.display.scientific_notation,
            url = toml_string(&self.time_sync.url),
            attempts = self.time_sync.attempts,
            timeout = self.time_sync.timeout_secs,
            user_agent = toml_string(&self.time_sync.user_agent),
            log_level = toml_string(&self.logging.level),
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = toml_string(&self.logging.file_dir.display().to_string()),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = toml_string(&self.logging.file_prefix),
        )
    }
}
