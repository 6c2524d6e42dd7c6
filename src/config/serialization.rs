//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::{Config, THEMES};

/// Quote a string as a TOML basic string
fn quoted(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escaped)
}

impl Config {
    /// Render the config as a commented TOML file.
    ///
    /// `config --reset` writes `Config::default().to_toml()`; `config --update`
    /// writes the effective config, so user values carry over into any newly
    /// added sections.
    pub fn to_toml(&self) -> String {
        format!(
            r#"# roster configuration

# Student Directory Service base URL (env: ROSTER_SERVICE_URL)
service_url = {service_url}

# Per-request timeout in seconds (env: ROSTER_TIMEOUT)
request_timeout_secs = {timeout}

# Theme: {themes} (env: ROSTER_THEME)
theme = {theme}

# In-memory demo directory (ROSTER_DEMO=1 or `roster serve-demo`)
[demo]
bind_addr = {demo_bind}
seed = {demo_seed}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = {log_level}
# JSON file logging (in addition to the TUI buffer or stderr)
file_enabled = {log_file_enabled}
file_dir = {log_file_dir}
file_rotation = {log_file_rotation}  # hourly, daily, never
file_prefix = {log_file_prefix}
"#,
            service_url = quoted(&self.service_url),
            timeout = self.request_timeout_secs,
            themes = THEMES.join(", "),
            theme = quoted(&self.theme),
            demo_bind = quoted(&self.demo.bind_addr.to_string()),
            demo_seed = self.demo.seed,
            log_level = quoted(&self.logging.level),
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = quoted(&self.logging.file_dir.display().to_string()),
            log_file_rotation = quoted(self.logging.file_rotation.as_str()),
            log_file_prefix = quoted(&self.logging.file_prefix),
        )
    }
}
