//! Configuration for the roster client
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/roster/config.toml)
//! 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod logging;
mod serialization;

#[cfg(test)]
mod tests;

pub use logging::{FileLogging, LogRotation, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_SERVICE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_DEMO_BIND: &str = "127.0.0.1:8000";

/// Theme names accepted by `theme = ...`
pub const THEMES: [&str; 4] = ["auto", "dracula", "nord", "gruvbox"];

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Student Directory Service
    pub service_url: String,

    /// Per-request timeout
    pub request_timeout_secs: u64,

    /// Theme name, one of `THEMES`
    pub theme: String,

    /// Whether to run the TUI (headless prints the roster and exits)
    pub enable_tui: bool,

    /// Demo mode: serve an in-memory directory and point the client at it
    pub demo_mode: bool,

    /// In-memory directory settings
    pub demo: DemoConfig,

    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            theme: "auto".to_string(),
            enable_tui: true,
            demo_mode: false,
            demo: DemoConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// `[demo]` settings
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Address the in-memory directory binds to
    pub bind_addr: SocketAddr,
    /// Start with a handful of sample students
    pub seed: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_demo_bind(),
            seed: true,
        }
    }
}

fn default_demo_bind() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8000))
}

/// `[demo]` as loaded from the config file
#[derive(Debug, Deserialize, Default)]
pub struct FileDemo {
    pub bind_addr: Option<String>,
    pub seed: Option<bool>,
}

impl DemoConfig {
    pub fn from_file(file: Option<FileDemo>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        let bind_addr = match file.bind_addr {
            Some(addr) => addr.parse().unwrap_or_else(|_| {
                eprintln!(
                    "Warning: invalid [demo] bind_addr {:?}, using {}",
                    addr, DEFAULT_DEMO_BIND
                );
                defaults.bind_addr
            }),
            None => defaults.bind_addr,
        };

        Self {
            bind_addr,
            seed: file.seed.unwrap_or(defaults.seed),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub service_url: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub theme: Option<String>,

    /// Optional [demo] section
    pub demo: Option<FileDemo>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

/// Read a boolean runtime flag ("1" or "true")
fn env_flag(name: &str) -> Option<bool> {
    std::env::var(name)
        .ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
}

/// Normalize a theme name, falling back to "auto" for unknown names
fn theme_name(name: &str) -> String {
    let lower = name.trim().to_lowercase();
    if THEMES.contains(&lower.as_str()) {
        lower
    } else {
        eprintln!("Warning: unknown theme {:?}, using auto", name);
        "auto".to_string()
    }
}

/// Zero is not a usable timeout; fall back to the default
fn timeout_secs(secs: u64) -> u64 {
    if secs == 0 {
        eprintln!(
            "Warning: request timeout of 0s, using {}s",
            DEFAULT_TIMEOUT_SECS
        );
        DEFAULT_TIMEOUT_SECS
    } else {
        secs
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/roster/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("roster").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }

        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Parse config file contents
    pub(crate) fn parse_file(contents: &str) -> Result<FileConfig, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Load file config if it exists
    ///
    /// A config file that exists but cannot be parsed exits the process with
    /// a readable message instead of silently falling back to defaults.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match Self::parse_file(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                    eprintln!("║  CONFIG ERROR - Failed to parse configuration file          ║");
                    eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                    eprintln!("  File: {}\n", path.display());
                    eprintln!("  Error: {}\n", e);
                    eprintln!("  Tip: Check for:\n");
                    eprintln!("    - Missing quotes around string values");
                    eprintln!("    - Invalid boolean values (use true/false)");
                    eprintln!("    - Typos in section names\n");
                    eprintln!("  To reset, run: roster config --reset\n");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                eprintln!("║  CONFIG ERROR - Cannot read configuration file              ║");
                eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                eprintln!("  File: {}\n", path.display());
                eprintln!("  Error: {}\n", e);
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: env > file > defaults
    pub fn from_env() -> Self {
        Self::from_file_config(Self::load_file_config())
    }

    /// Layer env vars over an already-parsed file config
    pub(crate) fn from_file_config(file: FileConfig) -> Self {
        // Service URL: env > file > default
        let service_url = std::env::var("ROSTER_SERVICE_URL")
            .ok()
            .or(file.service_url)
            .unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string());

        // Timeout: env > file > default
        let request_timeout_secs = std::env::var("ROSTER_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .or(file.request_timeout_secs)
            .map(timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        // Theme: env > file > default
        let theme = std::env::var("ROSTER_THEME")
            .ok()
            .or(file.theme)
            .map(|t| theme_name(&t))
            .unwrap_or_else(|| "auto".to_string());

        // TUI toggle and demo mode: env only (runtime flags)
        let enable_tui = !env_flag("ROSTER_NO_TUI").unwrap_or(false);
        let demo_mode = env_flag("ROSTER_DEMO").unwrap_or(false);

        Self {
            service_url,
            request_timeout_secs,
            theme,
            enable_tui,
            demo_mode,
            demo: DemoConfig::from_file(file.demo),
            logging: LoggingConfig::from_file(file.logging),
        }
    }
}
