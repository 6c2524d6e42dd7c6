//! Configuration tests
//!
//! The round-trip tests guard `to_toml()`: when a field is added to `Config`
//! but not to the template (or the template stops parsing), they fail.

use super::*;

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_config_roundtrip_default() {
    let toml_str = Config::default().to_toml();

    let parsed = Config::parse_file(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );
}

#[test]
fn test_config_roundtrip_preserves_values() {
    let mut config = Config::default();
    config.service_url = "http://students.internal:9000".to_string();
    config.request_timeout_secs = 3;
    config.theme = "nord".to_string();
    config.demo.bind_addr = "0.0.0.0:9100".parse().unwrap();
    config.demo.seed = false;
    config.logging.level = "debug".to_string();
    config.logging.file_enabled = true;
    config.logging.file_dir = PathBuf::from("C:\\logs\\roster");
    config.logging.file_rotation = LogRotation::Hourly;

    let file = Config::parse_file(&config.to_toml()).unwrap();

    assert_eq!(file.service_url.as_deref(), Some("http://students.internal:9000"));
    assert_eq!(file.request_timeout_secs, Some(3));
    assert_eq!(file.theme.as_deref(), Some("nord"));

    let demo = DemoConfig::from_file(file.demo);
    assert_eq!(demo.bind_addr.to_string(), "0.0.0.0:9100");
    assert!(!demo.seed);

    let logging = LoggingConfig::from_file(file.logging);
    assert_eq!(logging.level, "debug");
    assert!(logging.file_enabled);
    assert_eq!(logging.file_dir, PathBuf::from("C:\\logs\\roster"));
    assert_eq!(logging.file_rotation, LogRotation::Hourly);
    assert_eq!(logging.file_prefix, "roster");
}

// ─────────────────────────────────────────────────────────────────────────────
// Defaults and partial files
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_empty_file_uses_defaults() {
    let file = Config::parse_file("").unwrap();
    let logging = LoggingConfig::from_file(file.logging);
    let demo = DemoConfig::from_file(file.demo);

    assert_eq!(logging.level, "info");
    assert!(!logging.file_enabled);
    assert_eq!(logging.file_rotation, LogRotation::Daily);
    assert_eq!(demo.bind_addr.to_string(), DEFAULT_DEMO_BIND);
    assert!(demo.seed);
}

#[test]
fn test_partial_sections() {
    let file = Config::parse_file(
        r#"
service_url = "http://10.0.0.5:8000/"

[logging]
file_rotation = "NEVER"
"#,
    )
    .unwrap();

    assert_eq!(file.service_url.as_deref(), Some("http://10.0.0.5:8000/"));
    assert_eq!(file.request_timeout_secs, None);
    let logging = LoggingConfig::from_file(file.logging);
    assert_eq!(logging.file_rotation, LogRotation::Never);
    assert_eq!(logging.level, "info");
}

#[test]
fn test_malformed_file_is_an_error() {
    assert!(Config::parse_file("service_url = http://no-quotes").is_err());
    assert!(Config::parse_file("request_timeout_secs = \"ten\"").is_err());
}

#[test]
fn test_invalid_demo_bind_falls_back() {
    let demo = DemoConfig::from_file(Some(FileDemo {
        bind_addr: Some("not an address".to_string()),
        seed: None,
    }));
    assert_eq!(demo.bind_addr.to_string(), DEFAULT_DEMO_BIND);
}

#[test]
fn test_log_rotation_parse() {
    assert_eq!(LogRotation::parse("hourly"), LogRotation::Hourly);
    assert_eq!(LogRotation::parse("Daily"), LogRotation::Daily);
    assert_eq!(LogRotation::parse("weekly"), LogRotation::Daily);
}

#[test]
fn test_theme_name_normalized() {
    assert_eq!(theme_name("Dracula"), "dracula");
    assert_eq!(theme_name(" gruvbox "), "gruvbox");
    assert_eq!(theme_name("solarized"), "auto");
}

#[test]
fn test_zero_timeout_falls_back() {
    assert_eq!(timeout_secs(0), DEFAULT_TIMEOUT_SECS);
    assert_eq!(timeout_secs(3), 3);

    let file = Config::parse_file("request_timeout_secs = 0").unwrap();
    let config = Config::from_file_config(file);
    assert_eq!(config.request_timeout_secs, DEFAULT_TIMEOUT_SECS);
    assert!(!config.request_timeout().is_zero());
}

#[test]
fn test_filter_directive() {
    let logging = LoggingConfig {
        level: "debug".to_string(),
        ..LoggingConfig::default()
    };
    assert_eq!(
        logging.filter_directive(),
        "roster=debug,reqwest=warn,hyper=warn"
    );
}
