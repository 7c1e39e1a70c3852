use alveus_datetime::config::Config;
use alveus_datetime::constants::{DEFAULT_LOCALE, DEFAULT_ZONE};
use alveus_datetime::utils::datetime::{DateStyle, TimePrecision};
use chrono_tz::Tz;
use std::io::Write;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.display.locale.as_deref(), Some(DEFAULT_LOCALE));
    assert_eq!(config.display.zone.as_deref(), Some(DEFAULT_ZONE));
    assert_eq!(config.display.style, DateStyle::Short);
    assert_eq!(config.display.time, TimePrecision::None);
    assert_eq!(config.display.timezone, None);
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Invalid zone should fail
    config.display.zone = Some("Atlantis/Capital".to_string());
    assert!(config.validate().is_err());

    // Reset and test invalid logging level
    config.display.zone = Some("America/Chicago".to_string());
    config.logging.level = "loud".to_string();
    assert!(config.validate().is_err());

    // Unsupported locales fall back instead of failing
    config.logging.level = "debug".to_string();
    config.display.locale = Some("tlh".to_string());
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("locale = \"en-US\""));
    assert!(toml_str.contains("style = \"short\""));
    assert!(toml_str.contains("time = \"none\""));
}

#[test]
fn test_partial_config_deserialization() {
    // Test that partial TOML configs merge with defaults
    let partial_toml = r#"
[display]
zone = "America/Chicago"
style = "long"
time = "minutes"
timezone = true

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert_eq!(config.display.zone.as_deref(), Some("America/Chicago"));
    assert_eq!(config.display.style, DateStyle::Long);
    assert_eq!(config.display.time, TimePrecision::Minutes);
    assert_eq!(config.display.timezone, Some(true));
    assert!(config.logging.enabled);

    // Check that unspecified values use defaults
    assert_eq!(config.display.locale.as_deref(), Some(DEFAULT_LOCALE));
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_empty_config_deserialization() {
    // Test that empty TOML uses all defaults
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.display.locale, default_config.display.locale);
    assert_eq!(config.display.zone, default_config.display.zone);
    assert_eq!(config.display.style, default_config.display.style);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
}

#[test]
fn test_library_configs_from_display_section() {
    let config: Config = toml::from_str(
        r#"
[display]
locale = "en-GB"
zone = "Europe/London"
time = "seconds"
"#,
    )
    .unwrap();

    let format = config.format_config();
    assert_eq!(format.style, DateStyle::Short);
    assert_eq!(format.time, TimePrecision::Seconds);
    assert_eq!(format.timezone, None);

    let locale = config.locale_config().unwrap();
    assert_eq!(locale.locale.as_deref(), Some("en-GB"));
    assert_eq!(locale.zone, Some(Tz::Europe__London));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[display]\nzone = \"Asia/Tokyo\"\nstyle = \"long\"").unwrap();

    let config = Config::load_from_file(file.path()).unwrap();
    assert_eq!(config.display.zone.as_deref(), Some("Asia/Tokyo"));
    assert_eq!(config.display.style, DateStyle::Long);
}

#[test]
fn test_load_from_file_rejects_invalid() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[display]\nzone = \"Nowhere/Special\"").unwrap();
    assert!(Config::load_from_file(file.path()).is_err());

    assert!(Config::load_from_file("/definitely/not/here.toml").is_err());
}

#[test]
fn test_generate_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    Config::generate_default_config(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# alveus-datetime Configuration File"));

    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.display.locale.as_deref(), Some(DEFAULT_LOCALE));
}
