//! Configuration management for alveus-datetime
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{APP_NAME, CONFIG_FILE_LOCAL, CONFIG_FILE_NAME, CONFIG_GENERATED, DEFAULT_LOCALE, DEFAULT_ZONE};
use crate::utils::datetime::{DateStyle, FormatConfig, LocaleConfig, TimePrecision};
use crate::utils::locale;
use anyhow::{Context, Result};
use log::{warn, LevelFilter};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Locale tag, e.g. "en-US". Unset means the system locale.
    pub locale: Option<String>,
    /// IANA time zone, e.g. "America/Chicago". Unset means the system zone.
    pub zone: Option<String>,
    /// Date style: "short" or "long"
    pub style: DateStyle,
    /// Time of day to show: "none", "minutes" or "seconds"
    pub time: TimePrecision,
    /// Append a short zone name
    pub timezone: Option<bool>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write logs to the log file
    pub enabled: bool,
    /// Level filter: "error", "warn", "info", "debug" or "trace"
    pub level: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            locale: Some(DEFAULT_LOCALE.to_string()),
            zone: Some(DEFAULT_ZONE.to_string()),
            style: DateStyle::Short,
            time: TimePrecision::None,
            timezone: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parsed level filter
    pub fn level_filter(&self) -> Result<LevelFilter> {
        self.level
            .parse::<LevelFilter>()
            .map_err(|_| anyhow::anyhow!("Invalid logging level '{}'", self.level))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file();

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Option<PathBuf> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(CONFIG_FILE_LOCAL);
        if current_dir_config.exists() {
            return Some(current_dir_config);
        }

        // 2. Check XDG config directory
        if let Ok(config_dir) = Self::get_xdg_config_dir() {
            let xdg_config = config_dir.join(CONFIG_FILE_NAME);
            if xdg_config.exists() {
                return Some(xdg_config);
            }
        }

        None
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(zone) = &self.display.zone {
            if zone.parse::<chrono_tz::Tz>().is_err() {
                anyhow::bail!("Invalid zone '{}': not an IANA time zone", zone);
            }
        }

        if let Some(tag) = &self.display.locale {
            if !locale::is_supported_locale(tag) {
                warn!(
                    "Locale '{}' is not supported, dates will use {}. Supported: {}",
                    tag,
                    DEFAULT_LOCALE,
                    locale::supported_locales().join(", ")
                );
            }
        }

        self.logging.level_filter()?;

        Ok(())
    }

    /// Preset selection from the display section
    pub fn format_config(&self) -> FormatConfig {
        FormatConfig {
            style: self.display.style,
            time: self.display.time,
            timezone: self.display.timezone,
        }
    }

    /// Locale and zone from the display section
    pub fn locale_config(&self) -> Result<LocaleConfig> {
        LocaleConfig::from_names(self.display.locale.as_deref(), self.display.zone.as_deref())
            .context("Invalid display configuration")
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# alveus-datetime Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(APP_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join(CONFIG_FILE_NAME))
    }
}
