//! Logging setup
//!
//! The library only talks to the `log` facade. The binary installs a `fern`
//! dispatcher: with logging enabled everything at the configured level goes to
//! a log file in the user cache directory, otherwise only warnings and errors
//! reach stderr.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use log::LevelFilter;

use crate::config::LoggingConfig;
use crate::constants::{APP_NAME, LOG_FILE_NAME};

/// Build the dispatcher described by `config`, logging to `log_path` when enabled
pub fn dispatch(config: &LoggingConfig, log_path: &Path) -> Result<fern::Dispatch> {
    let base = fern::Dispatch::new().format(|out, message, record| {
        out.finish(format_args!(
            "[{} {} {}] {}",
            Utc::now().format("%H:%M:%S%.3f"),
            record.level(),
            record.target(),
            message
        ))
    });

    if !config.enabled {
        return Ok(base.level(LevelFilter::Warn).chain(std::io::stderr()));
    }

    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }
    let file = fern::log_file(log_path)
        .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

    Ok(base.level(config.level_filter()?).chain(file))
}

/// Install the global logger
pub fn init(config: &LoggingConfig) -> Result<()> {
    let path = get_log_file_path()?;
    dispatch(config, &path)?
        .apply()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))
}

/// Location of the log file
pub fn get_log_file_path() -> Result<PathBuf> {
    dirs::cache_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine cache directory"))
        .map(|dir| dir.join(APP_NAME).join(LOG_FILE_NAME))
}
