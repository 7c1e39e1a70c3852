//! Constants used throughout the crate
//!
//! This module centralizes display labels, default locale settings and file
//! names so the formatter, the configuration layer and the CLI agree on them.

// Organizational zone
/// IANA identifier of the sanctuary's canonical time zone
pub const DATETIME_ALVEUS_ZONE: &str = "America/Chicago";

// Defaults for the canonical audience
pub const DEFAULT_LOCALE: &str = "en-US";
pub const DEFAULT_ZONE: &str = "UTC";

// Relative-day labels
pub const LABEL_TODAY: &str = "Today";
pub const LABEL_TOMORROW: &str = "Tomorrow";
/// Connector placed before the remaining duration on same-day relative output
pub const LABEL_IN: &str = " in ";

// Partial dates
pub const LABEL_UNKNOWN: &str = "Unknown";
pub const PARTIAL_DATE_SEPARATOR: char = '-';

// Duration units (singular form; plural adds "s")
pub const UNIT_HOUR: &str = "hour";
pub const UNIT_MINUTE: &str = "minute";
pub const UNIT_SECOND: &str = "second";

// Locale environment variables, in precedence order
pub const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_TIME", "LANG"];

// Files
pub const APP_NAME: &str = "alveus-datetime";
pub const CONFIG_FILE_LOCAL: &str = "alveus-datetime.toml";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOG_FILE_NAME: &str = "alveus-datetime.log";

// Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
