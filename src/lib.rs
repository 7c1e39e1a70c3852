//! alveus-datetime - Locale- and timezone-aware date formatting
//!
//! This library formats points in time for display: fixed-style dates and
//! times in a chosen locale and zone, "Today"/"Tomorrow" relative output,
//! partial dates with unknown month or day, and durations in compact or
//! spelled-out form.
//!
//! # Modules
//!
//! * [`config`] - Configuration file handling for the CLI
//! * [`constants`] - Labels, defaults and the organizational time zone
//! * [`logger`] - Logging setup
//! * [`utils`] - The formatting functions themselves

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Logging setup for the command-line binary
pub mod logger;

/// Date, time, partial date and duration formatting
pub mod utils;

pub use utils::date::{format_partial_date_string, parse_partial_date_string, sort_partial_date_string};
pub use utils::datetime::{
    format_date_time, format_date_time_local, format_date_time_parts, format_date_time_relative,
    get_short_timezone_name, DateStyle, DateTimeError, FormatConfig, FormattedPart, LocaleConfig, PartKind,
    TimePrecision, DATETIME_ALVEUS_ZONE, DATETIME_ALVEUS_ZONE_SHORT,
};
pub use utils::duration::{format_seconds, DurationConfig};
