//! Duration formatting
//!
//! Renders a count of seconds either as a clock-like `h:mm:ss` string or as a
//! comma-separated sentence (`1 hour, 1 minute, 1 second`).

use serde::{Deserialize, Serialize};

use crate::constants::{UNIT_HOUR, UNIT_MINUTE, UNIT_SECOND};
use crate::utils::datetime::DateStyle;

/// Options for [`format_seconds`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DurationConfig {
    /// `Short` renders `h:mm:ss`, `Long` renders spelled-out units
    pub style: DateStyle,
    /// Whether the seconds component is shown
    pub seconds: bool,
}

impl Default for DurationConfig {
    fn default() -> Self {
        Self {
            style: DateStyle::Short,
            seconds: true,
        }
    }
}

impl DurationConfig {
    pub fn new(style: DateStyle, seconds: bool) -> Self {
        Self { style, seconds }
    }
}

/// Whole hours, minutes and seconds of a non-negative second count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Components {
    hours: u64,
    minutes: u64,
    seconds: u64,
}

impl Components {
    fn from_seconds(total: f64) -> Self {
        // Negative and NaN inputs clamp to zero; fractions truncate.
        let total = if total.is_finite() && total > 0.0 { total } else { 0.0 };
        Self {
            hours: (total / 3600.0).floor() as u64,
            minutes: ((total % 3600.0) / 60.0).floor() as u64,
            seconds: (total % 60.0).floor() as u64,
        }
    }
}

/// Format a number of seconds for display
///
/// # Arguments
/// * `seconds` - Seconds to format, fractions are truncated
/// * `config` - Style and whether to show the seconds component
///
/// # Short style
/// Colon-joined. The hours component is dropped only when seconds are shown
/// and there are no whole hours. Minutes are padded to two digits whenever the
/// hours component is present. Seconds are always padded to two digits.
///
/// # Long style
/// Comma-joined clauses. Hours appear only when non-zero, minutes when
/// non-zero or when seconds are hidden, seconds whenever they are requested.
///
/// # Examples
/// ```
/// use alveus_datetime::utils::datetime::DateStyle;
/// use alveus_datetime::utils::duration::{format_seconds, DurationConfig};
///
/// assert_eq!(format_seconds(45.0, &DurationConfig::default()), "0:45");
/// assert_eq!(
///     format_seconds(3661.0, &DurationConfig::new(DateStyle::Long, true)),
///     "1 hour, 1 minute, 1 second"
/// );
/// ```
pub fn format_seconds(seconds: f64, config: &DurationConfig) -> String {
    let c = Components::from_seconds(seconds);
    match config.style {
        DateStyle::Short => format_short(c, config.seconds),
        DateStyle::Long => format_long(c, config.seconds),
    }
}

fn format_short(c: Components, show_seconds: bool) -> String {
    let show_hours = !show_seconds || c.hours > 0;
    let mut parts = Vec::with_capacity(3);

    if show_hours {
        parts.push(c.hours.to_string());
    }
    let minute_width = if show_hours { 2 } else { 1 };
    parts.push(format!("{:0width$}", c.minutes, width = minute_width));
    if show_seconds {
        parts.push(format!("{:02}", c.seconds));
    }

    parts.join(":")
}

fn format_long(c: Components, show_seconds: bool) -> String {
    let mut parts = Vec::with_capacity(3);

    if c.hours > 0 {
        parts.push(unit(c.hours, UNIT_HOUR));
    }
    if !show_seconds || c.minutes > 0 {
        parts.push(unit(c.minutes, UNIT_MINUTE));
    }
    if show_seconds {
        parts.push(unit(c.seconds, UNIT_SECOND));
    }

    parts.join(", ")
}

fn unit(value: u64, name: &str) -> String {
    if value == 1 {
        format!("{} {}", value, name)
    } else {
        format!("{} {}s", value, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_components_truncate() {
        let c = Components::from_seconds(3725.9);
        assert_eq!(
            c,
            Components {
                hours: 1,
                minutes: 2,
                seconds: 5
            }
        );
    }

    #[test]
    fn test_components_clamp() {
        assert_eq!(Components::from_seconds(-30.0), Components::from_seconds(0.0));
        assert_eq!(Components::from_seconds(f64::NAN), Components::from_seconds(0.0));
    }

    #[test]
    fn test_unit_plural() {
        assert_eq!(unit(0, UNIT_SECOND), "0 seconds");
        assert_eq!(unit(1, UNIT_HOUR), "1 hour");
        assert_eq!(unit(2, UNIT_MINUTE), "2 minutes");
    }
}
