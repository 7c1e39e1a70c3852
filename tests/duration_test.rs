use alveus_datetime::utils::datetime::DateStyle;
use alveus_datetime::utils::duration::*;

fn short(seconds: f64, show_seconds: bool) -> String {
    format_seconds(seconds, &DurationConfig::new(DateStyle::Short, show_seconds))
}

fn long(seconds: f64, show_seconds: bool) -> String {
    format_seconds(seconds, &DurationConfig::new(DateStyle::Long, show_seconds))
}

#[test]
fn test_default_config() {
    let config = DurationConfig::default();
    assert_eq!(config.style, DateStyle::Short);
    assert!(config.seconds);
}

#[test]
fn test_short_under_an_hour() {
    assert_eq!(short(45.0, true), "0:45");
    assert_eq!(short(0.0, true), "0:00");
    assert_eq!(short(65.0, true), "1:05");
    assert_eq!(short(600.0, true), "10:00");
    assert_eq!(short(3599.0, true), "59:59");
}

#[test]
fn test_short_with_hours() {
    assert_eq!(short(3600.0, true), "1:00:00");
    assert_eq!(short(3661.0, true), "1:01:01");
    assert_eq!(short(36_000.0 + 125.0, true), "10:02:05");
}

#[test]
fn test_short_without_seconds_always_shows_hours() {
    assert_eq!(short(45.0, false), "0:00");
    assert_eq!(short(125.0, false), "0:02");
    assert_eq!(short(3661.0, false), "1:01");
    assert_eq!(short(90_000.0, false), "25:00");
}

#[test]
fn test_short_truncates_fractions() {
    assert_eq!(short(59.999, true), "0:59");
    assert_eq!(short(3600.5, true), "1:00:00");
}

#[test]
fn test_long_all_units() {
    assert_eq!(long(3661.0, true), "1 hour, 1 minute, 1 second");
    assert_eq!(long(7322.0, true), "2 hours, 2 minutes, 2 seconds");
}

#[test]
fn test_long_without_seconds() {
    assert_eq!(long(125.0, false), "2 minutes");
    assert_eq!(long(3600.0, false), "1 hour, 0 minutes");
    assert_eq!(long(30.0, false), "0 minutes");
}

#[test]
fn test_long_suppresses_zero_hours_and_minutes_but_not_seconds() {
    assert_eq!(long(0.0, true), "0 seconds");
    assert_eq!(long(45.0, true), "45 seconds");
    assert_eq!(long(3600.0, true), "1 hour, 0 seconds");
    assert_eq!(long(3605.0, true), "1 hour, 5 seconds");
}

#[test]
fn test_negative_clamps_to_zero() {
    assert_eq!(short(-30.0, true), "0:00");
    assert_eq!(long(-3600.0, false), "0 minutes");
}
