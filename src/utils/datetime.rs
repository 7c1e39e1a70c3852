//! Date and time formatting functions
//!
//! This module turns an absolute point in time into display strings for a
//! given locale and time zone. A small [`FormatConfig`] selects one of six
//! formatting presets (short or long date, optionally with minutes or seconds)
//! and may overlay a short time-zone name. On top of the absolute formatting
//! it offers relative-day output, where the calendar date is replaced with
//! "Today" or "Tomorrow" when the instant falls on one of those days in the
//! target zone.
//!
//! Two audiences are distinguished: the canonical one (`en-US`, UTC), which is
//! what [`LocaleConfig::default`] describes, and the viewer's own environment,
//! which [`format_date_time_local`] uses.

use chrono::{DateTime, Datelike, Offset, Timelike, Utc};
use chrono_tz::Tz;
use log::debug;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

pub use crate::constants::DATETIME_ALVEUS_ZONE;
use crate::constants::{DEFAULT_LOCALE, LABEL_IN, LABEL_TODAY, LABEL_TOMORROW};
use crate::utils::duration::{format_seconds, DurationConfig};
use crate::utils::locale::{self, DateField, LocaleProfile, PatternItem};

/// Short display label of [`DATETIME_ALVEUS_ZONE`], computed once on first use
pub static DATETIME_ALVEUS_ZONE_SHORT: Lazy<Option<String>> =
    Lazy::new(|| get_short_timezone_name(None, Some(DATETIME_ALVEUS_ZONE)));

/// Errors raised by the formatter.
#[derive(Debug, thiserror::Error)]
pub enum DateTimeError {
    #[error("Formatted date contains no year, month or day part")]
    MissingDateParts,

    #[error("Unknown time zone: {0}")]
    UnknownTimeZone(String),
}

/// Date style: numeric (`3/5/2021`) or with a spelled-out month (`March 5, 2021`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateStyle {
    #[default]
    Short,
    Long,
}

/// How much of the time of day to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimePrecision {
    #[default]
    None,
    Minutes,
    Seconds,
}

/// Selects the formatting preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    pub style: DateStyle,
    pub time: TimePrecision,
    /// Append a short zone name. `None` defers to the operation's default,
    /// which is off except for [`format_date_time_local`].
    pub timezone: Option<bool>,
}

impl FormatConfig {
    pub fn new(style: DateStyle, time: TimePrecision) -> Self {
        Self {
            style,
            time,
            timezone: None,
        }
    }

    pub fn with_timezone(mut self, timezone: bool) -> Self {
        self.timezone = Some(timezone);
        self
    }

    /// Preset for this configuration, `default_timezone` applies when unset
    pub fn preset(&self, default_timezone: bool) -> Preset {
        let base = match (self.style, self.time) {
            (DateStyle::Short, TimePrecision::None) => Preset::DATE_SHORT,
            (DateStyle::Short, TimePrecision::Minutes) => Preset::DATETIME_SHORT,
            (DateStyle::Short, TimePrecision::Seconds) => Preset::DATETIME_SHORT_WITH_SECONDS,
            (DateStyle::Long, TimePrecision::None) => Preset::DATE_FULL,
            (DateStyle::Long, TimePrecision::Minutes) => Preset::DATETIME_FULL,
            (DateStyle::Long, TimePrecision::Seconds) => Preset::DATETIME_FULL_WITH_SECONDS,
        };

        Preset {
            time_zone_name: self.timezone.unwrap_or(default_timezone),
            ..base
        }
    }
}

/// Bundle of field options a date is rendered with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub style: DateStyle,
    pub time: TimePrecision,
    /// Append the generic short zone name
    pub time_zone_name: bool,
}

impl Preset {
    pub const DATE_SHORT: Preset = Preset::base(DateStyle::Short, TimePrecision::None);
    pub const DATETIME_SHORT: Preset = Preset::base(DateStyle::Short, TimePrecision::Minutes);
    pub const DATETIME_SHORT_WITH_SECONDS: Preset = Preset::base(DateStyle::Short, TimePrecision::Seconds);
    pub const DATE_FULL: Preset = Preset::base(DateStyle::Long, TimePrecision::None);
    pub const DATETIME_FULL: Preset = Preset::base(DateStyle::Long, TimePrecision::Minutes);
    pub const DATETIME_FULL_WITH_SECONDS: Preset = Preset::base(DateStyle::Long, TimePrecision::Seconds);

    const fn base(style: DateStyle, time: TimePrecision) -> Self {
        Self {
            style,
            time,
            time_zone_name: false,
        }
    }
}

/// Semantic type of a [`FormattedPart`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PartKind {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    DayPeriod,
    TimeZoneName,
    Literal,
}

impl PartKind {
    fn is_date(self) -> bool {
        matches!(self, PartKind::Year | PartKind::Month | PartKind::Day)
    }
}

/// One piece of a formatted date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedPart {
    #[serde(rename = "type")]
    pub kind: PartKind,
    pub value: String,
}

impl FormattedPart {
    pub fn new(kind: PartKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    pub fn literal(value: impl Into<String>) -> Self {
        Self::new(PartKind::Literal, value)
    }
}

/// Concatenate part values into the final string
pub fn join_parts(parts: &[FormattedPart]) -> String {
    parts.iter().map(|p| p.value.as_str()).collect()
}

/// Locale and zone to render in
///
/// `None` means "the runtime's default". [`LocaleConfig::default`] is the
/// canonical audience, `en-US` in UTC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleConfig {
    pub locale: Option<String>,
    pub zone: Option<Tz>,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            locale: Some(DEFAULT_LOCALE.to_string()),
            zone: Some(Tz::UTC),
        }
    }
}

impl LocaleConfig {
    pub fn new(locale: Option<String>, zone: Option<Tz>) -> Self {
        Self { locale, zone }
    }

    /// The runtime's locale and zone
    pub fn runtime() -> Self {
        Self::new(None, None)
    }

    /// Build from names, validating the zone
    ///
    /// # Errors
    /// Returns [`DateTimeError::UnknownTimeZone`] if `zone` is not an IANA zone name
    pub fn from_names(locale: Option<&str>, zone: Option<&str>) -> Result<Self, DateTimeError> {
        let zone = zone
            .map(|name| {
                name.parse::<Tz>()
                    .map_err(|_| DateTimeError::UnknownTimeZone(name.to_string()))
            })
            .transpose()?;

        Ok(Self::new(locale.map(str::to_string), zone))
    }

    fn resolve(&self) -> (&'static LocaleProfile, Tz) {
        (
            locale::resolve_profile(self.locale.as_deref()),
            locale::resolve_zone(self.zone),
        )
    }
}

/// Format an instant as a sequence of semantic parts
///
/// # Arguments
/// * `instant` - Point in time to format
/// * `config` - Preset selection, the zone name is off unless requested
/// * `locale` - Locale and zone to render in
///
/// Joining the part values gives exactly [`format_date_time`].
pub fn format_date_time_parts(instant: DateTime<Utc>, config: &FormatConfig, locale: &LocaleConfig) -> Vec<FormattedPart> {
    let (profile, zone) = locale.resolve();
    render_parts(&instant.with_timezone(&zone), config.preset(false), profile)
}

/// Format an instant for a fixed audience
///
/// # Arguments
/// * `instant` - Point in time to format
/// * `config` - Preset selection
/// * `locale` - Locale and zone to render in, see [`LocaleConfig::default`]
///
/// # Returns
/// * `String` - e.g. `3/5/2021` or `March 5, 2021 at 2:30 PM`
pub fn format_date_time(instant: DateTime<Utc>, config: &FormatConfig, locale: &LocaleConfig) -> String {
    join_parts(&format_date_time_parts(instant, config, locale))
}

/// Format an instant in the runtime's locale and zone, zone name shown by default
pub fn format_date_time_local(instant: DateTime<Utc>, config: &FormatConfig) -> String {
    let (profile, zone) = LocaleConfig::runtime().resolve();
    join_parts(&render_parts(&instant.with_timezone(&zone), config.preset(true), profile))
}

/// Format an instant, replacing the date with "Today" or "Tomorrow" when it applies
///
/// Days are compared as calendar days in the target zone, evaluated against
/// the current time. See [`format_date_time_relative_at`].
///
/// # Errors
/// Returns [`DateTimeError::MissingDateParts`] if the formatted output has no
/// date fields to substitute
pub fn format_date_time_relative(
    instant: DateTime<Utc>,
    config: &FormatConfig,
    locale: &LocaleConfig,
) -> Result<String, DateTimeError> {
    format_date_time_relative_at(instant, config, locale, Utc::now())
}

/// Relative formatting evaluated at `now`
///
/// If the instant falls on the same calendar day as `now` in the target zone
/// the date is replaced with "Today", on the next day with "Tomorrow". For
/// "Today" with a time component, the remaining time is inserted after the
/// label (`Today in 2 hours, 30 minutes, 2:30 PM`). Any other day, past days
/// included, yields the plain [`format_date_time`] output.
pub fn format_date_time_relative_at(
    instant: DateTime<Utc>,
    config: &FormatConfig,
    locale: &LocaleConfig,
    now: DateTime<Utc>,
) -> Result<String, DateTimeError> {
    let (profile, zone) = locale.resolve();
    let target = instant.with_timezone(&zone);
    let mut parts = render_parts(&target, config.preset(false), profile);

    let days_diff = days_since_epoch(&target) - days_since_epoch(&now.with_timezone(&zone));
    let label = match days_diff {
        0 => LABEL_TODAY,
        1 => LABEL_TOMORROW,
        _ => return Ok(join_parts(&parts)),
    };
    debug!("Relative day {} for {} in {}", label, instant, zone);

    let end = substitute_date_span(&mut parts, label)?;

    if days_diff == 0 && config.time != TimePrecision::None {
        let remaining = (instant - now).num_milliseconds() as f64 / 1000.0;
        let duration = format_seconds(
            remaining,
            &DurationConfig::new(DateStyle::Long, config.time == TimePrecision::Seconds),
        );
        parts.insert(end, FormattedPart::literal(format!("{}{}", LABEL_IN, duration)));
    }

    Ok(join_parts(&parts))
}

/// Short zone label such as `CST` for the current instant
///
/// # Arguments
/// * `locale_tag` - Locale tag, runtime default when `None`
/// * `zone` - IANA zone name, runtime default when `None`
///
/// # Returns
/// * `Option<String>` - `None` when the zone name is unknown
pub fn get_short_timezone_name(locale_tag: Option<&str>, zone: Option<&str>) -> Option<String> {
    get_short_timezone_name_at(locale_tag, zone, Utc::now())
}

/// Short zone label at a given instant (abbreviations change with daylight saving)
pub fn get_short_timezone_name_at(locale_tag: Option<&str>, zone: Option<&str>, at: DateTime<Utc>) -> Option<String> {
    let tz = match zone {
        Some(name) => name.parse::<Tz>().ok()?,
        None => locale::runtime_zone(),
    };
    let profile = locale::resolve_profile(locale_tag);
    Some(short_zone_name(&at.with_timezone(&tz), profile))
}

/// Replace the year..day span with `label`, returning the index after it
fn substitute_date_span(parts: &mut Vec<FormattedPart>, label: &str) -> Result<usize, DateTimeError> {
    let (start, end) = date_span(parts)?;
    parts.drain(start..=end);
    parts.insert(start, FormattedPart::literal(label));
    Ok(start + 1)
}

/// Smallest and largest index of any year, month or day part
fn date_span(parts: &[FormattedPart]) -> Result<(usize, usize), DateTimeError> {
    let mut indices = parts
        .iter()
        .enumerate()
        .filter(|(_, part)| part.kind.is_date())
        .map(|(idx, _)| idx);

    let first = indices.next().ok_or(DateTimeError::MissingDateParts)?;
    let last = indices.last().unwrap_or(first);
    Ok((first, last))
}

fn days_since_epoch(dt: &DateTime<Tz>) -> i64 {
    i64::from(dt.date_naive().num_days_from_ce())
}

fn render_parts(local: &DateTime<Tz>, preset: Preset, profile: &LocaleProfile) -> Vec<FormattedPart> {
    let mut parts = Vec::with_capacity(12);
    let pattern = match preset.style {
        DateStyle::Short => profile.numeric_date,
        DateStyle::Long => profile.long_date,
    };
    push_date_parts(&mut parts, local, pattern, preset.style, profile);

    let has_time = preset.time != TimePrecision::None;
    if has_time {
        let connector = match preset.style {
            DateStyle::Short => profile.short_connector,
            DateStyle::Long => profile.long_connector,
        };
        parts.push(FormattedPart::literal(connector));
        push_time_parts(&mut parts, local, preset.time, profile);
    }

    if preset.time_zone_name {
        let connector = if has_time { " " } else { profile.zone_connector };
        parts.push(FormattedPart::literal(connector));
        parts.push(FormattedPart::new(PartKind::TimeZoneName, generic_zone_name(local, profile)));
    }

    parts
}

/// Render the date fields of `pattern`
pub(crate) fn push_date_parts(
    parts: &mut Vec<FormattedPart>,
    local: &DateTime<Tz>,
    pattern: &[PatternItem],
    style: DateStyle,
    profile: &LocaleProfile,
) {
    let numeric = style == DateStyle::Short;
    let pad = |value: u32| {
        if numeric && profile.pad_numeric {
            format!("{:02}", value)
        } else {
            value.to_string()
        }
    };

    for item in pattern {
        let part = match item {
            PatternItem::Literal(text) => FormattedPart::literal(*text),
            PatternItem::Field(DateField::Year) => FormattedPart::new(PartKind::Year, local.year().to_string()),
            PatternItem::Field(DateField::Month) if numeric => FormattedPart::new(PartKind::Month, pad(local.month())),
            PatternItem::Field(DateField::Month) => FormattedPart::new(PartKind::Month, profile.month_name(local)),
            PatternItem::Field(DateField::Day) => FormattedPart::new(PartKind::Day, pad(local.day())),
        };
        parts.push(part);
    }
}

fn push_time_parts(parts: &mut Vec<FormattedPart>, local: &DateTime<Tz>, time: TimePrecision, profile: &LocaleProfile) {
    if profile.hour12 {
        let (is_pm, hour) = local.hour12();
        parts.push(FormattedPart::new(PartKind::Hour, hour.to_string()));
        push_minutes_seconds(parts, local, time);
        parts.push(FormattedPart::literal(" "));
        parts.push(FormattedPart::new(PartKind::DayPeriod, if is_pm { "PM" } else { "AM" }));
    } else {
        parts.push(FormattedPart::new(PartKind::Hour, format!("{:02}", local.hour())));
        push_minutes_seconds(parts, local, time);
    }
}

fn push_minutes_seconds(parts: &mut Vec<FormattedPart>, local: &DateTime<Tz>, time: TimePrecision) {
    parts.push(FormattedPart::literal(":"));
    parts.push(FormattedPart::new(PartKind::Minute, format!("{:02}", local.minute())));
    if time == TimePrecision::Seconds {
        parts.push(FormattedPart::literal(":"));
        parts.push(FormattedPart::new(PartKind::Second, format!("{:02}", local.second())));
    }
}

/// Specific short name: tz database abbreviation, or a GMT offset
fn short_zone_name(local: &DateTime<Tz>, profile: &LocaleProfile) -> String {
    if local.timezone() == Tz::UTC {
        return "UTC".to_string();
    }

    let abbreviation = local.format("%Z").to_string();
    let alphabetic = !abbreviation.is_empty() && abbreviation.chars().all(|c| c.is_ascii_alphabetic());
    if profile.is_english() && alphabetic {
        abbreviation
    } else {
        gmt_offset(local.offset().fix().local_minus_utc())
    }
}

/// Generic short name: `CT` rather than `CST`/`CDT` where English has one
fn generic_zone_name(local: &DateTime<Tz>, profile: &LocaleProfile) -> String {
    let short = short_zone_name(local, profile);
    let west_of_utc = local.offset().fix().local_minus_utc() < 0;
    if profile.is_english() && west_of_utc {
        if let Some(generic) = north_american_generic(&short) {
            return generic.to_string();
        }
    }
    short
}

fn north_american_generic(abbreviation: &str) -> Option<&'static str> {
    match abbreviation {
        "EST" | "EDT" => Some("ET"),
        "CST" | "CDT" => Some("CT"),
        "MST" | "MDT" => Some("MT"),
        "PST" | "PDT" => Some("PT"),
        "AKST" | "AKDT" => Some("AKT"),
        _ => None,
    }
}

/// `GMT`, `GMT-6` or `GMT+5:30`
fn gmt_offset(offset_seconds: i32) -> String {
    if offset_seconds == 0 {
        return "GMT".to_string();
    }

    let sign = if offset_seconds < 0 { '-' } else { '+' };
    let total_minutes = offset_seconds.unsigned_abs() / 60;
    let (hours, minutes) = (total_minutes / 60, total_minutes % 60);
    if minutes == 0 {
        format!("GMT{}{}", sign, hours)
    } else {
        format!("GMT{}{}:{:02}", sign, hours, minutes)
    }
}
