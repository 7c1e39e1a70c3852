//! Partial date utility functions
//!
//! A partial date is a `YYYY`, `YYYY-MM` or `YYYY-MM-DD` string where month
//! and day may be unknown. These helpers resolve such strings to concrete
//! dates, order them (unknown dates last, most recent first) and render them
//! showing only the components that were given.

use std::cmp::Ordering;

use chrono::{DateTime, Months, NaiveDate, TimeDelta, Utc};
use chrono_tz::Tz;

use crate::constants::{LABEL_UNKNOWN, PARTIAL_DATE_SEPARATOR};
use crate::utils::datetime::{join_parts, push_date_parts, DateStyle};
use crate::utils::locale::{self, DateField, PatternItem};

/// Components present in a partial date string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PartialDate {
    year: i32,
    month: Option<i64>,
    day: Option<i64>,
}

impl PartialDate {
    fn parse(partial: &str) -> Option<Self> {
        let mut pieces = partial.split(PARTIAL_DATE_SEPARATOR);
        let year = pieces.next()?.trim().parse::<i32>().ok()?;
        let month = pieces.next().and_then(|s| s.trim().parse::<i64>().ok());
        let day = pieces.next().and_then(|s| s.trim().parse::<i64>().ok());
        Some(Self { year, month, day })
    }

    /// Midnight UTC of the resolved date
    ///
    /// Out-of-range months and days roll over into neighbouring months and
    /// years, so `2021-13` is January 2022 and `2021-02-30` is 2 March 2021.
    fn resolve(&self) -> Option<DateTime<Utc>> {
        let month_offset = self.month.unwrap_or(1) - 1;
        let day_offset = self.day.unwrap_or(1) - 1;

        let first = NaiveDate::from_ymd_opt(self.year, 1, 1)?;
        let months = Months::new(u32::try_from(month_offset.unsigned_abs()).ok()?);
        let month_start = if month_offset >= 0 {
            first.checked_add_months(months)?
        } else {
            first.checked_sub_months(months)?
        };
        let date = month_start.checked_add_signed(TimeDelta::try_days(day_offset)?)?;

        Some(date.and_hms_opt(0, 0, 0)?.and_utc())
    }
}

/// Parse a partial date string into a concrete date
///
/// # Arguments
/// * `partial` - `YYYY`, `YYYY-MM` or `YYYY-MM-DD`
///
/// # Returns
/// * `Option<DateTime<Utc>>` - Midnight UTC on the given day, with a missing
///   month or day taken as January / the 1st. `None` if the year does not parse.
pub fn parse_partial_date_string(partial: &str) -> Option<DateTime<Utc>> {
    PartialDate::parse(partial)?.resolve()
}

/// Order partial dates most recent first, unknown dates last
///
/// Suitable for `slice::sort_by`. Strings that do not parse count as unknown.
pub fn sort_partial_date_string(a: Option<&str>, b: Option<&str>) -> Ordering {
    let resolve = |value: Option<&str>| value.and_then(parse_partial_date_string);

    match (resolve(a), resolve(b)) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => b.cmp(&a),
    }
}

/// Format a partial date in `en-US`, e.g. `June 1999`
///
/// Returns `"Unknown"` for `None` or an unparseable string.
pub fn format_partial_date_string(partial: Option<&str>) -> String {
    format_partial_date_string_for(partial, Some(locale::default_profile().tag))
}

/// Format a partial date in the given locale (runtime locale when `None`)
///
/// The year is always shown, the month only when present and the day only
/// when present. A day brings its month along.
pub fn format_partial_date_string_for(partial: Option<&str>, locale_tag: Option<&str>) -> String {
    let Some(parsed) = partial.and_then(PartialDate::parse) else {
        return LABEL_UNKNOWN.to_string();
    };
    let Some(date) = parsed.resolve() else {
        return LABEL_UNKNOWN.to_string();
    };

    let profile = locale::resolve_profile(locale_tag);
    let pattern = if parsed.day.is_some() {
        profile.long_date.to_vec()
    } else if parsed.month.is_some() {
        profile.year_month_pattern()
    } else {
        vec![PatternItem::Field(DateField::Year)]
    };

    let mut parts = Vec::with_capacity(pattern.len());
    push_date_parts(&mut parts, &date.with_timezone(&Tz::UTC), &pattern, DateStyle::Long, profile);
    join_parts(&parts)
}
