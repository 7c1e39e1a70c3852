//! Locale profiles and runtime defaults
//!
//! A locale profile captures how one locale lays out a calendar date: the
//! order of year, month and day, the separators between them, whether the
//! clock is 12- or 24-hour and which words join a date to a time. Month names
//! are produced by chrono's localized formatting so they follow the locale
//! database rather than a hand-kept list.
//!
//! Profiles are looked up by BCP 47-ish tags (`en-US`, `de_DE.UTF-8`, `fr`).
//! Unknown tags fall back to `en-US`, mirroring how locale-aware formatters
//! fall back to their default locale.

use std::fmt::Display;

use chrono::{DateTime, Locale, TimeZone};
use chrono_tz::Tz;
use log::{debug, warn};

use crate::constants::{DEFAULT_LOCALE, LOCALE_ENV_VARS};

/// Calendar fields a date pattern can reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    Year,
    Month,
    Day,
}

/// One element of a date pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternItem {
    Field(DateField),
    Literal(&'static str),
}

const Y: PatternItem = PatternItem::Field(DateField::Year);
const M: PatternItem = PatternItem::Field(DateField::Month);
const D: PatternItem = PatternItem::Field(DateField::Day);

const fn lit(s: &'static str) -> PatternItem {
    PatternItem::Literal(s)
}

/// Layout rules for a single locale
#[derive(Debug)]
pub struct LocaleProfile {
    /// Canonical tag, e.g. `en-US`
    pub tag: &'static str,
    /// Locale used for month names
    pub chrono_locale: Locale,
    /// Numeric date layout (short style)
    pub numeric_date: &'static [PatternItem],
    /// Zero-pad numeric month and day to two digits
    pub pad_numeric: bool,
    /// Date layout with a spelled-out month (long style)
    pub long_date: &'static [PatternItem],
    /// Joins date and time in short style
    pub short_connector: &'static str,
    /// Joins date and time in long style
    pub long_connector: &'static str,
    /// Joins a date-only rendering to a zone name
    pub zone_connector: &'static str,
    /// 12-hour clock with a day period
    pub hour12: bool,
}

static PROFILES: [LocaleProfile; 8] = [
    LocaleProfile {
        tag: "en-US",
        chrono_locale: Locale::en_US,
        numeric_date: &[M, lit("/"), D, lit("/"), Y],
        pad_numeric: false,
        long_date: &[M, lit(" "), D, lit(", "), Y],
        short_connector: ", ",
        long_connector: " at ",
        zone_connector: ", ",
        hour12: true,
    },
    LocaleProfile {
        tag: "en-GB",
        chrono_locale: Locale::en_GB,
        numeric_date: &[D, lit("/"), M, lit("/"), Y],
        pad_numeric: true,
        long_date: &[D, lit(" "), M, lit(" "), Y],
        short_connector: ", ",
        long_connector: " at ",
        zone_connector: ", ",
        hour12: false,
    },
    LocaleProfile {
        tag: "de-DE",
        chrono_locale: Locale::de_DE,
        numeric_date: &[D, lit("."), M, lit("."), Y],
        pad_numeric: false,
        long_date: &[D, lit(". "), M, lit(" "), Y],
        short_connector: ", ",
        long_connector: " um ",
        zone_connector: ", ",
        hour12: false,
    },
    LocaleProfile {
        tag: "fr-FR",
        chrono_locale: Locale::fr_FR,
        numeric_date: &[D, lit("/"), M, lit("/"), Y],
        pad_numeric: true,
        long_date: &[D, lit(" "), M, lit(" "), Y],
        short_connector: " ",
        long_connector: " à ",
        zone_connector: " ",
        hour12: false,
    },
    LocaleProfile {
        tag: "es-ES",
        chrono_locale: Locale::es_ES,
        numeric_date: &[D, lit("/"), M, lit("/"), Y],
        pad_numeric: false,
        long_date: &[D, lit(" de "), M, lit(" de "), Y],
        short_connector: ", ",
        long_connector: ", ",
        zone_connector: ", ",
        hour12: false,
    },
    LocaleProfile {
        tag: "it-IT",
        chrono_locale: Locale::it_IT,
        numeric_date: &[D, lit("/"), M, lit("/"), Y],
        pad_numeric: false,
        long_date: &[D, lit(" "), M, lit(" "), Y],
        short_connector: ", ",
        long_connector: " alle ore ",
        zone_connector: ", ",
        hour12: false,
    },
    LocaleProfile {
        tag: "nl-NL",
        chrono_locale: Locale::nl_NL,
        numeric_date: &[D, lit("-"), M, lit("-"), Y],
        pad_numeric: false,
        long_date: &[D, lit(" "), M, lit(" "), Y],
        short_connector: " ",
        long_connector: " om ",
        zone_connector: " ",
        hour12: false,
    },
    LocaleProfile {
        tag: "sv-SE",
        chrono_locale: Locale::sv_SE,
        numeric_date: &[Y, lit("-"), M, lit("-"), D],
        pad_numeric: true,
        long_date: &[D, lit(" "), M, lit(" "), Y],
        short_connector: " ",
        long_connector: " kl. ",
        zone_connector: " ",
        hour12: false,
    },
];

impl LocaleProfile {
    /// Spelled-out month name of `dt` in this locale
    pub fn month_name<Z>(&self, dt: &DateTime<Z>) -> String
    where
        Z: TimeZone,
        Z::Offset: Display,
    {
        dt.format_localized("%B", self.chrono_locale).to_string()
    }

    /// Long layout without the day, e.g. `June 1999`
    ///
    /// Drops the day field together with the literal that separates it from
    /// the next field (or from the previous one when the day comes last).
    pub fn year_month_pattern(&self) -> Vec<PatternItem> {
        let items = self.long_date;
        let Some(day_idx) = items.iter().position(|item| *item == D) else {
            return items.to_vec();
        };

        let (start, end) = if day_idx + 1 < items.len() {
            (day_idx, day_idx + 2)
        } else {
            (day_idx.saturating_sub(1), day_idx + 1)
        };

        items
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx < start || *idx >= end)
            .map(|(_, item)| *item)
            .collect()
    }

    /// Whether the locale is an English one (zone abbreviations are English)
    pub fn is_english(&self) -> bool {
        self.tag.starts_with("en-")
    }
}

/// Normalize a locale tag: `de_DE.UTF-8@euro` becomes `de-DE`
pub fn normalize_tag(tag: &str) -> String {
    let base = tag.split(['.', '@']).next().unwrap_or_default().trim();
    base.replace('_', "-")
}

/// Find the profile for a tag: exact match first, then same language
pub fn lookup_profile(tag: &str) -> Option<&'static LocaleProfile> {
    let normalized = normalize_tag(tag);
    if normalized.is_empty() {
        return None;
    }

    if let Some(profile) = PROFILES.iter().find(|p| p.tag.eq_ignore_ascii_case(&normalized)) {
        return Some(profile);
    }

    let language = normalized.split('-').next().unwrap_or_default();
    PROFILES.iter().find(|p| {
        p.tag
            .split('-')
            .next()
            .is_some_and(|lang| lang.eq_ignore_ascii_case(language))
    })
}

/// Whether a tag resolves to a profile without falling back
pub fn is_supported_locale(tag: &str) -> bool {
    lookup_profile(tag).is_some()
}

/// Tags of every available profile
pub fn supported_locales() -> Vec<&'static str> {
    PROFILES.iter().map(|p| p.tag).collect()
}

/// The `en-US` profile
pub fn default_profile() -> &'static LocaleProfile {
    &PROFILES[0]
}

/// Resolve a profile, using the runtime locale when `tag` is `None`
pub fn resolve_profile(tag: Option<&str>) -> &'static LocaleProfile {
    let tag = match tag {
        Some(tag) => tag.to_string(),
        None => runtime_locale(),
    };

    match lookup_profile(&tag) {
        Some(profile) => profile,
        None => {
            debug!("Locale '{}' not supported, falling back to {}", tag, DEFAULT_LOCALE);
            default_profile()
        }
    }
}

/// Locale of the running process, read from the usual environment variables
pub fn runtime_locale() -> String {
    let value = LOCALE_ENV_VARS
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.trim().is_empty());

    match value {
        Some(value) if value != "C" && value != "POSIX" && !value.starts_with("C.") => normalize_tag(&value),
        _ => DEFAULT_LOCALE.to_string(),
    }
}

/// Time zone of the running process
pub fn runtime_zone() -> Tz {
    match iana_time_zone::get_timezone() {
        Ok(name) => match name.parse::<Tz>() {
            Ok(tz) => tz,
            Err(_) => {
                warn!("System time zone '{}' is not a known IANA zone, using UTC", name);
                Tz::UTC
            }
        },
        Err(e) => {
            warn!("Could not determine system time zone ({}), using UTC", e);
            Tz::UTC
        }
    }
}

/// Resolve a zone, using the runtime zone when `zone` is `None`
pub fn resolve_zone(zone: Option<Tz>) -> Tz {
    zone.unwrap_or_else(runtime_zone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_tag() {
        assert_eq!(normalize_tag("en_US.UTF-8"), "en-US");
        assert_eq!(normalize_tag("de_DE@euro"), "de-DE");
        assert_eq!(normalize_tag("fr-FR"), "fr-FR");
    }

    #[test]
    fn test_lookup_exact_and_language() {
        assert_eq!(lookup_profile("en-gb").map(|p| p.tag), Some("en-GB"));
        assert_eq!(lookup_profile("de-AT").map(|p| p.tag), Some("de-DE"));
        assert_eq!(lookup_profile("en").map(|p| p.tag), Some("en-US"));
        assert!(lookup_profile("xx-YY").is_none());
        assert!(lookup_profile("").is_none());
    }

    #[test]
    fn test_resolve_falls_back_to_en_us() {
        assert_eq!(resolve_profile(Some("tlh")).tag, "en-US");
    }

    #[test]
    fn test_year_month_pattern() {
        let en = lookup_profile("en-US").unwrap();
        assert_eq!(en.year_month_pattern(), vec![M, lit(" "), Y]);

        let es = lookup_profile("es-ES").unwrap();
        assert_eq!(es.year_month_pattern(), vec![M, lit(" de "), Y]);

        let de = lookup_profile("de-DE").unwrap();
        assert_eq!(de.year_month_pattern(), vec![M, lit(" "), Y]);
    }

    #[test]
    fn test_every_profile_has_all_fields() {
        for profile in PROFILES.iter() {
            for pattern in [profile.numeric_date, profile.long_date] {
                for field in [DateField::Year, DateField::Month, DateField::Day] {
                    assert!(
                        pattern.contains(&PatternItem::Field(field)),
                        "{} is missing {:?}",
                        profile.tag,
                        field
                    );
                }
            }
        }
    }
}
