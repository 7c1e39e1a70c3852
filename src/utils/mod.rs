//! Formatting utilities.
//!
//! Everything in here is a pure function over in-memory date/time values,
//! apart from reading the runtime's default locale and zone.
//!
//! # Available Utilities
//!
//! - [`datetime`] - Absolute, relative and local date/time formatting, zone names
//! - [`date`] - Partial (`YYYY[-MM[-DD]]`) date parsing, ordering and formatting
//! - [`duration`] - Second counts as `h:mm:ss` or spelled-out units
//! - [`locale`] - Locale profiles and runtime locale/zone resolution

pub mod date;
pub mod datetime;
pub mod duration;
pub mod locale;
