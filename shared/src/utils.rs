//! # Shared Display Helpers
//!
//! Formatting rules every renderer of backend data has to agree on.
//!
//! - [`format_last_scraped`] - `Never` for sources that have not run, local time otherwise
//! - [`or_na`] - `N/A` placeholder for missing discount values
//! - [`category_or_other`] - `other` placeholder for uncategorised deals
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{format_last_scraped, or_na};
//!
//! assert_eq!(format_last_scraped(None), "Never");
//! assert_eq!(or_na(Some("20%")), "20%");
//! assert_eq!(or_na(None), "N/A");
//! ```

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parse a backend timestamp.
///
/// The backend emits naive ISO-8601 timestamps in UTC (`2025-01-31T09:15:00.123456`);
/// RFC 3339 values with an explicit offset are accepted as well.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Format an optional backend timestamp in the given timezone.
///
/// Unparseable values are shown as received rather than hidden.
pub fn format_timestamp_in<Tz: TimeZone>(raw: Option<&str>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match raw {
        None => "Never".to_string(),
        Some(value) => match parse_timestamp(value) {
            Some(dt) => dt.with_timezone(tz).format(DISPLAY_FORMAT).to_string(),
            None => value.to_string(),
        },
    }
}

/// Format a source's `last_scraped` field in the operator's local time.
pub fn format_last_scraped(raw: Option<&str>) -> String {
    format_timestamp_in(raw, &Local)
}

/// Missing values render as `N/A`.
pub fn or_na(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => "N/A",
    }
}

/// Uncategorised deals render as `other`.
pub fn category_or_other(category: Option<&str>) -> &str {
    match category {
        Some(c) if !c.is_empty() => c,
        _ => "other",
    }
}
