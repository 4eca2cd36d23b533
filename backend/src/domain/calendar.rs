//! Calendar date parsing and display.
//!
//! Inputs are parsed ISO-first and locale-naive. Timestamps with an offset
//! are normalised to UTC before the day is taken. Display mirrors the classic
//! `Date.toDateString()` shape, e.g. `Thu Jan 05 2023`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Display format for exercise dates.
pub const DISPLAY_FORMAT: &str = "%a %b %d %Y";

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%a %b %d %Y",
    "%b %d %Y",
    "%B %d %Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%d %b %Y",
    "%d %B %Y",
    "%m/%d/%Y",
];

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a calendar date, returning `None` when no known format matches.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use exercise_tracker::domain::parse_calendar_date;
///
/// let expected = NaiveDate::from_ymd_opt(2023, 1, 5);
/// assert_eq!(parse_calendar_date("2023-01-05"), expected);
/// assert_eq!(parse_calendar_date("Thu Jan 05 2023"), expected);
/// assert_eq!(parse_calendar_date("yesterday"), None);
/// ```
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
    {
        return Some(date);
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(timestamp.with_timezone(&Utc).date_naive());
    }

    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .map(|timestamp| timestamp.date())
}

/// Render a date for API responses.
pub fn format_calendar_date(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}
