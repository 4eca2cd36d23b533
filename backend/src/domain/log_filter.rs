//! Date-range and limit filtering for exercise logs.

use chrono::NaiveDate;

use crate::domain::{Exercise, parse_calendar_date};

/// Errors raised while interpreting log query parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LogFilterError {
    /// `from` or `to` could not be read as a calendar date.
    #[error("{field} must be a calendar date such as 2023-01-05, got '{value}'")]
    InvalidDate { field: &'static str, value: String },
    /// `limit` was not a non-negative whole number.
    #[error("limit must be a non-negative whole number, got '{value}'")]
    InvalidLimit { value: String },
}

/// Optional filters applied to a user's exercises, in this order:
/// `from` (inclusive), `to` (inclusive), then `limit` from the front.
///
/// # Examples
/// ```
/// use exercise_tracker::domain::LogFilter;
///
/// let filter = LogFilter::parse(Some("2023-01-01"), None, Some("2")).expect("valid filter");
/// assert_eq!(filter.limit, Some(2));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub limit: Option<usize>,
}

impl LogFilter {
    /// Interpret raw query values. Blank values count as absent.
    pub fn parse(
        from: Option<&str>,
        to: Option<&str>,
        limit: Option<&str>,
    ) -> Result<Self, LogFilterError> {
        Ok(Self {
            from: parse_bound("from", from)?,
            to: parse_bound("to", to)?,
            limit: parse_limit(limit)?,
        })
    }

    /// Select the matching exercises, preserving insertion order.
    pub fn apply<'a>(&self, exercises: &'a [Exercise]) -> Vec<&'a Exercise> {
        exercises
            .iter()
            .filter(|exercise| self.from.is_none_or(|from| exercise.date() >= from))
            .filter(|exercise| self.to.is_none_or(|to| exercise.date() <= to))
            .take(self.limit.unwrap_or(usize::MAX))
            .collect()
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}

fn parse_bound(field: &'static str, raw: Option<&str>) -> Result<Option<NaiveDate>, LogFilterError> {
    non_blank(raw)
        .map(|value| {
            parse_calendar_date(value).ok_or_else(|| LogFilterError::InvalidDate {
                field,
                value: value.to_owned(),
            })
        })
        .transpose()
}

fn parse_limit(raw: Option<&str>) -> Result<Option<usize>, LogFilterError> {
    non_blank(raw)
        .map(|value| {
            value
                .parse::<usize>()
                .map_err(|_| LogFilterError::InvalidLimit {
                    value: value.to_owned(),
                })
        })
        .transpose()
}
