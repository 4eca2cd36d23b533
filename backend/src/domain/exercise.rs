//! Exercise entries embedded in a user aggregate.

use std::fmt;

use chrono::NaiveDate;

/// Validation errors raised while building exercises.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExerciseValidationError {
    /// The description was missing or blank.
    #[error("description must not be empty")]
    EmptyDescription,
    /// The duration was missing.
    #[error("duration is required")]
    MissingDuration,
    /// The duration was not a whole, non-negative number of minutes.
    #[error("duration must be a whole number of minutes, got '{value}'")]
    InvalidDuration { value: String },
}

/// Free-text description of the activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description(String);

impl Description {
    /// Validate and wrap a description.
    pub fn new(description: impl Into<String>) -> Result<Self, ExerciseValidationError> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(ExerciseValidationError::EmptyDescription);
        }
        Ok(Self(description))
    }
}

impl AsRef<str> for Description {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Exercise length in whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DurationMinutes(u32);

impl DurationMinutes {
    /// Wrap an already numeric duration.
    pub const fn new(minutes: u32) -> Self {
        Self(minutes)
    }

    /// Coerce textual input such as `"30"` or `" 45 "`.
    ///
    /// Fractions, signs other than a leading `+`, and trailing garbage are
    /// rejected rather than truncated.
    ///
    /// # Examples
    /// ```
    /// use exercise_tracker::domain::DurationMinutes;
    ///
    /// assert_eq!(DurationMinutes::parse("30").map(|d| d.minutes()), Ok(30));
    /// assert!(DurationMinutes::parse("thirty").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, ExerciseValidationError> {
        raw.trim()
            .parse::<u32>()
            .map(Self)
            .map_err(|_| ExerciseValidationError::InvalidDuration {
                value: raw.to_owned(),
            })
    }

    /// Number of minutes.
    pub const fn minutes(self) -> u32 {
        self.0
    }
}

/// One logged activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    description: Description,
    duration: DurationMinutes,
    date: NaiveDate,
}

impl Exercise {
    /// Build an exercise from validated parts.
    pub fn new(description: Description, duration: DurationMinutes, date: NaiveDate) -> Self {
        Self {
            description,
            duration,
            date,
        }
    }

    /// What was done.
    pub fn description(&self) -> &Description {
        &self.description
    }

    /// How long it took.
    pub fn duration(&self) -> DurationMinutes {
        self.duration
    }

    /// Calendar day it happened on.
    pub fn date(&self) -> NaiveDate {
        self.date
    }
}
