//! Appending exercises to a user's log.
//!
//! The append is a plain read-modify-write over the aggregate: load the user,
//! push the exercise in memory, then save the whole document back. Two
//! concurrent appends for the same user can overwrite each other; the last
//! save wins.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use mockable::Clock;
use tracing::{debug, info};

use crate::domain::ports::{
    AddExerciseRequest, AddExerciseResponse, ExerciseCommand, UserRepository,
};
use crate::domain::user_lookup::{load_user, map_repository_error};
use crate::domain::{
    Description, DurationMinutes, Error, Exercise, ExerciseValidationError, parse_calendar_date,
};

/// Exercise service implementing [`ExerciseCommand`].
#[derive(Clone)]
pub struct ExerciseService<R> {
    user_repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> ExerciseService<R> {
    /// Create a new service. `clock` supplies the default exercise date.
    ///
    /// # Examples
    /// ```
    /// # use std::sync::Arc;
    /// # use mockable::DefaultClock;
    /// use exercise_tracker::domain::ExerciseService;
    /// use exercise_tracker::outbound::memory::InMemoryUserRepository;
    ///
    /// let service = ExerciseService::new(
    ///     Arc::new(InMemoryUserRepository::default()),
    ///     Arc::new(DefaultClock),
    /// );
    /// # let _ = service;
    /// ```
    pub fn new(user_repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { user_repo, clock }
    }

    fn today(&self) -> NaiveDate {
        self.clock.utc().date_naive()
    }

    fn resolve_date(&self, raw: Option<&str>) -> NaiveDate {
        match raw.map(str::trim).filter(|value| !value.is_empty()) {
            None => self.today(),
            Some(value) => parse_calendar_date(value).unwrap_or_else(|| {
                debug!(date = value, "unreadable exercise date, defaulting to today");
                self.today()
            }),
        }
    }
}

fn to_invalid_request(err: ExerciseValidationError) -> Error {
    Error::invalid_request(err.to_string())
}

fn build_exercise(
    description: Option<String>,
    duration: Option<String>,
    date: NaiveDate,
) -> Result<Exercise, Error> {
    let description = Description::new(description.unwrap_or_default()).map_err(to_invalid_request)?;
    let duration = duration
        .ok_or(ExerciseValidationError::MissingDuration)
        .and_then(|raw| DurationMinutes::parse(&raw))
        .map_err(to_invalid_request)?;
    Ok(Exercise::new(description, duration, date))
}

#[async_trait]
impl<R> ExerciseCommand for ExerciseService<R>
where
    R: UserRepository,
{
    async fn add_exercise(
        &self,
        request: AddExerciseRequest,
    ) -> Result<AddExerciseResponse, Error> {
        let AddExerciseRequest {
            user_id,
            description,
            duration,
            date,
        } = request;

        let mut user = load_user(self.user_repo.as_ref(), &user_id).await?;
        let exercise = build_exercise(description, duration, self.resolve_date(date.as_deref()))?;

        user.append_exercise(exercise.clone());
        self.user_repo
            .save(&user)
            .await
            .map_err(map_repository_error)?;

        info!(
            user_id = %user.id(),
            exercises = user.exercises().len(),
            "exercise appended"
        );
        Ok(AddExerciseResponse {
            user: user.profile(),
            exercise,
        })
    }
}

#[cfg(test)]
#[path = "exercise_service_tests.rs"]
mod tests;
