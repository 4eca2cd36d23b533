//! Driving port for appending exercises to a user's log.

use async_trait::async_trait;

use crate::domain::{Error, Exercise, UserProfile};

/// Request to append an exercise.
///
/// Fields arrive as text straight from the transport; the service coerces
/// `duration` and `date` and resolves `user_id`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddExerciseRequest {
    pub user_id: String,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub date: Option<String>,
}

/// The stored exercise together with its owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddExerciseResponse {
    pub user: UserProfile,
    pub exercise: Exercise,
}

/// Driving port for exercise write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExerciseCommand: Send + Sync {
    /// Append an exercise to the end of the user's log.
    ///
    /// Fails with `ErrorCode::NotFound` when the user does not exist and with
    /// `ErrorCode::InvalidRequest` when the description or duration is
    /// missing or malformed. A missing or unreadable date falls back to
    /// today.
    async fn add_exercise(&self, request: AddExerciseRequest)
    -> Result<AddExerciseResponse, Error>;
}
