//! Driving port for reading a user's exercise log.

use async_trait::async_trait;

use crate::domain::{Error, Exercise, UserProfile};

/// Request for a user's log with optional raw filter values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExerciseLogRequest {
    pub user_id: String,
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

/// Filtered log for one user.
///
/// `count` always equals `log.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseLogResponse {
    pub user: UserProfile,
    pub count: usize,
    pub log: Vec<Exercise>,
}

/// Driving port for log queries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExerciseLogQuery: Send + Sync {
    /// Return the user's exercises filtered by `from`, then `to`, then
    /// truncated to `limit`.
    async fn exercise_log(&self, request: ExerciseLogRequest)
    -> Result<ExerciseLogResponse, Error>;
}
