//! Exercise log queries.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{
    ExerciseLogQuery, ExerciseLogRequest, ExerciseLogResponse, UserRepository,
};
use crate::domain::user_lookup::load_user;
use crate::domain::{Error, LogFilter};

/// Log service implementing [`ExerciseLogQuery`].
#[derive(Clone)]
pub struct ExerciseLogService<R> {
    user_repo: Arc<R>,
}

impl<R> ExerciseLogService<R> {
    /// Create a new service backed by the user repository.
    pub fn new(user_repo: Arc<R>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl<R> ExerciseLogQuery for ExerciseLogService<R>
where
    R: UserRepository,
{
    async fn exercise_log(
        &self,
        request: ExerciseLogRequest,
    ) -> Result<ExerciseLogResponse, Error> {
        let user = load_user(self.user_repo.as_ref(), &request.user_id).await?;
        let filter = LogFilter::parse(
            request.from.as_deref(),
            request.to.as_deref(),
            request.limit.as_deref(),
        )
        .map_err(|err| Error::invalid_request(err.to_string()))?;

        let log: Vec<_> = filter
            .apply(user.exercises())
            .into_iter()
            .cloned()
            .collect();
        debug!(
            user_id = %user.id(),
            total = user.exercises().len(),
            returned = log.len(),
            "exercise log filtered"
        );

        Ok(ExerciseLogResponse {
            user: user.profile(),
            count: log.len(),
            log,
        })
    }
}

#[cfg(test)]
#[path = "exercise_log_service_tests.rs"]
mod tests;
