//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::ports::{
    ExerciseCommand, ExerciseLogQuery, UserCommand, UserRepository, UsersQuery,
};
use crate::domain::{ExerciseLogService, ExerciseService, UserService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserCommand>,
    pub users_query: Arc<dyn UsersQuery>,
    pub exercises: Arc<dyn ExerciseCommand>,
    pub exercise_log: Arc<dyn ExerciseLogQuery>,
}

impl HttpState {
    /// Wire every driving port to the services over one repository.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use mockable::DefaultClock;
    /// use exercise_tracker::inbound::http::state::HttpState;
    /// use exercise_tracker::outbound::memory::InMemoryUserRepository;
    ///
    /// let state = HttpState::from_repository(
    ///     Arc::new(InMemoryUserRepository::default()),
    ///     Arc::new(DefaultClock),
    /// );
    /// # let _ = state;
    /// ```
    pub fn from_repository<R>(repo: Arc<R>, clock: Arc<dyn Clock>) -> Self
    where
        R: UserRepository + 'static,
    {
        let users = Arc::new(UserService::new(Arc::clone(&repo)));
        Self {
            users: users.clone(),
            users_query: users,
            exercises: Arc::new(ExerciseService::new(Arc::clone(&repo), clock)),
            exercise_log: Arc::new(ExerciseLogService::new(repo)),
        }
    }
}
