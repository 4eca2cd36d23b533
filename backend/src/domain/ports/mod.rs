//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports (`UserCommand`, `UsersQuery`, `ExerciseCommand`,
//! `ExerciseLogQuery`) are what inbound adapters call. The driven
//! `UserRepository` port is what persistence adapters implement.

mod macros;
pub(crate) use macros::define_port_error;

mod exercise_command;
mod exercise_log_query;
mod user_command;
mod user_repository;
mod users_query;

#[cfg(test)]
pub use exercise_command::MockExerciseCommand;
pub use exercise_command::{AddExerciseRequest, AddExerciseResponse, ExerciseCommand};
#[cfg(test)]
pub use exercise_log_query::MockExerciseLogQuery;
pub use exercise_log_query::{ExerciseLogQuery, ExerciseLogRequest, ExerciseLogResponse};
#[cfg(test)]
pub use user_command::MockUserCommand;
pub use user_command::{CreateUserRequest, UserCommand};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::UsersQuery;
