//! Driven port for persisting user aggregates.
//!
//! Adapters store one document per user with the exercise sequence embedded,
//! so `save` always replaces the whole aggregate.

use async_trait::async_trait;

use crate::domain::{User, UserId, UserProfile};

use super::define_port_error;

define_port_error! {
    /// Errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
    }
}

/// Port for reading and writing user aggregates.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a freshly registered user.
    async fn insert(&self, user: &User) -> Result<(), UserRepositoryError>;

    /// List every user's identity in storage order.
    async fn list_profiles(&self) -> Result<Vec<UserProfile>, UserRepositoryError>;

    /// Fetch a user together with their exercises.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError>;

    /// Replace the stored aggregate, inserting it when absent.
    async fn save(&self, user: &User) -> Result<(), UserRepositoryError>;
}
