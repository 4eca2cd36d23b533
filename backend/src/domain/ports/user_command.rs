//! Driving port for registering users.

use async_trait::async_trait;

use crate::domain::{Error, UserProfile};

/// Request to register a user. The username is validated by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateUserRequest {
    pub username: Option<String>,
}

/// Driving port for user write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserCommand: Send + Sync {
    /// Register a user with an empty exercise log.
    ///
    /// Fails with `ErrorCode::InvalidRequest` when the username is missing or
    /// blank. Duplicate usernames are allowed.
    async fn create_user(&self, request: CreateUserRequest) -> Result<UserProfile, Error>;
}
