//! Driving port for listing users.

use async_trait::async_trait;

use crate::domain::{Error, UserProfile};

/// Domain use-case port for listing users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Return every user's identity, without exercises.
    async fn list_users(&self) -> Result<Vec<UserProfile>, Error>;
}
