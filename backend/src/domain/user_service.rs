//! User registration and listing.
//!
//! `UserService` implements both user-facing driving ports over a single
//! `UserRepository`.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{CreateUserRequest, UserCommand, UserRepository, UsersQuery};
use crate::domain::user_lookup::map_repository_error;
use crate::domain::{Error, User, UserProfile, Username};

/// User service implementing [`UserCommand`] and [`UsersQuery`].
#[derive(Clone)]
pub struct UserService<R> {
    user_repo: Arc<R>,
}

impl<R> UserService<R> {
    /// Create a new service backed by the user repository.
    pub fn new(user_repo: Arc<R>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl<R> UserCommand for UserService<R>
where
    R: UserRepository,
{
    async fn create_user(&self, request: CreateUserRequest) -> Result<UserProfile, Error> {
        let raw = request
            .username
            .ok_or_else(|| Error::invalid_request("username is required"))?;
        let username = Username::new(raw).map_err(|err| Error::invalid_request(err.to_string()))?;

        let user = User::register(username);
        self.user_repo
            .insert(&user)
            .await
            .map_err(map_repository_error)?;

        info!(user_id = %user.id(), "user created");
        Ok(user.profile())
    }
}

#[async_trait]
impl<R> UsersQuery for UserService<R>
where
    R: UserRepository,
{
    async fn list_users(&self) -> Result<Vec<UserProfile>, Error> {
        self.user_repo
            .list_profiles()
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "user_service_tests.rs"]
mod tests;
