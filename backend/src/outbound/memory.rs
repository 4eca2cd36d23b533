//! In-process `UserRepository` used by tests and database-less debug runs.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{User, UserId, UserProfile};

/// Mutex-guarded vector of user aggregates in insertion order.
///
/// # Examples
/// ```
/// use exercise_tracker::domain::ports::UserRepository;
/// use exercise_tracker::domain::{User, Username};
/// use exercise_tracker::outbound::memory::InMemoryUserRepository;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let repo = InMemoryUserRepository::default();
/// let user = User::register(Username::new("alice").expect("username"));
/// repo.insert(&user).await.expect("insert");
/// assert_eq!(repo.find_by_id(user.id()).await.expect("find"), Some(user));
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    fn lock(&self) -> Result<MutexGuard<'_, Vec<User>>, UserRepositoryError> {
        self.users
            .lock()
            .map_err(|_| UserRepositoryError::connection("in-memory store poisoned"))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: &User) -> Result<(), UserRepositoryError> {
        let mut users = self.lock()?;
        if users.iter().any(|stored| stored.id() == user.id()) {
            return Err(UserRepositoryError::query("duplicate record"));
        }
        users.push(user.clone());
        Ok(())
    }

    async fn list_profiles(&self) -> Result<Vec<UserProfile>, UserRepositoryError> {
        Ok(self.lock()?.iter().map(User::profile).collect())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        Ok(self.lock()?.iter().find(|user| user.id() == id).cloned())
    }

    async fn save(&self, user: &User) -> Result<(), UserRepositoryError> {
        let mut users = self.lock()?;
        match users.iter_mut().find(|stored| stored.id() == user.id()) {
            Some(stored) => *stored = user.clone(),
            None => users.push(user.clone()),
        }
        Ok(())
    }
}
