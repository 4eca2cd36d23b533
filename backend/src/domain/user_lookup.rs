//! Shared helpers for services that load users through the repository port.

use tracing::debug;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{Error, User, UserId};

/// Message returned whenever a path identifier does not name a stored user.
pub(crate) const USER_NOT_FOUND: &str = "User not found";

pub(crate) fn map_repository_error(error: UserRepositoryError) -> Error {
    match error {
        UserRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("user store unavailable: {message}"))
        }
        UserRepositoryError::Query { message } => {
            Error::internal(format!("user store error: {message}"))
        }
    }
}

/// Resolve a client-supplied identifier to a stored user.
///
/// Malformed identifiers are reported exactly like unknown ones.
pub(crate) async fn load_user<R>(repo: &R, raw_id: &str) -> Result<User, Error>
where
    R: UserRepository + ?Sized,
{
    let id = UserId::new(raw_id).map_err(|err| {
        debug!(user_id = raw_id, error = %err, "rejecting malformed user id");
        Error::not_found(USER_NOT_FOUND)
    })?;

    repo.find_by_id(&id)
        .await
        .map_err(map_repository_error)?
        .ok_or_else(|| Error::not_found(USER_NOT_FOUND))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::MockUserRepository;
    use rstest::rstest;

    #[rstest]
    #[case(UserRepositoryError::connection("down"), ErrorCode::ServiceUnavailable)]
    #[case(UserRepositoryError::query("bad sql"), ErrorCode::InternalError)]
    fn repository_errors_map_to_codes(
        #[case] error: UserRepositoryError,
        #[case] expected: ErrorCode,
    ) {
        assert_eq!(map_repository_error(error).code(), expected);
    }

    #[tokio::test]
    async fn malformed_ids_never_reach_the_repository() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().times(0);

        let err = load_user(&repo, "42").await.expect_err("malformed id");
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.message(), USER_NOT_FOUND);
    }

    #[tokio::test]
    async fn unknown_ids_are_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().times(1).return_once(|_| Ok(None));

        let err = load_user(&repo, &UserId::random().to_string())
            .await
            .expect_err("unknown id");
        assert_eq!(err.code(), ErrorCode::NotFound);
    }
}
