//! Tests for the user service.

use std::collections::HashSet;
use std::sync::Arc;

use rstest::rstest;

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::{MockUserRepository, UserRepositoryError};

fn request(username: Option<&str>) -> CreateUserRequest {
    CreateUserRequest {
        username: username.map(str::to_owned),
    }
}

#[tokio::test]
async fn create_user_persists_and_echoes_username() {
    let mut repo = MockUserRepository::new();
    repo.expect_insert()
        .withf(|user| user.username().as_ref() == "alice" && user.exercises().is_empty())
        .times(1)
        .return_once(|_| Ok(()));

    let service = UserService::new(Arc::new(repo));
    let profile = service
        .create_user(request(Some("alice")))
        .await
        .expect("user created");

    assert_eq!(profile.username.as_ref(), "alice");
}

#[tokio::test]
async fn create_user_issues_fresh_ids() {
    let mut repo = MockUserRepository::new();
    repo.expect_insert().times(3).returning(|_| Ok(()));
    let service = UserService::new(Arc::new(repo));

    let mut ids = HashSet::new();
    for _ in 0..3 {
        let profile = service
            .create_user(request(Some("same name")))
            .await
            .expect("user created");
        ids.insert(profile.id);
    }

    assert_eq!(ids.len(), 3);
}

#[rstest]
#[case(None)]
#[case(Some(""))]
#[case(Some("   "))]
#[tokio::test]
async fn create_user_rejects_missing_username(#[case] username: Option<&str>) {
    let mut repo = MockUserRepository::new();
    repo.expect_insert().times(0);
    let service = UserService::new(Arc::new(repo));

    let err = service
        .create_user(request(username))
        .await
        .expect_err("username required");
    assert_eq!(err.code(), ErrorCode::InvalidRequest);
}

#[tokio::test]
async fn create_user_maps_connection_failures() {
    let mut repo = MockUserRepository::new();
    repo.expect_insert()
        .times(1)
        .return_once(|_| Err(UserRepositoryError::connection("refused")));
    let service = UserService::new(Arc::new(repo));

    let err = service
        .create_user(request(Some("alice")))
        .await
        .expect_err("store down");
    assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
}

#[tokio::test]
async fn list_users_returns_repository_profiles() {
    let stored = vec![
        User::register(Username::new("alice").expect("valid username")).profile(),
        User::register(Username::new("bob").expect("valid username")).profile(),
    ];
    let expected = stored.clone();

    let mut repo = MockUserRepository::new();
    repo.expect_list_profiles()
        .times(1)
        .return_once(move || Ok(stored));
    let service = UserService::new(Arc::new(repo));

    let users = service.list_users().await.expect("users listed");
    assert_eq!(users, expected);
}

#[tokio::test]
async fn list_users_maps_query_failures() {
    let mut repo = MockUserRepository::new();
    repo.expect_list_profiles()
        .times(1)
        .return_once(|| Err(UserRepositoryError::query("boom")));
    let service = UserService::new(Arc::new(repo));

    let err = service.list_users().await.expect_err("query failed");
    assert_eq!(err.code(), ErrorCode::InternalError);
}
