//! Tests for the exercise log HTTP handler.

use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::inbound::http::test_utils::{in_memory_state, test_app};
use crate::inbound::http::users::UserResponse;

/// Create `alice` with three exercises and return her identifier.
async fn seed_alice<S>(app: &S) -> String
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let res = actix_test::call_service(
        app,
        actix_test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({"username": "alice"}))
            .to_request(),
    )
    .await;
    let user: UserResponse = actix_test::read_body_json(res).await;

    for (description, duration, date) in [
        ("run", 30, "2023-01-05"),
        ("swim", 45, "2024-03-09"),
        ("bike", 60, "2023-06-01"),
    ] {
        let res = actix_test::call_service(
            app,
            actix_test::TestRequest::post()
                .uri(&format!("/api/users/{}/exercises", user.id))
                .set_json(json!({
                    "description": description,
                    "duration": duration,
                    "date": date,
                }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
    }
    user.id
}

async fn fetch_log<S>(app: &S, uri: &str) -> (StatusCode, Value)
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let res = actix_test::call_service(app, actix_test::TestRequest::get().uri(uri).to_request())
        .await;
    let status = res.status();
    let body: Value = actix_test::read_body_json(res).await;
    (status, body)
}

#[actix_web::test]
async fn full_log_keeps_insertion_order() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    let user_id = seed_alice(&app).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/api/users/{user_id}/logs"))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: ExerciseLogResponseBody = actix_test::read_body_json(res).await;

    assert_eq!(body.username, "alice");
    assert_eq!(body.id, user_id);
    assert_eq!(body.count, 3);
    assert_eq!(
        body.log,
        vec![
            LogEntryResponse {
                description: "run".into(),
                duration: 30,
                date: "Thu Jan 05 2023".into(),
            },
            LogEntryResponse {
                description: "swim".into(),
                duration: 45,
                date: "Sat Mar 09 2024".into(),
            },
            LogEntryResponse {
                description: "bike".into(),
                duration: 60,
                date: "Thu Jun 01 2023".into(),
            },
        ]
    );
}

#[rstest]
#[case("from=2023-01-06", &["swim", "bike"])]
#[case("to=2023-06-01", &["run", "bike"])]
#[case("from=2023-01-05&to=2023-01-05", &["run"])]
#[case("limit=1", &["run"])]
#[case("from=2023-02-01&limit=1", &["swim"])]
#[case("limit=0", &[])]
#[case("from=&to=&limit=", &["run", "swim", "bike"])]
#[case("from=2025-01-01", &[])]
#[actix_rt::test]
async fn filters_apply_in_order(#[case] query: &str, #[case] expected: &[&str]) {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    let user_id = seed_alice(&app).await;

    let (status, body) = fetch_log(&app, &format!("/api/users/{user_id}/logs?{query}")).await;

    assert_eq!(status, StatusCode::OK);
    let descriptions: Vec<&str> = body["log"]
        .as_array()
        .expect("log array")
        .iter()
        .filter_map(|entry| entry["description"].as_str())
        .collect();
    assert_eq!(descriptions, expected);
    assert_eq!(body["count"], json!(expected.len()));
}

#[rstest]
#[case("limit=-1")]
#[case("limit=ten")]
#[case("from=yesterday")]
#[case("to=2023-13-40")]
#[actix_rt::test]
async fn malformed_filters_are_rejected(#[case] query: &str) {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    let user_id = seed_alice(&app).await;

    let (status, body) = fetch_log(&app, &format!("/api/users/{user_id}/logs?{query}")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[actix_web::test]
async fn unknown_user_log_is_not_found() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;

    let (status, body) = fetch_log(
        &app,
        "/api/users/6f1c2a7e-0000-4000-8000-000000000000/logs",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "User not found"}));
}

#[actix_web::test]
async fn fresh_user_has_empty_log() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({"username": "bob"}))
            .to_request(),
    )
    .await;
    let user: UserResponse = actix_test::read_body_json(res).await;

    let (status, body) = fetch_log(&app, &format!("/api/users/{}/logs", user.id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"username": "bob", "count": 0, "_id": user.id, "log": []})
    );
}
