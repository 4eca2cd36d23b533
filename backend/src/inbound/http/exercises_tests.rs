//! Tests for exercise HTTP handlers.

use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::inbound::http::test_utils::{in_memory_state, test_app};
use crate::inbound::http::users::UserResponse;

async fn create_user<S>(app: &S, username: &str) -> String
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let res = actix_test::call_service(
        app,
        actix_test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({ "username": username }))
            .to_request(),
    )
    .await;
    let body: UserResponse = actix_test::read_body_json(res).await;
    body.id
}

#[actix_web::test]
async fn add_exercise_echoes_formatted_entry() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    let user_id = create_user(&app, "alice").await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri(&format!("/api/users/{user_id}/exercises"))
            .set_json(json!({"description": "run", "duration": 30, "date": "2023-01-05"}))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(
        body,
        json!({
            "username": "alice",
            "description": "run",
            "duration": 30,
            "date": "Thu Jan 05 2023",
            "_id": user_id,
        })
    );
}

#[actix_web::test]
async fn add_exercise_accepts_form_bodies_with_text_duration() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    let user_id = create_user(&app, "alice").await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri(&format!("/api/users/{user_id}/exercises"))
            .set_form([
                (":_id", user_id.as_str()),
                ("description", "swim"),
                ("duration", "45"),
                ("date", ""),
            ])
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: ExerciseResponse = actix_test::read_body_json(res).await;
    assert_eq!(body.duration, 45);
    assert_eq!(body.date, "Sat Mar 09 2024");
}

#[rstest]
#[case(json!({"description": "run", "duration": "thirty"}))]
#[case(json!({"description": "run"}))]
#[case(json!({"duration": 30}))]
#[case(json!({"description": "run", "duration": 12.5}))]
#[actix_rt::test]
async fn add_exercise_rejects_invalid_fields(#[case] payload: Value) {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    let user_id = create_user(&app, "alice").await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri(&format!("/api/users/{user_id}/exercises"))
            .set_json(payload)
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert!(body["error"].is_string());
}

#[rstest]
#[case("00000000-0000-0000-0000-000000000000")]
#[case("not-a-real-id")]
#[actix_rt::test]
async fn add_exercise_to_unknown_user_is_not_found(#[case] user_id: &str) {
    let app = actix_test::init_service(test_app(in_memory_state())).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri(&format!("/api/users/{user_id}/exercises"))
            .set_json(json!({"description": "run", "duration": 30}))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body, json!({"error": "User not found"}));
}
