//! User HTTP handlers.
//!
//! ```text
//! POST /api/users {"username":"alice"}
//! GET  /api/users
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::UserProfile;
use crate::domain::ports::CreateUserRequest;
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldValue, JsonOrForm, field_text, into_body};

/// Request payload for creating a user.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct CreateUserRequestBody {
    #[schema(value_type = Option<String>, example = "alice")]
    pub username: Option<FieldValue>,
}

/// A user's identity as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = "alice")]
    pub username: String,
    #[serde(rename = "_id")]
    #[schema(format = "uuid", example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
}

impl From<UserProfile> for UserResponse {
    fn from(value: UserProfile) -> Self {
        Self {
            username: value.username.into(),
            id: value.id.to_string(),
        }
    }
}

/// Create a user with an empty exercise log.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body(
        content = CreateUserRequestBody,
        content_type = "application/json",
        description = "Also accepted as application/x-www-form-urlencoded"
    ),
    responses(
        (status = 200, description = "User created", body = UserResponse),
        (status = 400, description = "Missing or blank username", body = ErrorBody),
        (status = 503, description = "Store unavailable", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: JsonOrForm<CreateUserRequestBody>,
) -> ApiResult<web::Json<UserResponse>> {
    let body = into_body(payload);
    let profile = state
        .users
        .create_user(CreateUserRequest {
            username: field_text(body.username),
        })
        .await?;
    Ok(web::Json(profile.into()))
}

/// List every user without their exercises.
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "All users", body = [UserResponse]),
        (status = 503, description = "Store unavailable", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserResponse>>> {
    let users = state.users_query.list_users().await?;
    Ok(web::Json(users.into_iter().map(UserResponse::from).collect()))
}

#[cfg(test)]
#[path = "users_tests.rs"]
mod tests;
