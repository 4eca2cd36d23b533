//! Exercise HTTP handlers.
//!
//! ```text
//! POST /api/users/{_id}/exercises {"description":"run","duration":30,"date":"2023-01-05"}
//! ```

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::format_calendar_date;
use crate::domain::ports::{AddExerciseRequest, AddExerciseResponse};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldValue, JsonOrForm, field_text, into_body, optional_field_text,
};

/// Request payload for logging an exercise.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct AddExerciseRequestBody {
    #[schema(value_type = String, example = "run")]
    pub description: Option<FieldValue>,
    /// Whole minutes, as a number or numeric string.
    #[schema(value_type = u32, example = 30)]
    pub duration: Option<FieldValue>,
    /// Calendar date; today when omitted or unreadable.
    #[schema(value_type = Option<String>, format = "date", example = "2023-01-05")]
    pub date: Option<FieldValue>,
}

/// The stored exercise echoed back with its owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ExerciseResponse {
    #[schema(example = "alice")]
    pub username: String,
    #[schema(example = "run")]
    pub description: String,
    #[schema(example = 30)]
    pub duration: u32,
    #[schema(example = "Thu Jan 05 2023")]
    pub date: String,
    #[serde(rename = "_id")]
    #[schema(format = "uuid")]
    pub id: String,
}

impl From<AddExerciseResponse> for ExerciseResponse {
    fn from(value: AddExerciseResponse) -> Self {
        let AddExerciseResponse { user, exercise } = value;
        Self {
            username: user.username.into(),
            description: exercise.description().to_string(),
            duration: exercise.duration().minutes(),
            date: format_calendar_date(exercise.date()),
            id: user.id.to_string(),
        }
    }
}

/// Append an exercise to a user's log.
#[utoipa::path(
    post,
    path = "/api/users/{_id}/exercises",
    params(("_id" = String, Path, description = "User identifier")),
    request_body(
        content = AddExerciseRequestBody,
        content_type = "application/json",
        description = "Also accepted as application/x-www-form-urlencoded"
    ),
    responses(
        (status = 200, description = "Exercise logged", body = ExerciseResponse),
        (status = 400, description = "Missing description or malformed duration", body = ErrorBody),
        (status = 404, description = "Unknown user", body = ErrorBody),
        (status = 503, description = "Store unavailable", body = ErrorBody)
    ),
    tags = ["exercises"],
    operation_id = "addExercise"
)]
#[post("/users/{_id}/exercises")]
pub async fn add_exercise(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: JsonOrForm<AddExerciseRequestBody>,
) -> ApiResult<web::Json<ExerciseResponse>> {
    let body = into_body(payload);
    let response = state
        .exercises
        .add_exercise(AddExerciseRequest {
            user_id: path.into_inner(),
            description: field_text(body.description),
            duration: field_text(body.duration),
            date: optional_field_text(body.date),
        })
        .await?;
    Ok(web::Json(response.into()))
}

#[cfg(test)]
#[path = "exercises_tests.rs"]
mod tests;
