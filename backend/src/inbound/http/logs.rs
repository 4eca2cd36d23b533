//! Exercise log HTTP handler.
//!
//! ```text
//! GET /api/users/{_id}/logs?from=2023-01-01&to=2023-12-31&limit=10
//! ```

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::{ExerciseLogRequest, ExerciseLogResponse};
use crate::domain::{Exercise, format_calendar_date};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::HttpState;

/// Optional log filters. Empty values are ignored.
#[derive(Debug, Default, Deserialize, Serialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LogQuery {
    /// Inclusive lower bound (calendar date).
    #[param(format = "date", example = "2023-01-01")]
    pub from: Option<String>,
    /// Inclusive upper bound (calendar date).
    #[param(format = "date", example = "2023-12-31")]
    pub to: Option<String>,
    /// Maximum number of entries, taken from the front.
    #[param(value_type = Option<u32>, example = 10)]
    pub limit: Option<String>,
}

/// One entry of a user's log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LogEntryResponse {
    #[schema(example = "run")]
    pub description: String,
    #[schema(example = 30)]
    pub duration: u32,
    #[schema(example = "Thu Jan 05 2023")]
    pub date: String,
}

impl From<Exercise> for LogEntryResponse {
    fn from(value: Exercise) -> Self {
        Self {
            description: value.description().to_string(),
            duration: value.duration().minutes(),
            date: format_calendar_date(value.date()),
        }
    }
}

/// A user's filtered exercise log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ExerciseLogResponseBody {
    #[schema(example = "alice")]
    pub username: String,
    /// Number of entries in `log`.
    pub count: usize,
    #[serde(rename = "_id")]
    #[schema(format = "uuid")]
    pub id: String,
    pub log: Vec<LogEntryResponse>,
}

impl From<ExerciseLogResponse> for ExerciseLogResponseBody {
    fn from(value: ExerciseLogResponse) -> Self {
        let ExerciseLogResponse { user, count, log } = value;
        Self {
            username: user.username.into(),
            count,
            id: user.id.to_string(),
            log: log.into_iter().map(LogEntryResponse::from).collect(),
        }
    }
}

/// Read a user's exercise log, filtered by `from`, then `to`, then `limit`.
#[utoipa::path(
    get,
    path = "/api/users/{_id}/logs",
    params(("_id" = String, Path, description = "User identifier"), LogQuery),
    responses(
        (status = 200, description = "Filtered log", body = ExerciseLogResponseBody),
        (status = 400, description = "Malformed filter", body = ErrorBody),
        (status = 404, description = "Unknown user", body = ErrorBody),
        (status = 503, description = "Store unavailable", body = ErrorBody)
    ),
    tags = ["exercises"],
    operation_id = "getExerciseLog"
)]
#[get("/users/{_id}/logs")]
pub async fn get_exercise_log(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<LogQuery>,
) -> ApiResult<web::Json<ExerciseLogResponseBody>> {
    let LogQuery { from, to, limit } = query.into_inner();
    let response = state
        .exercise_log
        .exercise_log(ExerciseLogRequest {
            user_id: path.into_inner(),
            from,
            to,
            limit,
        })
        .await?;
    Ok(web::Json(response.into()))
}

#[cfg(test)]
#[path = "logs_tests.rs"]
mod tests;
