//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects every REST endpoint and the request and response
//! bodies they exchange. The document is served by Swagger UI in debug
//! builds and exported via `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::exercises::{AddExerciseRequestBody, ExerciseResponse};
use crate::inbound::http::logs::{ExerciseLogResponseBody, LogEntryResponse};
use crate::inbound::http::users::{CreateUserRequestBody, UserResponse};
use crate::inbound::http::validation::FieldValue;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Exercise tracker API",
        description = "Create users, log exercises and read filtered exercise logs.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::exercises::add_exercise,
        crate::inbound::http::logs::get_exercise_log,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorBody,
        FieldValue,
        CreateUserRequestBody,
        UserResponse,
        AddExerciseRequestBody,
        ExerciseResponse,
        LogEntryResponse,
        ExerciseLogResponseBody,
    )),
    tags(
        (name = "users", description = "Creating and listing users"),
        (name = "exercises", description = "Logging exercises and reading logs"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
