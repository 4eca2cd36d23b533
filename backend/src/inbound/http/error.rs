//! HTTP adapter mapping for domain errors.
//!
//! Every failure is rendered as `{"error": "<message>"}` with a status code
//! derived from [`ErrorCode`]. Internal errors are logged and their message
//! replaced before it reaches the client.

use actix_web::error::{JsonPayloadError, QueryPayloadError, UrlencodedError};
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Message sent to clients in place of internal error details.
pub const REDACTED_MESSAGE: &str = "Internal server error";

/// Message sent to clients when the user store cannot be reached.
pub const UNAVAILABLE_MESSAGE: &str = "User store unavailable";

/// Message for bodies that are neither JSON nor urlencoded.
pub const UNSUPPORTED_BODY_MESSAGE: &str =
    "request body must be application/json or application/x-www-form-urlencoded";

/// Wire shape of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable failure description.
    #[schema(example = "User not found")]
    pub error: String,
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn client_message(error: &Error) -> String {
    match error.code() {
        ErrorCode::InternalError => REDACTED_MESSAGE.to_owned(),
        ErrorCode::ServiceUnavailable => UNAVAILABLE_MESSAGE.to_owned(),
        _ => error.message().to_owned(),
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        match self.code() {
            ErrorCode::InternalError => error!(
                code = %self.code(),
                trace_id = self.trace_id(),
                message = self.message(),
                "internal error"
            ),
            ErrorCode::ServiceUnavailable => warn!(
                code = %self.code(),
                trace_id = self.trace_id(),
                message = self.message(),
                "dependency unavailable"
            ),
            _ => debug!(
                code = %self.code(),
                trace_id = self.trace_id(),
                message = self.message(),
                "request rejected"
            ),
        }

        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(ErrorBody {
            error: client_message(self),
        })
    }
}

/// `JsonConfig` error handler routing malformed bodies through [`Error`].
///
/// JSON is tried before the form extractor, so a content type that suits
/// neither surfaces here.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    match err {
        JsonPayloadError::ContentType => Error::invalid_request(UNSUPPORTED_BODY_MESSAGE).into(),
        other => Error::invalid_request(format!("invalid request body: {other}")).into(),
    }
}

/// `FormConfig` error handler routing malformed bodies through [`Error`].
pub fn form_error_handler(err: UrlencodedError, _req: &HttpRequest) -> actix_web::Error {
    Error::invalid_request(format!("invalid form body: {err}")).into()
}

/// `QueryConfig` error handler routing malformed query strings through [`Error`].
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    Error::invalid_request(format!("invalid query string: {err}")).into()
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
