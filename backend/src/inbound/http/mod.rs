//! HTTP inbound adapter exposing the REST endpoints and landing page.

pub mod error;
pub mod exercises;
pub mod health;
pub mod landing;
pub mod logs;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

use actix_web::http::header;
use actix_web::middleware::DefaultHeaders;
use actix_web::web;

pub use error::ApiResult;

/// Register the API routes, the landing page and the extractor error
/// handlers on an application or scope.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use exercise_tracker::inbound::http::{configure, permissive_cors};
///
/// let app = App::new().wrap(permissive_cors()).configure(configure);
/// # let _ = app;
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .app_data(web::FormConfig::default().error_handler(error::form_error_handler))
        .app_data(web::QueryConfig::default().error_handler(error::query_error_handler))
        .service(
            web::scope("/api")
                .service(users::create_user)
                .service(users::list_users)
                .service(exercises::add_exercise)
                .service(logs::get_exercise_log),
        )
        .service(landing::index)
        .service(landing::stylesheet);
}

/// Middleware allowing any origin to read responses.
pub fn permissive_cors() -> DefaultHeaders {
    DefaultHeaders::new().add((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
}
