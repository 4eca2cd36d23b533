//! Static landing page and its stylesheet, embedded at compile time.

use actix_web::http::header::{self, ContentType};
use actix_web::{HttpResponse, get};

const INDEX_HTML: &str = include_str!("../../../static/index.html");
const STYLE_CSS: &str = include_str!("../../../static/style.css");

/// Serve the HTML landing page.
#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(INDEX_HTML)
}

/// Serve the landing page stylesheet.
#[get("/public/style.css")]
pub async fn stylesheet() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, "text/css; charset=utf-8"))
        .body(STYLE_CSS)
}
