// src/api/handlers/page.rs

use actix_web::{http::header::ContentType, HttpResponse};

const INDEX_HTML: &str = include_str!("../../web/index.html");

/// Serves the single page. Also used as the fallback for every unmatched path.
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(INDEX_HTML)
}
