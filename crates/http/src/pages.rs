//! Embedded dashboard pages.
//!
//! The HTML is compiled into the binary so the server has no runtime asset
//! directory to locate.

use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};

const INDEX_HTML: &str = include_str!("pages/index.html");
const MAP_HTML: &str = include_str!("pages/map.html");

pub async fn serve_index() -> Response {
    (StatusCode::OK, [(header::CONTENT_TYPE, "text/html; charset=utf-8")], Html(INDEX_HTML))
        .into_response()
}

pub async fn serve_map() -> Response {
    (StatusCode::OK, [(header::CONTENT_TYPE, "text/html; charset=utf-8")], Html(MAP_HTML))
        .into_response()
}
