//! CORS middleware.
//!
//! Browser preflights are answered here (204, empty body) before routing,
//! and every response leaving the service carries the same header triple,
//! error paths included.

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, HeaderValue, Method, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::http::server::AppState;

pub async fn cors_middleware(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    if req.method() == Method::OPTIONS {
        let mut response = StatusCode::NO_CONTENT.into_response();
        apply_cors_headers(response.headers_mut(), &state.config.cors.allow_origin);
        return response;
    }

    let mut response = next.run(req).await;
    apply_cors_headers(response.headers_mut(), &state.config.cors.allow_origin);
    response
}

/// Insert the header triple advertised on every response.
fn apply_cors_headers(headers: &mut HeaderMap, allow_origin: &str) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_str(allow_origin).unwrap_or_else(|_| HeaderValue::from_static("*")),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
}
