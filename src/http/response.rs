//! Response construction.
//!
//! # Responsibilities
//! - JSON error bodies with a uniform `error` field
//! - Verbatim forwarding of the upstream success payload
//!
//! The CORS header triple is applied by middleware rather than here, so it
//! also covers responses produced outside these helpers (the 404 fallback,
//! preflight answers).

use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde_json::Value;

/// JSON error response with the given status.
pub fn json_error(status: StatusCode, body: Value) -> Response {
    (status, Json(body)).into_response()
}

/// Forward an upstream payload untouched.
///
/// The bytes go out exactly as received; round-tripping through
/// `serde_json::Value` would reorder object keys and break byte-level
/// pass-through.
pub fn passthrough(payload: Vec<u8>) -> Response {
    let mut response = Response::new(Body::from(payload));
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    response
}
