//! Inbound request handling.
//!
//! # Responsibilities
//! - Generate unique request ID (UUID v4) for tracing
//! - Extract and normalize the `city` query parameter
//! - Treat an absent query string as an empty parameter map

use std::collections::HashMap;

use axum::http::{HeaderName, HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Canonical request-ID header.
pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Example shown to callers that omit the city parameter.
pub const CITY_EXAMPLE: &str = "/weather?city=London";

/// UUID v4 request-ID source for the set-request-id layer.
#[derive(Clone, Copy, Default)]
pub struct UuidRequestId;

impl MakeRequestId for UuidRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Extract and normalize the `city` parameter.
///
/// Returns `None` when the parameter is absent or blank after trimming.
pub fn extract_city(params: &HashMap<String, String>) -> Option<String> {
    params
        .get("city")
        .map(|city| city.trim())
        .filter(|city| !city.is_empty())
        .map(str::to_string)
}
