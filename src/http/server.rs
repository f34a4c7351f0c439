//! HTTP server setup and the proxy handler.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, CORS)
//! - Bind server to listener, drive graceful shutdown
//! - Run the per-request proxy state machine
//! - Translate upstream outcomes into client responses

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{any, get},
    Router,
};
use serde_json::json;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::ProxyConfig;
use crate::http::middleware::cors::cors_middleware;
use crate::http::request::{extract_city, UuidRequestId, CITY_EXAMPLE, X_REQUEST_ID};
use crate::http::response::{json_error, passthrough};
use crate::upstream::{UpstreamOutcome, WeatherClient};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ProxyConfig>,
    pub weather: WeatherClient,
}

/// HTTP server for the weather proxy.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ProxyConfig) -> Self {
        let weather = WeatherClient::new(config.upstream.clone());
        let state = AppState {
            config: Arc::new(config),
            weather,
        };

        let router = Self::build_router(state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// CORS sits innermost so the preflight short-circuit still picks up a
    /// request ID and a trace span from the outer layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/weather", any(weather_handler))
            .route("/health", get(health_handler))
            .layer(axum::middleware::from_fn_with_state(
                state.clone(),
                cors_middleware,
            ))
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, UuidRequestId))
            .with_state(state)
    }

    /// Run the server until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Main proxy handler.
///
/// Terminal after the first matching branch: method gate, parameter
/// validation, secret resolution, upstream call, response translation.
/// Preflight never reaches this point; the CORS middleware answers it.
async fn weather_handler(
    State(state): State<AppState>,
    method: Method,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if method != Method::GET {
        return json_error(
            StatusCode::METHOD_NOT_ALLOWED,
            json!({ "error": "Method not allowed. Use GET." }),
        );
    }

    let Some(city) = extract_city(&params) else {
        return json_error(
            StatusCode::BAD_REQUEST,
            json!({
                "error": "Missing or empty `city` query parameter.",
                "example": CITY_EXAMPLE,
            }),
        );
    };

    let Some(api_key) = state.config.upstream.api_key.as_deref() else {
        tracing::error!(
            api_key_set = false,
            "refusing request: no weather provider key configured"
        );
        return json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({ "error": "Server configuration error: API key not set." }),
        );
    };

    match state.weather.fetch_forecast(&city, api_key).await {
        Ok(UpstreamOutcome::Success(payload)) => passthrough(payload),
        Ok(UpstreamOutcome::Provider(error)) => {
            let status = error.http_status(&state.config.upstream.error_map);
            json_error(status, json!({ "error": error.message, "code": error.code }))
        }
        Err(e) => {
            tracing::error!(city = %city, error = %e, "upstream fetch failed");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "error": "Failed to fetch weather data. Please try again later.",
                    "detail": e.to_string(),
                }),
            )
        }
    }
}

/// Liveness probe.
async fn health_handler() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}
