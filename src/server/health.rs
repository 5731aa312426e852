//! Health endpoints
//!
//! - `/` - Service banner, doubles as a health check
//! - `/health` - Liveness probe for container orchestration
//!
//! Both handlers are stateless and always answer 200 with a fixed JSON body.

use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Status reported by every health response
pub const STATUS_HEALTHY: &str = "healthy";

/// Message reported by the root endpoint
pub const ROOT_MESSAGE: &str = "Agentic API is running";

/// Body of the health endpoints
///
/// Serializes as `{"status":...}` with `message` appended only when set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl HealthResponse {
    /// Response for `GET /`
    pub const fn root() -> Self {
        Self {
            status: STATUS_HEALTHY,
            message: Some(ROOT_MESSAGE),
        }
    }

    /// Response for `GET /health`
    pub const fn health() -> Self {
        Self {
            status: STATUS_HEALTHY,
            message: None,
        }
    }
}

/// Root handler
async fn root() -> Json<HealthResponse> {
    Json(HealthResponse::root())
}

/// Liveness probe handler
///
/// If this responds, the process is alive.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::health())
}

/// Build the router for the health endpoints
///
/// Requests are traced at debug level so probes stay out of info logs.
pub fn build_router() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
        )
}
