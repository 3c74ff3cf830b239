//! Health check endpoint
//!
//! Probes the database with `SELECT 1`. The failure kind is logged; the body
//! is only ever `healthy` or `unhealthy`.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

use crate::db::{MessageStore, ProbeFailure};
use crate::http::server::AppState;

/// Outcome of a liveness probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    Healthy,
    Unhealthy(ProbeFailure),
}

impl HealthStatus {
    pub async fn probe(store: &dyn MessageStore) -> Self {
        match store.ping().await {
            Ok(()) => Self::Healthy,
            Err(failure) => Self::Unhealthy(failure),
        }
    }
}

impl IntoResponse for HealthStatus {
    fn into_response(self) -> Response {
        match self {
            Self::Healthy => (StatusCode::OK, "healthy").into_response(),
            Self::Unhealthy(failure) => {
                tracing::warn!(kind = failure.kind(), error = %failure, "Health check failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "unhealthy").into_response()
            }
        }
    }
}

/// GET /health
async fn health(State(state): State<Arc<AppState>>) -> HealthStatus {
    HealthStatus::probe(state.store.as_ref()).await
}

/// Health routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}
