//! Message submission endpoint

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::NewMessage;
use crate::http::server::AppState;

/// Submit response, echoing what was stored
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub message: Option<String>,
}

/// POST /submit - store one message
///
/// A missing `new_message` field stores NULL rather than failing.
async fn submit(
    State(state): State<Arc<AppState>>,
    NewMessage(new_message): NewMessage,
) -> Result<Json<SubmitResponse>, ApiError> {
    let stored = state.store.insert(new_message.as_deref()).await?;
    tracing::info!(id = stored.id, "Message stored");

    Ok(Json(SubmitResponse {
        message: stored.message,
    }))
}

/// Submit routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/submit", post(submit))
}
