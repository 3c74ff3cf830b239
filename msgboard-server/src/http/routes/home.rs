//! Home page - lists every stored message

use std::sync::Arc;

use axum::{extract::State, response::Html, routing::get, Router};

use crate::http::error::ApiError;
use crate::http::server::AppState;

/// GET / - render all messages
async fn home(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    let messages = state.store.list().await?;
    tracing::debug!(count = messages.len(), "Rendering home page");

    let page = state.templates.index(&messages)?;
    Ok(Html(page))
}

/// Home routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(home))
}
