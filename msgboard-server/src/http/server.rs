//! Axum server setup
//!
//! Router assembly, schema initialization at startup, and graceful shutdown
//! on SIGTERM/Ctrl+C.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use super::render::Templates;
use super::routes;
use crate::config::ServerConfig;
use crate::db::{init_schema, MessageStore, SchemaInitError};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MessageStore>,
    pub templates: Arc<Templates>,
}

impl AppState {
    pub fn new(store: Arc<dyn MessageStore>) -> Result<Self, ServerError> {
        Ok(Self {
            store,
            templates: Arc::new(Templates::new()?),
        })
    }
}

/// Build the application router with all routes
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::home::router())
        .merge(routes::submit::router())
        .merge(routes::health::router())
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Run the HTTP server.
///
/// Initializes the schema first. When every attempt fails the server keeps
/// going in degraded mode unless `config.require_schema` is set.
///
/// # Example
///
/// ```ignore
/// let store = Arc::new(MySqlStore::connect_lazy(&DbConfig::default()));
/// run_server(store, ServerConfig::default()).await?;
/// ```
pub async fn run_server(
    store: Arc<dyn MessageStore>,
    config: ServerConfig,
) -> Result<(), ServerError> {
    match init_schema(store.as_ref(), &config.init_retry).await {
        Ok(_) => {}
        Err(e) if config.require_schema => return Err(e.into()),
        Err(e) => {
            tracing::error!(error = %e, "Serving without a verified schema");
        }
    }

    let app = build_router(AppState::new(store)?);

    // Bind listener
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    // Run with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Schema(#[from] SchemaInitError),

    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}
