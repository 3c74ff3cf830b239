//! msgboard-server: minimal message board over MySQL
//!
//! Serves a home page listing stored messages, a form submission endpoint
//! and a database-backed health check. The `messages` table is created at
//! startup, retrying while the database is still coming up.

pub mod config;
pub mod db;
pub mod http;

use std::sync::Arc;

pub use config::{DbConfig, RetryPolicy, ServerConfig};
pub use db::{init_schema, Message, MessageStore, MySqlStore, SchemaInitError};
pub use http::{build_router, run_server, AppState, ServerError};

/// Build the MySQL store from `db` and run the server until shutdown.
pub async fn serve(db: DbConfig, config: ServerConfig) -> Result<(), ServerError> {
    tracing::info!(
        host = %db.host,
        port = db.port,
        database = %db.database,
        "Using MySQL backend"
    );
    let store = Arc::new(MySqlStore::connect_lazy(&db));
    run_server(store, config).await
}
