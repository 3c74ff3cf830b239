//! Database layer - message storage behind a trait
//!
//! [`MessageStore`] is the seam handlers talk to. [`MySqlStore`] is the
//! production backend; unit tests swap in an in-memory store.

pub mod mysql;
pub mod schema;

#[cfg(test)]
pub(crate) mod memory;

use async_trait::async_trait;
use serde::Serialize;

pub use mysql::MySqlStore;
pub use schema::{init_schema, SchemaInitError};

/// Message record from database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Message {
    pub id: i64,
    /// `None` when the form field was omitted on submit
    pub message: Option<String>,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("database unavailable: {0}")]
    Unavailable(String),
}

/// Why a liveness probe failed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProbeFailure {
    /// The database could not be reached at all
    #[error("connection failure: {0}")]
    Connection(String),

    /// The database answered but the probe query failed
    #[error("query failure: {0}")]
    Query(String),
}

impl ProbeFailure {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Connection(_) => "connection",
            Self::Query(_) => "query",
        }
    }
}

impl From<sqlx::Error> for ProbeFailure {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Protocol(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => Self::Connection(e.to_string()),
            other => Self::Query(other.to_string()),
        }
    }
}

/// Storage operations needed by the message board.
#[async_trait]
pub trait MessageStore: Send + Sync + 'static {
    /// Create the `messages` table if it does not exist.
    async fn create_schema(&self) -> Result<(), DbError>;

    /// Insert one message, returning the stored row.
    async fn insert(&self, message: Option<&str>) -> Result<Message, DbError>;

    /// All stored messages, oldest first.
    async fn list(&self) -> Result<Vec<Message>, DbError>;

    /// Liveness probe (`SELECT 1`).
    async fn ping(&self) -> Result<(), ProbeFailure>;
}
