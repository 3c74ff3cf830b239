//! MySQL implementation of [`MessageStore`]
//!
//! The pool is created lazily so a database that is still starting does not
//! abort construction; the first query opens the first connection.

use async_trait::async_trait;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

use super::{DbError, Message, MessageStore, ProbeFailure};
use crate::config::DbConfig;

const CREATE_MESSAGES_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS messages (
        id INT AUTO_INCREMENT PRIMARY KEY,
        message TEXT
    )
"#;

/// MySQL-backed message store
#[derive(Clone, Debug)]
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    /// Build a lazily connecting store from config.
    pub fn connect_lazy(config: &DbConfig) -> Self {
        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect_lazy_with(config.connect_options());
        Self { pool }
    }
}

#[async_trait]
impl MessageStore for MySqlStore {
    async fn create_schema(&self) -> Result<(), DbError> {
        sqlx::query(CREATE_MESSAGES_TABLE)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn insert(&self, message: Option<&str>) -> Result<Message, DbError> {
        let result = sqlx::query("INSERT INTO messages (message) VALUES (?)")
            .bind(message)
            .execute(&self.pool)
            .await?;

        Ok(Message {
            id: result.last_insert_id() as i64,
            message: message.map(str::to_owned),
        })
    }

    async fn list(&self) -> Result<Vec<Message>, DbError> {
        let messages =
            sqlx::query_as::<_, Message>("SELECT id, message FROM messages ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        Ok(messages)
    }

    async fn ping(&self) -> Result<(), ProbeFailure> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
