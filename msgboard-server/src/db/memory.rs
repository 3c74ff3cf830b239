//! In-memory message store for unit tests
//!
//! Mirrors the MySQL backend closely enough to exercise handlers and the
//! schema initializer, and can simulate an unreachable database.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{DbError, Message, MessageStore, ProbeFailure};

#[derive(Debug, Default)]
struct Inner {
    available: bool,
    schema: bool,
    schema_attempts: u32,
    failing_schema_attempts: u32,
    rows: Vec<Message>,
}

#[derive(Debug)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                available: true,
                ..Inner::default()
            }),
        }
    }

    /// Store with the `messages` table already created.
    pub fn with_schema() -> Self {
        let store = Self::new();
        store.inner.lock().unwrap().schema = true;
        store
    }

    pub fn set_available(&self, available: bool) {
        self.inner.lock().unwrap().available = available;
    }

    /// Make the next `n` schema attempts fail as if the server were starting.
    pub fn fail_next_schema_attempts(&self, n: u32) {
        self.inner.lock().unwrap().failing_schema_attempts = n;
    }

    pub fn has_schema(&self) -> bool {
        self.inner.lock().unwrap().schema
    }

    pub fn schema_attempts(&self) -> u32 {
        self.inner.lock().unwrap().schema_attempts
    }
}

fn unreachable() -> DbError {
    DbError::Unavailable("connection refused".into())
}

fn missing_table() -> DbError {
    DbError::Unavailable("table 'messages' doesn't exist".into())
}

#[async_trait]
impl MessageStore for MemoryStore {
    async fn create_schema(&self) -> Result<(), DbError> {
        let mut inner = self.inner.lock().unwrap();
        inner.schema_attempts += 1;
        if !inner.available {
            return Err(unreachable());
        }
        if inner.failing_schema_attempts > 0 {
            inner.failing_schema_attempts -= 1;
            return Err(unreachable());
        }
        inner.schema = true;
        Ok(())
    }

    async fn insert(&self, message: Option<&str>) -> Result<Message, DbError> {
        let mut inner = self.inner.lock().unwrap();
        if !inner.available {
            return Err(unreachable());
        }
        if !inner.schema {
            return Err(missing_table());
        }
        let row = Message {
            id: inner.rows.len() as i64 + 1,
            message: message.map(str::to_owned),
        };
        inner.rows.push(row.clone());
        Ok(row)
    }

    async fn list(&self) -> Result<Vec<Message>, DbError> {
        let inner = self.inner.lock().unwrap();
        if !inner.available {
            return Err(unreachable());
        }
        if !inner.schema {
            return Err(missing_table());
        }
        Ok(inner.rows.clone())
    }

    async fn ping(&self) -> Result<(), ProbeFailure> {
        if self.inner.lock().unwrap().available {
            Ok(())
        } else {
            Err(ProbeFailure::Connection("connection refused".into()))
        }
    }
}
