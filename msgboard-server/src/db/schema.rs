//! Schema initialization with bounded retry
//!
//! The database may still be starting when the server comes up, so table
//! creation is attempted several times with a fixed pause in between.

use crate::config::RetryPolicy;

use super::{DbError, MessageStore};

/// Schema initialization failed on every attempt
#[derive(Debug, thiserror::Error)]
pub enum SchemaInitError {
    #[error("schema initialization failed after {attempts} attempts: {last_error}")]
    Exhausted { attempts: u32, last_error: DbError },
}

/// Create the schema, retrying per `policy`.
///
/// Returns the number of attempts it took on success.
pub async fn init_schema(
    store: &dyn MessageStore,
    policy: &RetryPolicy,
) -> Result<u32, SchemaInitError> {
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        match store.create_schema().await {
            Ok(()) => {
                tracing::info!(attempt, "Database initialized");
                return Ok(attempt);
            }
            Err(e) if attempt >= max_attempts => {
                tracing::warn!(
                    attempt,
                    max_attempts,
                    error = %e,
                    "Database not ready, giving up"
                );
                return Err(SchemaInitError::Exhausted {
                    attempts: attempt,
                    last_error: e,
                });
            }
            Err(e) => {
                tracing::warn!(
                    attempt,
                    max_attempts,
                    error = %e,
                    retry_in_secs = policy.interval.as_secs_f64(),
                    "Database not ready yet, retrying"
                );
                tokio::time::sleep(policy.interval).await;
                attempt += 1;
            }
        }
    }
}
