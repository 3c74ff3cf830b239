//! Schema initialization command
//!
//! Creates the `messages` table and exits. Useful as a container init step.

use anyhow::{Context, Result};
use clap::Parser;

use msgboard_server::{init_schema, MySqlStore};

use super::{DbArgs, RetryArgs};

/// Arguments for the init-db command
#[derive(Parser, Debug)]
pub struct InitDbArgs {
    #[command(flatten)]
    pub retry: RetryArgs,

    #[command(flatten)]
    pub db: DbArgs,
}

/// Create the schema, failing when every attempt fails
pub async fn run_init_db(args: InitDbArgs) -> Result<()> {
    let store = MySqlStore::connect_lazy(&args.db.to_config());

    let attempts = init_schema(&store, &args.retry.to_policy())
        .await
        .context("Failed to initialize database schema")?;

    tracing::info!(attempts, "Schema ready");
    Ok(())
}
