//! HTTP server command
//!
//! Initializes the schema, then serves the message board until shutdown.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use msgboard_server::ServerConfig;

use super::{DbArgs, RetryArgs};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "MSGBOARD_BIND", default_value = "0.0.0.0:5000")]
    pub bind: SocketAddr,

    /// Exit instead of serving when schema initialization never succeeds
    #[arg(long, env = "MSGBOARD_REQUIRE_SCHEMA")]
    pub require_schema: bool,

    #[command(flatten)]
    pub retry: RetryArgs,

    #[command(flatten)]
    pub db: DbArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = ServerConfig {
        bind_addr: args.bind,
        init_retry: args.retry.to_policy(),
        require_schema: args.require_schema,
    };

    tracing::info!("Starting msgboard server on {}", config.bind_addr);

    // Run server (blocks until shutdown)
    msgboard_server::serve(args.db.to_config(), config)
        .await
        .context("Server error")?;

    Ok(())
}
