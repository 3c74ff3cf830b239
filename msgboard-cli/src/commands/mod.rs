//! Subcommand implementations

pub mod init_db;
pub mod serve;

use std::time::Duration;

use clap::Args;
use msgboard_server::config::DEFAULT_MAX_CONNECTIONS;
use msgboard_server::{DbConfig, RetryPolicy};

pub use init_db::{run_init_db, InitDbArgs};
pub use serve::{run_serve, ServeArgs};

/// MySQL connection flags shared by every command
#[derive(Args, Debug, Clone)]
pub struct DbArgs {
    /// MySQL host
    #[arg(long, env = "MYSQL_HOST", default_value = "localhost")]
    pub mysql_host: String,

    /// MySQL port
    #[arg(long, env = "MYSQL_PORT", default_value_t = 3306)]
    pub mysql_port: u16,

    /// MySQL user
    #[arg(long, env = "MYSQL_USER", default_value = "root")]
    pub mysql_user: String,

    /// MySQL password
    #[arg(long, env = "MYSQL_PASSWORD", default_value = "root", hide_env_values = true)]
    pub mysql_password: String,

    /// MySQL database name
    #[arg(long, env = "MYSQL_DB", default_value = "devops")]
    pub mysql_db: String,

    /// Seconds a query waits for a database connection before failing
    #[arg(long, env = "MYSQL_CONNECT_TIMEOUT_SECS", default_value_t = 5)]
    pub mysql_connect_timeout_secs: u64,
}

impl DbArgs {
    pub fn to_config(&self) -> DbConfig {
        DbConfig {
            host: self.mysql_host.clone(),
            port: self.mysql_port,
            user: self.mysql_user.clone(),
            password: self.mysql_password.clone(),
            database: self.mysql_db.clone(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: Duration::from_secs(self.mysql_connect_timeout_secs),
        }
    }
}

/// Schema initialization retry flags
#[derive(Args, Debug, Clone)]
pub struct RetryArgs {
    /// Schema initialization attempts before giving up
    #[arg(long, env = "MSGBOARD_INIT_ATTEMPTS", default_value_t = 5)]
    pub init_attempts: u32,

    /// Seconds to wait between schema initialization attempts
    #[arg(long, env = "MSGBOARD_INIT_INTERVAL_SECS", default_value_t = 5)]
    pub init_interval_secs: u64,
}

impl RetryArgs {
    pub fn to_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.init_attempts,
            Duration::from_secs(self.init_interval_secs),
        )
    }
}
