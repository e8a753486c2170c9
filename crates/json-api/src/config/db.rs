//! Database Config

use std::time::Duration;

use clap::Args;
use galactic_app::database::PoolSettings;

/// Database settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: String,

    /// Maximum number of pooled connections.
    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = 10_u32)]
    pub db_max_connections: u32,

    /// Seconds to wait for a free pooled connection.
    #[arg(long, env = "DB_ACQUIRE_TIMEOUT_SECONDS", default_value_t = 5_u64)]
    pub db_acquire_timeout_seconds: u64,

    /// Per-statement timeout in milliseconds.
    #[arg(long, env = "DB_STATEMENT_TIMEOUT_MS", default_value_t = 10_000_u64)]
    pub db_statement_timeout_ms: u64,
}

impl DatabaseConfig {
    /// Pool limits for the application database.
    #[must_use]
    pub fn pool_settings(&self) -> PoolSettings {
        PoolSettings {
            max_connections: self.db_max_connections,
            acquire_timeout: Duration::from_secs(self.db_acquire_timeout_seconds),
            statement_timeout: Duration::from_millis(self.db_statement_timeout_ms),
        }
    }
}
