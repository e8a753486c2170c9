//! Auth Config

use std::time::Duration;

use clap::Args;
use galactic_app::domain::users::DEFAULT_SESSION_TTL;

/// Session token settings.
#[derive(Debug, Args)]
pub struct AuthConfig {
    /// Seconds a login token stays valid.
    #[arg(long, env = "SESSION_TTL_SECONDS", default_value_t = DEFAULT_SESSION_TTL.as_secs())]
    pub session_ttl_seconds: u64,
}

impl AuthConfig {
    #[must_use]
    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_seconds)
    }
}
