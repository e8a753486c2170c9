//! Users service.

use std::time::Duration;

use async_trait::async_trait;
use mockall::automock;
use tokio::task::spawn_blocking;
use tracing::{debug, info, warn};

use crate::{
    auth::{SessionToken, hash_password, hash_token, verify_password},
    database::Db,
    domain::users::{
        data::NewUser,
        errors::UsersServiceError,
        models::{Session, User, UserId},
        repository::PgUsersRepository,
    },
};

/// How long a session token stays valid unless configured otherwise.
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(60 * 60);

#[derive(Debug, Clone)]
pub struct PgUsersService {
    db: Db,
    repository: PgUsersRepository,
    session_ttl: Duration,
}

impl PgUsersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgUsersRepository::new(),
            session_ttl: DEFAULT_SESSION_TTL,
        }
    }

    /// Sessions opened by this service expire `ttl` after login.
    #[must_use]
    pub fn with_session_ttl(mut self, ttl: Duration) -> Self {
        self.session_ttl = ttl;
        self
    }
}

#[async_trait]
impl UsersService for PgUsersService {
    async fn register(&self, user: NewUser) -> Result<User, UsersServiceError> {
        user.validate()?;

        let password = user.password;

        let password_hash = spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|error| UsersServiceError::PasswordHash(error.to_string()))??;

        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .create_user(&mut tx, &user.username, &user.email, &password_hash)
            .await?;

        tx.commit().await?;

        info!(user_id = %created.id, "registered user");

        Ok(created)
    }

    async fn login(&self, username: &str, password: &str) -> Result<Session, UsersServiceError> {
        let mut tx = self.db.begin().await?;

        let credentials = self
            .repository
            .find_credentials(&mut tx, username)
            .await?
            .ok_or(UsersServiceError::InvalidCredentials)?;

        // Release the connection before the slow hash check.
        tx.commit().await?;

        let password = password.to_string();
        let stored = credentials.password_hash;

        let verified = spawn_blocking(move || verify_password(&stored, &password))
            .await
            .map_err(|error| UsersServiceError::PasswordHash(error.to_string()))??;

        if !verified {
            warn!(user_id = %credentials.user_id, "rejected login with wrong password");

            return Err(UsersServiceError::InvalidCredentials);
        }

        let token = SessionToken::generate();

        let mut tx = self.db.begin().await?;

        let purged = self
            .repository
            .delete_expired_sessions(&mut tx, credentials.user_id)
            .await?;

        let expires_at = self
            .repository
            .create_session(&mut tx, &token.hash(), credentials.user_id, self.session_ttl)
            .await?;

        tx.commit().await?;

        debug!(user_id = %credentials.user_id, purged, "opened session");

        Ok(Session {
            user_id: credentials.user_id,
            token: token.into_string(),
            expires_at,
        })
    }

    async fn authenticate(&self, token: &str) -> Result<UserId, UsersServiceError> {
        let mut tx = self.db.begin().await?;

        let user = self
            .repository
            .find_session_user(&mut tx, &hash_token(token))
            .await?;

        tx.commit().await?;

        user.ok_or(UsersServiceError::NotFound)
    }
}

#[automock]
#[async_trait]
pub trait UsersService: Send + Sync {
    /// Register a new user with a hashed password.
    async fn register(&self, user: NewUser) -> Result<User, UsersServiceError>;

    /// Check credentials and open a new session.
    async fn login(&self, username: &str, password: &str) -> Result<Session, UsersServiceError>;

    /// Resolve a raw bearer token to the user it was issued to. Expired tokens are unknown.
    async fn authenticate(&self, token: &str) -> Result<UserId, UsersServiceError>;
}
