//! Users Repository

use std::time::Duration;

use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};

use crate::domain::users::models::{User, UserId};

const CREATE_USER_SQL: &str = include_str!("sql/create_user.sql");
const FIND_CREDENTIALS_SQL: &str = include_str!("sql/find_credentials.sql");
const CREATE_SESSION_SQL: &str = include_str!("sql/create_session.sql");
const FIND_SESSION_USER_SQL: &str = include_str!("sql/find_session_user.sql");
const DELETE_EXPIRED_SESSIONS_SQL: &str = include_str!("sql/delete_expired_sessions.sql");

/// Stored password hash for a username.
pub(crate) struct Credentials {
    pub(crate) user_id: UserId,
    pub(crate) password_hash: String,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgUsersRepository;

impl PgUsersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_user(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, sqlx::Error> {
        query_as::<Postgres, User>(CREATE_USER_SQL)
            .bind(username)
            .bind(email)
            .bind(password_hash)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn find_credentials(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        username: &str,
    ) -> Result<Option<Credentials>, sqlx::Error> {
        let row = query(FIND_CREDENTIALS_SQL)
            .bind(username)
            .fetch_optional(&mut **tx)
            .await?;

        row.map(|row| {
            Ok(Credentials {
                user_id: UserId::new(row.try_get("id")?),
                password_hash: row.try_get("password_hash")?,
            })
        })
        .transpose()
    }

    /// Stores a session valid for `ttl` from the database clock and returns its expiry.
    pub(crate) async fn create_session(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        token_hash: &str,
        user: UserId,
        ttl: Duration,
    ) -> Result<Timestamp, sqlx::Error> {
        query_scalar::<Postgres, SqlxTimestamp>(CREATE_SESSION_SQL)
            .bind(token_hash)
            .bind(user.get())
            .bind(ttl.as_secs_f64())
            .fetch_one(&mut **tx)
            .await
            .map(SqlxTimestamp::to_jiff)
    }

    pub(crate) async fn delete_expired_sessions(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserId,
    ) -> Result<u64, sqlx::Error> {
        query(DELETE_EXPIRED_SESSIONS_SQL)
            .bind(user.get())
            .execute(&mut **tx)
            .await
            .map(|result| result.rows_affected())
    }

    pub(crate) async fn find_session_user(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        token_hash: &str,
    ) -> Result<Option<UserId>, sqlx::Error> {
        query_scalar::<Postgres, i64>(FIND_SESSION_USER_SQL)
            .bind(token_hash)
            .fetch_optional(&mut **tx)
            .await
            .map(|id| id.map(UserId::new))
    }
}

impl<'r> FromRow<'r, PgRow> for User {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: UserId::new(row.try_get("id")?),
            username: row.try_get("username")?,
            email: row.try_get("email")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
