//! User Models

use jiff::Timestamp;

use crate::ids::TypedId;

/// User Id
pub type UserId = TypedId<User>;

/// User Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub created_at: Timestamp,
}

/// Logged-in session. `token` is the raw bearer token and is never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: UserId,
    pub token: String,
    pub expires_at: Timestamp,
}
