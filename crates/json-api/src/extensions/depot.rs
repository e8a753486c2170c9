//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};

use galactic_app::domain::users::models::UserId;

const USER_ID_KEY: &str = "user_id";

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    fn insert_user_id(&mut self, user: UserId);

    /// The user resolved by the auth middleware.
    fn user_id_or_401(&self) -> Result<UserId, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_user_id(&mut self, user: UserId) {
        self.insert(USER_ID_KEY, user);
    }

    fn user_id_or_401(&self) -> Result<UserId, StatusError> {
        self.get::<UserId>(USER_ID_KEY)
            .copied()
            .map_err(|_ignored| StatusError::unauthorized())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_round_trips_through_depot() {
        let mut depot = Depot::new();

        depot.insert_user_id(UserId::new(42));

        assert_eq!(depot.user_id_or_401().ok(), Some(UserId::new(42)));
    }

    #[test]
    fn missing_user_id_is_unauthorized() {
        let depot = Depot::new();

        let result = depot.user_id_or_401();

        assert!(
            matches!(result, Err(ref error) if error.code == salvo::http::StatusCode::UNAUTHORIZED),
            "expected 401, got {result:?}"
        );
    }
}
