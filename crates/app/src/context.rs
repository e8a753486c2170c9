//! App Context

use std::{sync::Arc, time::Duration};

use thiserror::Error;

use crate::{
    database::{self, Db, PoolSettings},
    domain::{
        carts::{CartsService, PgCartStore, StoreCartsService},
        catalog::{CatalogStore, PgCatalogStore},
        users::{PgUsersService, UsersService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub catalog: Arc<dyn CatalogStore>,
    pub carts: Arc<dyn CartsService>,
    pub users: Arc<dyn UsersService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(
        url: &str,
        settings: PoolSettings,
        session_ttl: Duration,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect_with(url, settings)
            .await
            .map_err(AppInitError::Database)?;

        Ok(Self::from_db(Db::new(pool), session_ttl))
    }

    /// Wire the Postgres-backed stores and services around one pool.
    #[must_use]
    pub fn from_db(db: Db, session_ttl: Duration) -> Self {
        let catalog: Arc<dyn CatalogStore> = Arc::new(PgCatalogStore::new(db.clone()));
        let cart_store = Arc::new(PgCartStore::new(db.clone()));

        Self {
            carts: Arc::new(StoreCartsService::new(cart_store, catalog.clone())),
            users: Arc::new(PgUsersService::new(db).with_session_ttl(session_ttl)),
            catalog,
        }
    }
}
