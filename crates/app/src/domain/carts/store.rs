//! Cart store.

use async_trait::async_trait;
use mockall::automock;
use rust_decimal::Decimal;

use crate::{
    database::Db,
    domain::{
        carts::{
            data::{NewCartLine, validate_quantity},
            errors::CartsServiceError,
            models::{CartLine, CartLineId},
            repositories::PgCartLinesRepository,
        },
        users::models::UserId,
    },
};

#[derive(Debug, Clone)]
pub struct PgCartStore {
    db: Db,
    lines_repository: PgCartLinesRepository,
}

impl PgCartStore {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            lines_repository: PgCartLinesRepository::new(),
        }
    }
}

#[async_trait]
impl CartStore for PgCartStore {
    async fn add_line(&self, line: NewCartLine) -> Result<CartLine, CartsServiceError> {
        let quantity = validate_quantity(line.quantity)?;

        if line.unit_price < Decimal::ZERO {
            return Err(CartsServiceError::InvalidData);
        }

        let mut tx = self.db.begin().await?;

        let created = self
            .lines_repository
            .create_line(&mut tx, line.user_id, line.item, quantity, line.unit_price)
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_quantity(
        &self,
        line: CartLineId,
        quantity: i64,
    ) -> Result<(), CartsServiceError> {
        let quantity = validate_quantity(quantity)?;

        let mut tx = self.db.begin().await?;

        let rows_affected = self
            .lines_repository
            .update_quantity(&mut tx, line, quantity)
            .await?;

        if rows_affected == 0 {
            return Err(CartsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }

    async fn remove_line(&self, line: CartLineId) -> Result<(), CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.lines_repository.delete_line(&mut tx, line).await?;

        if rows_affected == 0 {
            return Err(CartsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }

    async fn get_line(&self, line: CartLineId) -> Result<Option<CartLine>, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let found = self.lines_repository.get_line(&mut tx, line).await?;

        tx.commit().await?;

        Ok(found)
    }

    async fn list_lines(&self, user: UserId) -> Result<Vec<CartLine>, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let lines = self.lines_repository.list_lines(&mut tx, user).await?;

        tx.commit().await?;

        Ok(lines)
    }

    async fn total(&self, user: UserId) -> Result<Decimal, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let total = self.lines_repository.total(&mut tx, user).await?;

        tx.commit().await?;

        Ok(total)
    }

    async fn clear(&self, user: UserId) -> Result<u64, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let removed = self.lines_repository.clear_lines(&mut tx, user).await?;

        tx.commit().await?;

        Ok(removed)
    }
}

#[automock]
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Inserts a cart line with an already resolved unit price.
    async fn add_line(&self, line: NewCartLine) -> Result<CartLine, CartsServiceError>;

    /// Replaces the quantity of a line.
    async fn update_quantity(
        &self,
        line: CartLineId,
        quantity: i64,
    ) -> Result<(), CartsServiceError>;

    /// Deletes a line. Fails with [`CartsServiceError::NotFound`] when it does not exist.
    async fn remove_line(&self, line: CartLineId) -> Result<(), CartsServiceError>;

    async fn get_line(&self, line: CartLineId) -> Result<Option<CartLine>, CartsServiceError>;

    /// All lines of a user, ordered by id.
    async fn list_lines(&self, user: UserId) -> Result<Vec<CartLine>, CartsServiceError>;

    /// Sum of `unit_price * quantity` over the user's lines; zero for an empty cart.
    async fn total(&self, user: UserId) -> Result<Decimal, CartsServiceError>;

    /// Deletes every line of a user and returns how many were removed.
    async fn clear(&self, user: UserId) -> Result<u64, CartsServiceError>;
}
