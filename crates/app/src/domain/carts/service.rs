//! Carts service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use rust_decimal::Decimal;
use tracing::{Span, info};

use crate::domain::{
    carts::{
        data::{AddCartItem, NewCartLine, validate_quantity},
        errors::CartsServiceError,
        models::{AddedItem, CartLine, CartLineId},
        store::CartStore,
    },
    catalog::CatalogStore,
    users::models::UserId,
};

/// Cart operations on top of a [`CartStore`], resolving prices from a [`CatalogStore`].
#[derive(Clone)]
pub struct StoreCartsService {
    carts: Arc<dyn CartStore>,
    catalog: Arc<dyn CatalogStore>,
}

impl StoreCartsService {
    #[must_use]
    pub fn new(carts: Arc<dyn CartStore>, catalog: Arc<dyn CatalogStore>) -> Self {
        Self { carts, catalog }
    }

    async fn owned_line(
        &self,
        user: UserId,
        line: CartLineId,
    ) -> Result<CartLine, CartsServiceError> {
        match self.carts.get_line(line).await? {
            Some(found) if found.user_id == user => Ok(found),
            _ => Err(CartsServiceError::NotFound),
        }
    }
}

#[async_trait]
impl CartsService for StoreCartsService {
    #[tracing::instrument(
        name = "carts.service.add_item",
        skip(self, item),
        fields(
            user_id = %item.user_id,
            item_type = %item.item_type,
            item_id = item.item_id,
            unit_price = tracing::field::Empty
        ),
        err
    )]
    async fn add_item(&self, item: AddCartItem) -> Result<AddedItem, CartsServiceError> {
        validate_quantity(item.quantity)?;

        let reference = item.item();

        let unit_price = self
            .catalog
            .item_price(reference)
            .await?
            .ok_or(CartsServiceError::ItemNotFound)?;

        Span::current().record("unit_price", tracing::field::display(unit_price));

        let line = self
            .carts
            .add_line(NewCartLine {
                user_id: item.user_id,
                item: reference,
                quantity: item.quantity,
                unit_price,
            })
            .await?;

        info!(line_id = %line.id, quantity = line.quantity, "added cart line");

        Ok(AddedItem { unit_price, line })
    }

    async fn list_lines(&self, user: UserId) -> Result<Vec<CartLine>, CartsServiceError> {
        self.carts.list_lines(user).await
    }

    async fn checkout(&self, user: UserId) -> Result<Decimal, CartsServiceError> {
        self.carts.total(user).await
    }

    async fn clear_cart(&self, user: UserId) -> Result<u64, CartsServiceError> {
        self.carts.clear(user).await
    }

    async fn update_quantity(
        &self,
        user: UserId,
        line: CartLineId,
        quantity: i64,
    ) -> Result<(), CartsServiceError> {
        validate_quantity(quantity)?;

        self.owned_line(user, line).await?;

        self.carts.update_quantity(line, quantity).await
    }

    async fn remove_line(&self, user: UserId, line: CartLineId) -> Result<(), CartsServiceError> {
        self.owned_line(user, line).await?;

        self.carts.remove_line(line).await
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Add a catalog item to a user's cart at the item's current price.
    async fn add_item(&self, item: AddCartItem) -> Result<AddedItem, CartsServiceError>;

    /// Lines in the user's cart, ordered by id.
    async fn list_lines(&self, user: UserId) -> Result<Vec<CartLine>, CartsServiceError>;

    /// Total amount due for the user's cart.
    async fn checkout(&self, user: UserId) -> Result<Decimal, CartsServiceError>;

    /// Empty the user's cart, returning the number of removed lines.
    async fn clear_cart(&self, user: UserId) -> Result<u64, CartsServiceError>;

    /// Change the quantity of a line owned by `user`.
    async fn update_quantity(
        &self,
        user: UserId,
        line: CartLineId,
        quantity: i64,
    ) -> Result<(), CartsServiceError>;

    /// Remove a line owned by `user`.
    async fn remove_line(&self, user: UserId, line: CartLineId) -> Result<(), CartsServiceError>;
}
