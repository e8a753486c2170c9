//! Cart Data

use rust_decimal::Decimal;

use crate::domain::{
    carts::errors::CartsServiceError,
    catalog::models::{ItemRef, ItemType},
    users::models::UserId,
};

/// Request to put a catalog item into a user's cart.
#[derive(Debug, Clone, PartialEq)]
pub struct AddCartItem {
    pub user_id: UserId,
    pub item_id: i64,
    pub item_type: ItemType,
    pub quantity: i64,
}

impl AddCartItem {
    #[must_use]
    pub fn item(&self) -> ItemRef {
        self.item_type.item(self.item_id)
    }
}

/// Cart line ready for insertion, with its price already resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCartLine {
    pub user_id: UserId,
    pub item: ItemRef,
    pub quantity: i64,
    pub unit_price: Decimal,
}

/// Checks that a requested quantity is at least one and fits the stored column.
///
/// # Errors
///
/// Returns [`CartsServiceError::InvalidQuantity`] otherwise.
pub fn validate_quantity(quantity: i64) -> Result<i32, CartsServiceError> {
    match i32::try_from(quantity) {
        Ok(valid) if valid >= 1 => Ok(valid),
        _ => Err(CartsServiceError::InvalidQuantity(quantity)),
    }
}
