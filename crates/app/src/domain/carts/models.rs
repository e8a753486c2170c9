//! Cart Models

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::{
    domain::{catalog::models::ItemRef, users::models::UserId},
    ids::TypedId,
};

/// Cart Line Id
pub type CartLineId = TypedId<CartLine>;

/// One line of a user's cart. `unit_price` is the catalog price at the time the
/// line was added and does not follow later catalog changes.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub id: CartLineId,
    pub user_id: UserId,
    pub item: ItemRef,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl CartLine {
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// Result of adding an item to a cart.
#[derive(Debug, Clone, PartialEq)]
pub struct AddedItem {
    pub unit_price: Decimal,
    pub line: CartLine,
}

#[cfg(test)]
mod tests {
    use crate::domain::catalog::models::DestinationId;

    use super::*;

    #[test]
    fn line_total_multiplies_price_by_quantity() {
        let line = CartLine {
            id: CartLineId::new(1),
            user_id: UserId::new(1),
            item: ItemRef::Destination(DestinationId::new(7)),
            quantity: 2,
            unit_price: Decimal::new(150_000, 2),
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        };

        assert_eq!(line.line_total(), Decimal::new(300_000, 2));
    }
}
