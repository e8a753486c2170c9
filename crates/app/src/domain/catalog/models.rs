//! Catalog Models

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::ids::TypedId;

/// Destination Id
pub type DestinationId = TypedId<Destination>;

/// Market Item Id
pub type MarketItemId = TypedId<MarketItem>;

/// Destination Model
#[derive(Debug, Clone, PartialEq)]
pub struct Destination {
    pub id: DestinationId,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub price: Decimal,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Market Item Model
#[derive(Debug, Clone, PartialEq)]
pub struct MarketItem {
    pub id: MarketItemId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Kind of catalog item a cart line points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemType {
    Destination,
    MarketItem,
}

impl ItemType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Destination => "destination",
            Self::MarketItem => "market_item",
        }
    }

    /// Pair this type with a raw catalog id.
    #[must_use]
    pub fn item(self, id: i64) -> ItemRef {
        match self {
            Self::Destination => ItemRef::Destination(id.into()),
            Self::MarketItem => ItemRef::MarketItem(id.into()),
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Item type discriminator outside of `destination` / `market_item`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid item type: {0}")]
pub struct InvalidItemType(pub String);

impl FromStr for ItemType {
    type Err = InvalidItemType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "destination" => Ok(Self::Destination),
            "market_item" => Ok(Self::MarketItem),
            other => Err(InvalidItemType(other.to_string())),
        }
    }
}

/// Reference to exactly one catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemRef {
    Destination(DestinationId),
    MarketItem(MarketItemId),
}

impl ItemRef {
    #[must_use]
    pub const fn item_type(self) -> ItemType {
        match self {
            Self::Destination(_) => ItemType::Destination,
            Self::MarketItem(_) => ItemType::MarketItem,
        }
    }

    /// Raw id of the referenced item, without its type.
    #[must_use]
    pub const fn id(self) -> i64 {
        match self {
            Self::Destination(id) => id.get(),
            Self::MarketItem(id) => id.get(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_type_parses_known_discriminators() {
        assert_eq!("destination".parse::<ItemType>(), Ok(ItemType::Destination));
        assert_eq!("market_item".parse::<ItemType>(), Ok(ItemType::MarketItem));
    }

    #[test]
    fn item_type_rejects_unknown_discriminator() {
        let result = "spaceship".parse::<ItemType>();

        assert_eq!(result, Err(InvalidItemType("spaceship".to_string())));
    }

    #[test]
    fn item_type_rejects_plural_table_names() {
        assert!("destinations".parse::<ItemType>().is_err());
        assert!("market_items".parse::<ItemType>().is_err());
    }

    #[test]
    fn item_ref_keeps_type_and_id() {
        let item = ItemType::MarketItem.item(12);

        assert_eq!(item, ItemRef::MarketItem(MarketItemId::new(12)));
        assert_eq!(item.item_type(), ItemType::MarketItem);
        assert_eq!(item.id(), 12);
    }
}
