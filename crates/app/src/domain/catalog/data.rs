//! Catalog Data

use rust_decimal::Decimal;

use crate::domain::catalog::errors::CatalogError;

/// Largest price a `NUMERIC(12, 2)` column holds.
pub const MAX_PRICE: Decimal = Decimal::from_parts(3_567_587_327, 232, 0, false, 2);

/// Prices carry at most cents.
pub const PRICE_SCALE: u32 = 2;

/// Destination fields, used both to create a destination and to fully replace one.
#[derive(Debug, Clone, PartialEq)]
pub struct DestinationDetails {
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub price: Decimal,
}

/// Market item fields, used both to create a market item and to fully replace one.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketItemDetails {
    pub name: String,
    pub description: String,
    pub price: Decimal,
}

impl DestinationDetails {
    /// # Errors
    ///
    /// Returns [`CatalogError::MissingRequiredData`] for a blank name or description and
    /// [`CatalogError::InvalidData`] for a price that is negative, above [`MAX_PRICE`] or
    /// finer than a cent.
    pub fn validate(&self) -> Result<(), CatalogError> {
        validate_fields(&self.name, &self.description, self.price)
    }
}

impl MarketItemDetails {
    /// # Errors
    ///
    /// Returns [`CatalogError::MissingRequiredData`] for a blank name or description and
    /// [`CatalogError::InvalidData`] for a price that is negative, above [`MAX_PRICE`] or
    /// finer than a cent.
    pub fn validate(&self) -> Result<(), CatalogError> {
        validate_fields(&self.name, &self.description, self.price)
    }
}

fn validate_fields(name: &str, description: &str, price: Decimal) -> Result<(), CatalogError> {
    if name.trim().is_empty() || description.trim().is_empty() {
        return Err(CatalogError::MissingRequiredData);
    }

    if price < Decimal::ZERO || price > MAX_PRICE || price.normalize().scale() > PRICE_SCALE {
        return Err(CatalogError::InvalidData);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(name: &str, description: &str, price: Decimal) -> MarketItemDetails {
        MarketItemDetails {
            name: name.to_string(),
            description: description.to_string(),
            price,
        }
    }

    #[test]
    fn complete_details_are_valid() {
        assert!(details("Moon Rock", "Genuine regolith", Decimal::new(4999, 2))
            .validate()
            .is_ok());
    }

    #[test]
    fn zero_price_is_valid() {
        assert!(details("Brochure", "Free", Decimal::ZERO).validate().is_ok());
    }

    #[test]
    fn blank_name_is_missing_data() {
        let result = details("  ", "Genuine regolith", Decimal::ONE).validate();

        assert!(
            matches!(result, Err(CatalogError::MissingRequiredData)),
            "expected MissingRequiredData, got {result:?}"
        );
    }

    #[test]
    fn blank_description_is_missing_data() {
        let result = DestinationDetails {
            name: "Mars".to_string(),
            description: String::new(),
            image_url: String::new(),
            price: Decimal::ONE,
        }
        .validate();

        assert!(
            matches!(result, Err(CatalogError::MissingRequiredData)),
            "expected MissingRequiredData, got {result:?}"
        );
    }

    #[test]
    fn negative_price_is_invalid() {
        let result = details("Moon Rock", "Genuine regolith", Decimal::NEGATIVE_ONE).validate();

        assert!(
            matches!(result, Err(CatalogError::InvalidData)),
            "expected InvalidData, got {result:?}"
        );
    }

    #[test]
    fn max_price_is_the_largest_storable_value() {
        assert_eq!(MAX_PRICE, Decimal::new(999_999_999_999, 2));
        assert!(details("Dyson Sphere", "Whole star", MAX_PRICE).validate().is_ok());
    }

    #[test]
    fn price_above_storable_range_is_invalid() {
        let result =
            details("Dyson Sphere", "Whole star", Decimal::new(10_000_000_000, 0)).validate();

        assert!(
            matches!(result, Err(CatalogError::InvalidData)),
            "expected InvalidData, got {result:?}"
        );
    }

    #[test]
    fn fractions_of_a_cent_are_invalid() {
        let result = details("Moon Rock", "Genuine regolith", Decimal::new(1_005, 3)).validate();

        assert!(
            matches!(result, Err(CatalogError::InvalidData)),
            "expected InvalidData, got {result:?}"
        );
    }

    #[test]
    fn trailing_zeros_beyond_cents_are_valid() {
        assert!(details("Moon Rock", "Genuine regolith", Decimal::new(1_500, 3))
            .validate()
            .is_ok());
    }
}
