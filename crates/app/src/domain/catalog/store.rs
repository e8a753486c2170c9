//! Catalog store.

use async_trait::async_trait;
use mockall::automock;
use rust_decimal::Decimal;

use crate::{
    database::Db,
    domain::catalog::{
        data::{DestinationDetails, MarketItemDetails},
        errors::CatalogError,
        models::{Destination, DestinationId, ItemRef, MarketItem, MarketItemId},
        repositories::{PgDestinationsRepository, PgMarketItemsRepository},
    },
};

#[derive(Debug, Clone)]
pub struct PgCatalogStore {
    db: Db,
    destinations_repository: PgDestinationsRepository,
    market_items_repository: PgMarketItemsRepository,
}

impl PgCatalogStore {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            destinations_repository: PgDestinationsRepository::new(),
            market_items_repository: PgMarketItemsRepository::new(),
        }
    }
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
    async fn list_destinations(&self) -> Result<Vec<Destination>, CatalogError> {
        let mut tx = self.db.begin().await?;

        let destinations = self
            .destinations_repository
            .list_destinations(&mut tx)
            .await?;

        tx.commit().await?;

        Ok(destinations)
    }

    async fn get_destination(
        &self,
        destination: DestinationId,
    ) -> Result<Option<Destination>, CatalogError> {
        let mut tx = self.db.begin().await?;

        let found = self
            .destinations_repository
            .get_destination(&mut tx, destination)
            .await?;

        tx.commit().await?;

        Ok(found)
    }

    async fn create_destination(
        &self,
        details: DestinationDetails,
    ) -> Result<Destination, CatalogError> {
        details.validate()?;

        let mut tx = self.db.begin().await?;

        let created = self
            .destinations_repository
            .create_destination(&mut tx, &details)
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_destination(
        &self,
        destination: DestinationId,
        details: DestinationDetails,
    ) -> Result<bool, CatalogError> {
        details.validate()?;

        let mut tx = self.db.begin().await?;

        let rows_affected = self
            .destinations_repository
            .update_destination(&mut tx, destination, &details)
            .await?;

        tx.commit().await?;

        Ok(rows_affected > 0)
    }

    async fn list_market_items(&self) -> Result<Vec<MarketItem>, CatalogError> {
        let mut tx = self.db.begin().await?;

        let items = self
            .market_items_repository
            .list_market_items(&mut tx)
            .await?;

        tx.commit().await?;

        Ok(items)
    }

    async fn get_market_item(
        &self,
        item: MarketItemId,
    ) -> Result<Option<MarketItem>, CatalogError> {
        let mut tx = self.db.begin().await?;

        let found = self
            .market_items_repository
            .get_market_item(&mut tx, item)
            .await?;

        tx.commit().await?;

        Ok(found)
    }

    async fn create_market_item(
        &self,
        details: MarketItemDetails,
    ) -> Result<MarketItem, CatalogError> {
        details.validate()?;

        let mut tx = self.db.begin().await?;

        let created = self
            .market_items_repository
            .create_market_item(&mut tx, &details)
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_market_item(
        &self,
        item: MarketItemId,
        details: MarketItemDetails,
    ) -> Result<bool, CatalogError> {
        details.validate()?;

        let mut tx = self.db.begin().await?;

        let rows_affected = self
            .market_items_repository
            .update_market_item(&mut tx, item, &details)
            .await?;

        tx.commit().await?;

        Ok(rows_affected > 0)
    }

    async fn item_price(&self, item: ItemRef) -> Result<Option<Decimal>, CatalogError> {
        let mut tx = self.db.begin().await?;

        let price = match item {
            ItemRef::Destination(id) => self.destinations_repository.get_price(&mut tx, id).await?,
            ItemRef::MarketItem(id) => self.market_items_repository.get_price(&mut tx, id).await?,
        };

        tx.commit().await?;

        Ok(price)
    }
}

#[automock]
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// All destinations, ordered by id.
    async fn list_destinations(&self) -> Result<Vec<Destination>, CatalogError>;

    /// A single destination, or `None` when the id is unknown.
    async fn get_destination(
        &self,
        destination: DestinationId,
    ) -> Result<Option<Destination>, CatalogError>;

    /// Creates a destination and returns it with its assigned id.
    async fn create_destination(
        &self,
        details: DestinationDetails,
    ) -> Result<Destination, CatalogError>;

    /// Replaces every mutable field of a destination. Returns `false` when the id is unknown.
    async fn update_destination(
        &self,
        destination: DestinationId,
        details: DestinationDetails,
    ) -> Result<bool, CatalogError>;

    /// All market items, ordered by id.
    async fn list_market_items(&self) -> Result<Vec<MarketItem>, CatalogError>;

    /// A single market item, or `None` when the id is unknown.
    async fn get_market_item(&self, item: MarketItemId)
    -> Result<Option<MarketItem>, CatalogError>;

    /// Creates a market item and returns it with its assigned id.
    async fn create_market_item(
        &self,
        details: MarketItemDetails,
    ) -> Result<MarketItem, CatalogError>;

    /// Replaces every mutable field of a market item. Returns `false` when the id is unknown.
    async fn update_market_item(
        &self,
        item: MarketItemId,
        details: MarketItemDetails,
    ) -> Result<bool, CatalogError>;

    /// Current price of a catalog item of either type.
    async fn item_price(&self, item: ItemRef) -> Result<Option<Decimal>, CatalogError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{domain::catalog::data::MAX_PRICE, test::TestContext};

    use super::*;

    fn mars(price: Decimal) -> DestinationDetails {
        DestinationDetails {
            name: "Mars".to_string(),
            description: "Red dunes and Olympus Mons".to_string(),
            image_url: "https://img.example/mars.png".to_string(),
            price,
        }
    }

    fn moon_rock(price: Decimal) -> MarketItemDetails {
        MarketItemDetails {
            name: "Moon Rock".to_string(),
            description: "Certified lunar regolith".to_string(),
            price,
        }
    }

    #[tokio::test]
    async fn create_destination_assigns_id_and_keeps_fields() -> TestResult {
        let ctx = TestContext::new().await;

        let created = ctx
            .catalog
            .create_destination(mars(Decimal::new(150_000, 2)))
            .await?;

        assert!(created.id.get() > 0, "store should assign a positive id");
        assert_eq!(created.name, "Mars");
        assert_eq!(created.price, Decimal::new(150_000, 2));

        let fetched = ctx.catalog.get_destination(created.id).await?;

        assert_eq!(fetched, Some(created));

        Ok(())
    }

    #[tokio::test]
    async fn get_destination_unknown_id_returns_none() -> TestResult {
        let ctx = TestContext::new().await;

        let fetched = ctx.catalog.get_destination(DestinationId::new(999)).await?;

        assert!(fetched.is_none(), "expected None, got {fetched:?}");

        Ok(())
    }

    #[tokio::test]
    async fn list_destinations_is_empty_without_data() -> TestResult {
        let ctx = TestContext::new().await;

        let destinations = ctx.catalog.list_destinations().await?;

        assert!(destinations.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn list_destinations_orders_by_id() -> TestResult {
        let ctx = TestContext::new().await;

        let first = ctx.catalog.create_destination(mars(Decimal::ONE)).await?;
        let second = ctx
            .catalog
            .create_destination(DestinationDetails {
                name: "Europa".to_string(),
                ..mars(Decimal::TEN)
            })
            .await?;

        let ids: Vec<_> = ctx
            .catalog
            .list_destinations()
            .await?
            .into_iter()
            .map(|destination| destination.id)
            .collect();

        assert_eq!(ids, vec![first.id, second.id]);

        Ok(())
    }

    #[tokio::test]
    async fn create_destination_blank_name_is_rejected() {
        let ctx = TestContext::new().await;

        let result = ctx
            .catalog
            .create_destination(DestinationDetails {
                name: String::new(),
                ..mars(Decimal::ONE)
            })
            .await;

        assert!(
            matches!(result, Err(CatalogError::MissingRequiredData)),
            "expected MissingRequiredData, got {result:?}"
        );
    }

    #[tokio::test]
    async fn update_destination_replaces_fields() -> TestResult {
        let ctx = TestContext::new().await;

        let created = ctx.catalog.create_destination(mars(Decimal::ONE)).await?;

        let updated = ctx
            .catalog
            .update_destination(
                created.id,
                DestinationDetails {
                    name: "Mars Deluxe".to_string(),
                    ..mars(Decimal::new(200_000, 2))
                },
            )
            .await?;

        assert!(updated, "update of an existing destination should report true");

        let fetched = ctx.catalog.get_destination(created.id).await?;

        assert!(
            matches!(
                fetched,
                Some(Destination { ref name, price, .. })
                    if name == "Mars Deluxe" && price == Decimal::new(200_000, 2)
            ),
            "unexpected destination {fetched:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn update_destination_unknown_id_returns_false() -> TestResult {
        let ctx = TestContext::new().await;

        let updated = ctx
            .catalog
            .update_destination(DestinationId::new(404), mars(Decimal::ONE))
            .await?;

        assert!(!updated);

        Ok(())
    }

    #[tokio::test]
    async fn create_market_item_negative_price_is_invalid() {
        let ctx = TestContext::new().await;

        let result = ctx
            .catalog
            .create_market_item(moon_rock(Decimal::NEGATIVE_ONE))
            .await;

        assert!(
            matches!(result, Err(CatalogError::InvalidData)),
            "expected InvalidData, got {result:?}"
        );
    }

    #[tokio::test]
    async fn create_destination_price_beyond_column_range_is_invalid() {
        let ctx = TestContext::new().await;

        let result = ctx
            .catalog
            .create_destination(mars(Decimal::new(10_000_000_000, 0)))
            .await;

        assert!(
            matches!(result, Err(CatalogError::InvalidData)),
            "expected InvalidData, got {result:?}"
        );
    }

    #[tokio::test]
    async fn create_destination_at_max_price_is_stored() -> TestResult {
        let ctx = TestContext::new().await;

        let created = ctx
            .catalog
            .create_destination(mars(MAX_PRICE))
            .await?;

        let price = ctx.catalog.item_price(ItemRef::Destination(created.id)).await?;

        assert_eq!(price, Some(Decimal::new(999_999_999_999, 2)));

        Ok(())
    }

    #[tokio::test]
    async fn numeric_overflow_from_the_database_maps_to_invalid_data() {
        let ctx = TestContext::new().await;

        let error = sqlx::query(
            "INSERT INTO market_items (name, description, price) VALUES ($1, $2, $3)",
        )
        .bind("Neutron Star")
        .bind("Very dense")
        .bind(Decimal::new(10_000_000_000, 0))
        .execute(ctx.db.pool())
        .await
        .map(|_| ())
        .map_err(CatalogError::from);

        assert!(
            matches!(error, Err(CatalogError::InvalidData)),
            "expected InvalidData, got {error:?}"
        );
    }

    #[tokio::test]
    async fn market_item_roundtrip_through_update() -> TestResult {
        let ctx = TestContext::new().await;

        let created = ctx
            .catalog
            .create_market_item(moon_rock(Decimal::new(4_999, 2)))
            .await?;

        let updated = ctx
            .catalog
            .update_market_item(created.id, moon_rock(Decimal::new(5_999, 2)))
            .await?;

        assert!(updated);

        let items = ctx.catalog.list_market_items().await?;

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].price, Decimal::new(5_999, 2));

        Ok(())
    }

    #[tokio::test]
    async fn item_price_resolves_both_item_types() -> TestResult {
        let ctx = TestContext::new().await;

        let destination = ctx
            .catalog
            .create_destination(mars(Decimal::new(150_000, 2)))
            .await?;
        let item = ctx
            .catalog
            .create_market_item(moon_rock(Decimal::new(4_999, 2)))
            .await?;

        let destination_price = ctx
            .catalog
            .item_price(ItemRef::Destination(destination.id))
            .await?;
        let item_price = ctx
            .catalog
            .item_price(ItemRef::MarketItem(item.id))
            .await?;

        assert_eq!(destination_price, Some(Decimal::new(150_000, 2)));
        assert_eq!(item_price, Some(Decimal::new(4_999, 2)));

        Ok(())
    }

    #[tokio::test]
    async fn item_price_does_not_cross_item_types() -> TestResult {
        let ctx = TestContext::new().await;

        let destination = ctx.catalog.create_destination(mars(Decimal::ONE)).await?;

        let price = ctx
            .catalog
            .item_price(ItemRef::MarketItem(MarketItemId::new(destination.id.get())))
            .await?;

        assert_eq!(price, None);

        Ok(())
    }
}
