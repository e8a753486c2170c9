//! Market Items Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use rust_decimal::Decimal;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};

use crate::domain::catalog::{
    data::MarketItemDetails,
    models::{MarketItem, MarketItemId},
};

const LIST_MARKET_ITEMS_SQL: &str = include_str!("../sql/list_market_items.sql");
const GET_MARKET_ITEM_SQL: &str = include_str!("../sql/get_market_item.sql");
const CREATE_MARKET_ITEM_SQL: &str = include_str!("../sql/create_market_item.sql");
const UPDATE_MARKET_ITEM_SQL: &str = include_str!("../sql/update_market_item.sql");
const GET_MARKET_ITEM_PRICE_SQL: &str = include_str!("../sql/get_market_item_price.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgMarketItemsRepository;

impl PgMarketItemsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_market_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<MarketItem>, sqlx::Error> {
        query_as::<Postgres, MarketItem>(LIST_MARKET_ITEMS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_market_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: MarketItemId,
    ) -> Result<Option<MarketItem>, sqlx::Error> {
        query_as::<Postgres, MarketItem>(GET_MARKET_ITEM_SQL)
            .bind(item.get())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn create_market_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        details: &MarketItemDetails,
    ) -> Result<MarketItem, sqlx::Error> {
        query_as::<Postgres, MarketItem>(CREATE_MARKET_ITEM_SQL)
            .bind(&details.name)
            .bind(&details.description)
            .bind(details.price)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_market_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: MarketItemId,
        details: &MarketItemDetails,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(UPDATE_MARKET_ITEM_SQL)
            .bind(item.get())
            .bind(&details.name)
            .bind(&details.description)
            .bind(details.price)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn get_price(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: MarketItemId,
    ) -> Result<Option<Decimal>, sqlx::Error> {
        query_scalar::<Postgres, Decimal>(GET_MARKET_ITEM_PRICE_SQL)
            .bind(item.get())
            .fetch_optional(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for MarketItem {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: MarketItemId::new(row.try_get("id")?),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            price: row.try_get("price")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
