//! Cart Lines Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use rust_decimal::Decimal;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};

use crate::domain::{
    carts::models::{CartLine, CartLineId},
    catalog::models::{ItemRef, ItemType},
    users::models::UserId,
};

const CREATE_CART_LINE_SQL: &str = include_str!("../sql/create_cart_line.sql");
const GET_CART_LINE_SQL: &str = include_str!("../sql/get_cart_line.sql");
const LIST_CART_LINES_SQL: &str = include_str!("../sql/list_cart_lines.sql");
const UPDATE_CART_LINE_QUANTITY_SQL: &str = include_str!("../sql/update_cart_line_quantity.sql");
const DELETE_CART_LINE_SQL: &str = include_str!("../sql/delete_cart_line.sql");
const CLEAR_CART_LINES_SQL: &str = include_str!("../sql/clear_cart_lines.sql");
const CART_TOTAL_SQL: &str = include_str!("../sql/cart_total.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartLinesRepository;

impl PgCartLinesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_line(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserId,
        item: ItemRef,
        quantity: i32,
        unit_price: Decimal,
    ) -> Result<CartLine, sqlx::Error> {
        let (destination_id, market_item_id) = match item {
            ItemRef::Destination(id) => (Some(id.get()), None),
            ItemRef::MarketItem(id) => (None, Some(id.get())),
        };

        query_as::<Postgres, CartLine>(CREATE_CART_LINE_SQL)
            .bind(user.get())
            .bind(item.item_type().as_str())
            .bind(destination_id)
            .bind(market_item_id)
            .bind(quantity)
            .bind(unit_price)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_line(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        line: CartLineId,
    ) -> Result<Option<CartLine>, sqlx::Error> {
        query_as::<Postgres, CartLine>(GET_CART_LINE_SQL)
            .bind(line.get())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn list_lines(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserId,
    ) -> Result<Vec<CartLine>, sqlx::Error> {
        query_as::<Postgres, CartLine>(LIST_CART_LINES_SQL)
            .bind(user.get())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn update_quantity(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        line: CartLineId,
        quantity: i32,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(UPDATE_CART_LINE_QUANTITY_SQL)
            .bind(line.get())
            .bind(quantity)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn delete_line(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        line: CartLineId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_CART_LINE_SQL)
            .bind(line.get())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn clear_lines(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(CLEAR_CART_LINES_SQL)
            .bind(user.get())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn total(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserId,
    ) -> Result<Decimal, sqlx::Error> {
        query_scalar::<Postgres, Decimal>(CART_TOTAL_SQL)
            .bind(user.get())
            .fetch_one(&mut **tx)
            .await
    }
}

fn try_get_item(row: &PgRow) -> sqlx::Result<ItemRef> {
    let item_type = row
        .try_get::<String, _>("item_type")?
        .parse::<ItemType>()
        .map_err(|error| sqlx::Error::ColumnDecode {
            index: "item_type".to_string(),
            source: Box::new(error),
        })?;

    let column = match item_type {
        ItemType::Destination => "destination_id",
        ItemType::MarketItem => "market_item_id",
    };

    let id = row
        .try_get::<Option<i64>, _>(column)?
        .ok_or_else(|| sqlx::Error::ColumnDecode {
            index: column.to_string(),
            source: format!("{column} is null for a {item_type} line").into(),
        })?;

    Ok(item_type.item(id))
}

fn try_get_quantity(row: &PgRow) -> sqlx::Result<u32> {
    let quantity = row.try_get::<i32, _>("quantity")?;

    u32::try_from(quantity).map_err(|error| sqlx::Error::ColumnDecode {
        index: "quantity".to_string(),
        source: Box::new(error),
    })
}

impl<'r> FromRow<'r, PgRow> for CartLine {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: CartLineId::new(row.try_get("id")?),
            user_id: UserId::new(row.try_get("user_id")?),
            item: try_get_item(row)?,
            quantity: try_get_quantity(row)?,
            unit_price: row.try_get("unit_price")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
