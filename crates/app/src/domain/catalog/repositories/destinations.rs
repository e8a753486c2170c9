//! Destinations Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use rust_decimal::Decimal;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};

use crate::domain::catalog::{
    data::DestinationDetails,
    models::{Destination, DestinationId},
};

const LIST_DESTINATIONS_SQL: &str = include_str!("../sql/list_destinations.sql");
const GET_DESTINATION_SQL: &str = include_str!("../sql/get_destination.sql");
const CREATE_DESTINATION_SQL: &str = include_str!("../sql/create_destination.sql");
const UPDATE_DESTINATION_SQL: &str = include_str!("../sql/update_destination.sql");
const GET_DESTINATION_PRICE_SQL: &str = include_str!("../sql/get_destination_price.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgDestinationsRepository;

impl PgDestinationsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_destinations(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<Destination>, sqlx::Error> {
        query_as::<Postgres, Destination>(LIST_DESTINATIONS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_destination(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        destination: DestinationId,
    ) -> Result<Option<Destination>, sqlx::Error> {
        query_as::<Postgres, Destination>(GET_DESTINATION_SQL)
            .bind(destination.get())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn create_destination(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        details: &DestinationDetails,
    ) -> Result<Destination, sqlx::Error> {
        query_as::<Postgres, Destination>(CREATE_DESTINATION_SQL)
            .bind(&details.name)
            .bind(&details.description)
            .bind(&details.image_url)
            .bind(details.price)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_destination(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        destination: DestinationId,
        details: &DestinationDetails,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(UPDATE_DESTINATION_SQL)
            .bind(destination.get())
            .bind(&details.name)
            .bind(&details.description)
            .bind(&details.image_url)
            .bind(details.price)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn get_price(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        destination: DestinationId,
    ) -> Result<Option<Decimal>, sqlx::Error> {
        query_scalar::<Postgres, Decimal>(GET_DESTINATION_PRICE_SQL)
            .bind(destination.get())
            .fetch_optional(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for Destination {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: DestinationId::new(row.try_get("id")?),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            image_url: row.try_get("image_url")?,
            price: row.try_get("price")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
