//! Get Destination Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use galactic_app::domain::catalog::models::Destination;

use crate::{catalog::errors::into_status_error, extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DestinationResponse {
    /// The unique identifier of the destination
    pub id: i64,

    pub name: String,

    pub description: String,

    /// Image URL, empty when the destination has no image
    pub image_url: String,

    /// Price as a decimal string, e.g. "1500.00"
    pub price: String,

    /// The date and time the destination was created
    pub created_at: String,

    /// The date and time the destination was last updated
    pub updated_at: String,
}

impl From<Destination> for DestinationResponse {
    fn from(destination: Destination) -> Self {
        DestinationResponse {
            id: destination.id.get(),
            name: destination.name,
            description: destination.description,
            image_url: destination.image_url,
            price: destination.price.to_string(),
            created_at: destination.created_at.to_string(),
            updated_at: destination.updated_at.to_string(),
        }
    }
}

/// Get Destination Handler
///
/// Returns a destination.
#[endpoint(
    tags("destinations"),
    summary = "Get Destination",
    responses(
        (status_code = StatusCode::OK, description = "Destination found"),
        (status_code = StatusCode::NOT_FOUND, description = "Destination not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    destination: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<DestinationResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let destination = state
        .app
        .catalog
        .get_destination(destination.into_inner().into())
        .await
        .map_err(into_status_error)?
        .ok_or_else(|| StatusError::not_found().brief("Destination not found"))?;

    Ok(Json(destination.into()))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use galactic_app::domain::catalog::{MockCatalogStore, models::DestinationId};

    use crate::test_helpers::{catalog_service, make_destination};

    use super::*;

    fn make_service(catalog: MockCatalogStore) -> Service {
        catalog_service(catalog, Router::with_path("destinations/{destination}").get(handler))
    }

    #[tokio::test]
    async fn test_get_returns_destination_with_decimal_price() -> TestResult {
        let mut catalog = MockCatalogStore::new();

        catalog
            .expect_get_destination()
            .once()
            .withf(|id| *id == DestinationId::new(7))
            .return_once(|_| Ok(Some(make_destination(7, Decimal::new(150_000, 2)))));

        catalog.expect_list_destinations().never();
        catalog.expect_item_price().never();

        let mut res = TestClient::get("http://example.com/destinations/7")
            .send(&make_service(catalog))
            .await;

        let body: DestinationResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.id, 7);
        assert_eq!(body.price, "1500.00");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_destination_returns_404() -> TestResult {
        let mut catalog = MockCatalogStore::new();

        catalog
            .expect_get_destination()
            .once()
            .return_once(|_| Ok(None));

        let res = TestClient::get("http://example.com/destinations/99")
            .send(&make_service(catalog))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_non_numeric_id_returns_400() -> TestResult {
        let mut catalog = MockCatalogStore::new();

        catalog.expect_get_destination().never();

        let res = TestClient::get("http://example.com/destinations/mars")
            .send(&make_service(catalog))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
