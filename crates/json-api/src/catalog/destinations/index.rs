//! Destination Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{catalog::destinations::get::DestinationResponse, extensions::*, state::State};

/// Destination Index Handler
///
/// Returns every destination, ordered by id.
#[endpoint(tags("destinations"), summary = "List Destinations")]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<Vec<DestinationResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let destinations = state
        .app
        .catalog
        .list_destinations()
        .await
        .or_500("failed to fetch destinations")?;

    Ok(Json(destinations.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use galactic_app::domain::catalog::{CatalogError, MockCatalogStore};
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::test_helpers::{catalog_service, make_destination};

    use super::*;

    fn make_service(catalog: MockCatalogStore) -> Service {
        catalog_service(catalog, Router::with_path("destinations").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_destinations_in_store_order() -> TestResult {
        let mut catalog = MockCatalogStore::new();

        catalog.expect_list_destinations().once().return_once(|| {
            Ok(vec![
                make_destination(1, Decimal::new(150_000, 2)),
                make_destination(2, Decimal::ZERO),
            ])
        });

        let mut res = TestClient::get("http://example.com/destinations")
            .send(&make_service(catalog))
            .await;

        let body: Vec<DestinationResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(
            body.iter().map(|d| d.id).collect::<Vec<_>>(),
            vec![1, 2]
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_index_returns_empty_list() -> TestResult {
        let mut catalog = MockCatalogStore::new();

        catalog
            .expect_list_destinations()
            .once()
            .return_once(|| Ok(vec![]));

        let mut res = TestClient::get("http://example.com/destinations")
            .send(&make_service(catalog))
            .await;

        let body: Vec<DestinationResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.is_empty(), "expected no destinations");

        Ok(())
    }

    #[tokio::test]
    async fn test_index_storage_error_returns_500() -> TestResult {
        let mut catalog = MockCatalogStore::new();

        catalog
            .expect_list_destinations()
            .once()
            .return_once(|| Err(CatalogError::Sql(sqlx::Error::PoolTimedOut)));

        let res = TestClient::get("http://example.com/destinations")
            .send(&make_service(catalog))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
