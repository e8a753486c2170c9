//! Update Cart Line Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use galactic_app::domain::carts::data::validate_quantity;

use crate::{carts::errors::into_status_error, extensions::*, state::State};

/// Update Quantity Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateQuantityRequest {
    /// New number of units, at least 1
    pub quantity: i64,
}

/// Update Cart Line Handler
///
/// Replaces the quantity of one of the caller's cart lines.
#[endpoint(
    tags("cart"),
    summary = "Update Cart Line Quantity",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Quantity updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Quantity below 1"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart line not found"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "cart.update",
    skip(line_id, json, depot),
    fields(
        user_id = tracing::field::Empty,
        line_id = tracing::field::Empty,
        quantity = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    line_id: PathParam<i64>,
    json: JsonBody<UpdateQuantityRequest>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_id_or_401()?;
    let line = line_id.into_inner();
    let quantity = json.into_inner().quantity;

    validate_quantity(quantity).map_err(into_status_error)?;

    let span = tracing::Span::current();

    span.record("user_id", user.get());
    span.record("line_id", line);
    span.record("quantity", quantity);

    state
        .app
        .carts
        .update_quantity(user, line.into(), quantity)
        .await
        .map_err(into_status_error)?;

    tracing::info!(line_id = line, quantity, "updated cart line quantity");

    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use galactic_app::domain::carts::{
        CartsServiceError, MockCartsService, models::CartLineId,
    };
    use salvo::test::TestClient;
    use serde_json::json;
    use testresult::TestResult;

    use crate::test_helpers::{TEST_USER_ID, carts_service};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(carts, Router::with_path("cart/update/{line_id}").put(handler))
    }

    #[tokio::test]
    async fn test_update_quantity_success() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_update_quantity()
            .once()
            .withf(|user, line, quantity| {
                *user == TEST_USER_ID && *line == CartLineId::new(4) && *quantity == 5
            })
            .return_once(|_, _, _| Ok(()));

        carts.expect_remove_line().never();

        let res = TestClient::put("http://example.com/cart/update/4")
            .json(&json!({ "quantity": 5 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_zero_quantity_returns_400() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_update_quantity().never();

        let res = TestClient::put("http://example.com/cart/update/4")
            .json(&json!({ "quantity": 0 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_line_returns_404() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_update_quantity()
            .once()
            .return_once(|_, _, _| Err(CartsServiceError::NotFound));

        let res = TestClient::put("http://example.com/cart/update/404")
            .json(&json!({ "quantity": 2 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
