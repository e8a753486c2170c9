//! List Cart Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use galactic_app::domain::carts::models::CartLine;

use crate::{carts::errors::into_status_error, extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartLineResponse {
    /// The unique identifier of the cart line
    pub id: i64,

    pub user_id: i64,

    /// Id of the destination or market item
    pub item_id: i64,

    /// Either `destination` or `market_item`
    pub item_type: String,

    pub quantity: u32,

    /// Price per unit when the item was added, as a decimal string
    pub unit_price: String,

    /// Unit price multiplied by quantity
    pub line_total: String,

    pub created_at: String,

    pub updated_at: String,
}

impl From<CartLine> for CartLineResponse {
    fn from(line: CartLine) -> Self {
        CartLineResponse {
            id: line.id.get(),
            user_id: line.user_id.get(),
            item_id: line.item.id(),
            item_type: line.item.item_type().to_string(),
            quantity: line.quantity,
            unit_price: line.unit_price.to_string(),
            line_total: line.line_total().to_string(),
            created_at: line.created_at.to_string(),
            updated_at: line.updated_at.to_string(),
        }
    }
}

/// List Cart Handler
///
/// Returns the lines of the caller's cart.
#[endpoint(
    tags("cart"),
    summary = "List Cart Lines",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Cart lines"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart is empty"),
        (status_code = StatusCode::FORBIDDEN, description = "Not the caller's cart"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    user_id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<Vec<CartLineResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_id_or_401()?;

    if user.get() != user_id.into_inner() {
        return Err(StatusError::forbidden().brief("You can only view your own cart"));
    }

    let lines = state
        .app
        .carts
        .list_lines(user)
        .await
        .map_err(into_status_error)?;

    if lines.is_empty() {
        return Err(StatusError::not_found().brief("Cart is empty"));
    }

    Ok(Json(lines.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use galactic_app::domain::{
        carts::MockCartsService,
        catalog::models::{DestinationId, ItemRef, MarketItemId},
    };
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::test_helpers::{TEST_USER_ID, carts_service, make_line};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(carts, Router::with_path("cart/{user_id}").get(handler))
    }

    #[tokio::test]
    async fn test_list_returns_lines_with_snapshot_prices() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_list_lines()
            .once()
            .withf(|user| *user == TEST_USER_ID)
            .return_once(|_| {
                Ok(vec![
                    make_line(
                        1,
                        ItemRef::Destination(DestinationId::new(7)),
                        2,
                        Decimal::new(150_000, 2),
                    ),
                    make_line(
                        2,
                        ItemRef::MarketItem(MarketItemId::new(3)),
                        1,
                        Decimal::new(4_999, 2),
                    ),
                ])
            });

        carts.expect_add_item().never();
        carts.expect_checkout().never();

        let mut res = TestClient::get(format!("http://example.com/cart/{TEST_USER_ID}"))
            .send(&make_service(carts))
            .await;

        let body: Vec<CartLineResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.len(), 2);

        let first = body.first().map(|line| {
            (
                line.item_id,
                line.item_type.as_str(),
                line.quantity,
                line.unit_price.as_str(),
                line.line_total.as_str(),
            )
        });

        assert_eq!(first, Some((7, "destination", 2, "1500.00", "3000.00")));

        Ok(())
    }

    #[tokio::test]
    async fn test_list_empty_cart_returns_404() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_list_lines()
            .once()
            .return_once(|_| Ok(vec![]));

        let res = TestClient::get(format!("http://example.com/cart/{TEST_USER_ID}"))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_list_another_users_cart_returns_403() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_list_lines().never();

        let res = TestClient::get("http://example.com/cart/999")
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }
}
