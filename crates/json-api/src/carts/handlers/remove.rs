//! Remove Cart Line Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{carts::errors::into_status_error, extensions::*, state::State};

/// Remove Cart Line Handler
#[endpoint(
    tags("cart"),
    summary = "Remove Cart Line",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Cart line removed"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart line not found"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "cart.remove",
    skip(line_id, depot),
    fields(user_id = tracing::field::Empty, line_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    line_id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_id_or_401()?;
    let line = line_id.into_inner();

    let span = tracing::Span::current();

    span.record("user_id", user.get());
    span.record("line_id", line);

    state
        .app
        .carts
        .remove_line(user, line.into())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use galactic_app::domain::carts::{
        CartsServiceError, MockCartsService, models::CartLineId,
    };
    use salvo::test::TestClient;
    use testresult::TestResult;

    use crate::test_helpers::{TEST_USER_ID, carts_service};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(
            carts,
            Router::with_path("cart/remove/{line_id}").delete(handler),
        )
    }

    #[tokio::test]
    async fn test_remove_line_success() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_remove_line()
            .once()
            .withf(|user, line| *user == TEST_USER_ID && *line == CartLineId::new(4))
            .return_once(|_, _| Ok(()));

        carts.expect_clear_cart().never();

        let res = TestClient::delete("http://example.com/cart/remove/4")
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_remove_missing_line_returns_404() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_remove_line()
            .once()
            .return_once(|_, _| Err(CartsServiceError::NotFound));

        let res = TestClient::delete("http://example.com/cart/remove/4")
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
