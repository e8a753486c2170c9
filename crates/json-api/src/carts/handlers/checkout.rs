//! Checkout Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{carts::errors::into_status_error, extensions::*, state::State};

/// Checkout Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutResponse {
    /// Sum of unit price times quantity over the cart, as a decimal string
    pub total: String,
}

/// Checkout Handler
///
/// Returns the total amount due for the caller's cart.
#[endpoint(
    tags("cart"),
    summary = "Checkout Total",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Cart total"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CheckoutResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_id_or_401()?;

    let total = state
        .app
        .carts
        .checkout(user)
        .await
        .map_err(into_status_error)?;

    Ok(Json(CheckoutResponse {
        total: total.to_string(),
    }))
}
