//! Add To Cart Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use galactic_app::domain::{
    carts::{
        CartsServiceError,
        data::{AddCartItem, validate_quantity},
    },
    catalog::models::ItemType,
    users::models::UserId,
};

use crate::{carts::errors::into_status_error, extensions::*, state::State};

/// Add To Cart Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddToCartRequest {
    /// Owner of the cart, must be the authenticated user
    pub user_id: i64,

    /// Id of the destination or market item
    pub item_id: i64,

    /// Either `destination` or `market_item`
    pub item_type: String,

    /// Number of units, at least 1
    pub quantity: i64,
}

impl TryFrom<AddToCartRequest> for AddCartItem {
    type Error = CartsServiceError;

    fn try_from(request: AddToCartRequest) -> Result<Self, Self::Error> {
        let item_type = request.item_type.parse::<ItemType>()?;

        validate_quantity(request.quantity)?;

        Ok(AddCartItem {
            user_id: UserId::new(request.user_id),
            item_id: request.item_id,
            item_type,
            quantity: request.quantity,
        })
    }
}

/// Item Added Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ItemAddedResponse {
    /// Price per unit at the time of adding, as a decimal string
    pub unit_price: String,

    /// Id of the created cart line
    pub line_id: i64,
}

/// Add To Cart Handler
///
/// Adds a catalog item to the caller's cart at its current price.
#[endpoint(
    tags("cart"),
    summary = "Add Item To Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Item added"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid item type, quantity or payload"),
        (status_code = StatusCode::FORBIDDEN, description = "Not the caller's cart"),
        (status_code = StatusCode::NOT_FOUND, description = "Item not found"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "cart.add",
    skip(json, depot, res),
    fields(
        user_id = tracing::field::Empty,
        item_id = tracing::field::Empty,
        item_type = tracing::field::Empty,
        quantity = tracing::field::Empty,
        line_id = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<AddToCartRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ItemAddedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_id_or_401()?;
    let item = AddCartItem::try_from(json.into_inner()).map_err(into_status_error)?;

    if item.user_id != user {
        return Err(StatusError::forbidden().brief("You can only add to your own cart"));
    }

    let span = tracing::Span::current();

    span.record("user_id", user.get());
    span.record("item_id", item.item_id);
    span.record("item_type", item.item_type.as_str());
    span.record("quantity", item.quantity);

    let added = state
        .app
        .carts
        .add_item(item)
        .await
        .map_err(into_status_error)?;

    span.record("line_id", added.line.id.get());

    res.status_code(StatusCode::CREATED);

    tracing::info!(
        line_id = added.line.id.get(),
        unit_price = %added.unit_price,
        "added item to cart"
    );

    Ok(Json(ItemAddedResponse {
        unit_price: added.unit_price.to_string(),
        line_id: added.line.id.get(),
    }))
}
