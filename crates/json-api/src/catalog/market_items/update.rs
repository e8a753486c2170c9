//! Update Market Item Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};

use galactic_app::domain::catalog::data::MarketItemDetails;

use crate::{
    catalog::{errors::into_status_error, market_items::create::MarketItemRequest},
    extensions::*,
    state::State,
};

/// Update Market Item Handler
///
/// Replaces every mutable field of a market item.
#[endpoint(
    tags("market-items"),
    summary = "Update Market Item",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Market item updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Market item not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "market_items.update",
    skip(item, json, depot),
    fields(user_id = tracing::field::Empty, market_item_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    item: PathParam<i64>,
    json: JsonBody<MarketItemRequest>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_id_or_401()?;
    let item = item.into_inner();
    let details = MarketItemDetails::try_from(json.into_inner()).map_err(into_status_error)?;

    let span = tracing::Span::current();

    span.record("user_id", user.get());
    span.record("market_item_id", item);

    let updated = state
        .app
        .catalog
        .update_market_item(item.into(), details)
        .await
        .map_err(into_status_error)?;

    if !updated {
        return Err(StatusError::not_found().brief("Market item not found"));
    }

    tracing::info!(market_item_id = item, "updated market item");

    Ok(StatusCode::OK)
}
