//! Create Market Item Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use galactic_app::domain::catalog::{CatalogError, data::MarketItemDetails};

use crate::{catalog::errors::into_status_error, extensions::*, state::State};

/// Market Item Request, used to create a market item and to replace one
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MarketItemRequest {
    pub name: String,

    pub description: String,

    /// Price as a decimal string or number, must not be negative
    #[salvo(schema(value_type = String))]
    pub price: Decimal,
}

impl TryFrom<MarketItemRequest> for MarketItemDetails {
    type Error = CatalogError;

    fn try_from(request: MarketItemRequest) -> Result<Self, Self::Error> {
        let details = MarketItemDetails {
            name: request.name.trim().to_string(),
            description: request.description.trim().to_string(),
            price: request.price,
        };

        details.validate()?;

        Ok(details)
    }
}

/// Market Item Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MarketItemCreatedResponse {
    /// Created market item id
    pub id: i64,
}

/// Create Market Item Handler
#[endpoint(
    tags("market-items"),
    summary = "Create Market Item",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Market item created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "market_items.create",
    skip(json, depot, res),
    fields(user_id = tracing::field::Empty, market_item_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<MarketItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<MarketItemCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_id_or_401()?;
    let details = MarketItemDetails::try_from(json.into_inner()).map_err(into_status_error)?;

    let span = tracing::Span::current();

    span.record("user_id", user.get());

    let id = state
        .app
        .catalog
        .create_market_item(details)
        .await
        .map_err(into_status_error)?
        .id;

    span.record("market_item_id", id.get());

    res.add_header(LOCATION, format!("/market-items/{id}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(MarketItemCreatedResponse { id: id.get() }))
}
