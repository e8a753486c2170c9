//! Get Market Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use galactic_app::domain::catalog::models::MarketItem;

use crate::{catalog::errors::into_status_error, extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MarketItemResponse {
    /// The unique identifier of the market item
    pub id: i64,

    pub name: String,

    pub description: String,

    /// Price as a decimal string, e.g. "49.99"
    pub price: String,

    pub created_at: String,

    pub updated_at: String,
}

impl From<MarketItem> for MarketItemResponse {
    fn from(item: MarketItem) -> Self {
        MarketItemResponse {
            id: item.id.get(),
            name: item.name,
            description: item.description,
            price: item.price.to_string(),
            created_at: item.created_at.to_string(),
            updated_at: item.updated_at.to_string(),
        }
    }
}

/// Get Market Item Handler
#[endpoint(
    tags("market-items"),
    summary = "Get Market Item",
    responses(
        (status_code = StatusCode::OK, description = "Market item found"),
        (status_code = StatusCode::NOT_FOUND, description = "Market item not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    item: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<MarketItemResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let item = state
        .app
        .catalog
        .get_market_item(item.into_inner().into())
        .await
        .map_err(into_status_error)?
        .ok_or_else(|| StatusError::not_found().brief("Market item not found"))?;

    Ok(Json(item.into()))
}
