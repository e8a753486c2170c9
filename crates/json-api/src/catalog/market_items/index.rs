//! Market Item Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{catalog::market_items::get::MarketItemResponse, extensions::*, state::State};

/// Market Item Index Handler
///
/// Returns every market item, ordered by id.
#[endpoint(tags("market-items"), summary = "List Market Items")]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<Vec<MarketItemResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let items = state
        .app
        .catalog
        .list_market_items()
        .await
        .or_500("failed to fetch market items")?;

    Ok(Json(items.into_iter().map(Into::into).collect()))
}
