//! Create Destination Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use galactic_app::domain::catalog::{CatalogError, data::DestinationDetails};

use crate::{catalog::errors::into_status_error, extensions::*, state::State};

/// Destination Request, used to create a destination and to replace one
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DestinationRequest {
    pub name: String,

    pub description: String,

    #[serde(default)]
    pub image_url: String,

    /// Price as a decimal string or number, must not be negative
    #[salvo(schema(value_type = String))]
    pub price: Decimal,
}

impl TryFrom<DestinationRequest> for DestinationDetails {
    type Error = CatalogError;

    fn try_from(request: DestinationRequest) -> Result<Self, Self::Error> {
        let details = DestinationDetails {
            name: request.name.trim().to_string(),
            description: request.description.trim().to_string(),
            image_url: request.image_url.trim().to_string(),
            price: request.price,
        };

        details.validate()?;

        Ok(details)
    }
}

/// Destination Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DestinationCreatedResponse {
    /// Created destination id
    pub id: i64,
}

/// Create Destination Handler
#[endpoint(
    tags("destinations"),
    summary = "Create Destination",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Destination created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "destinations.create",
    skip(json, depot, res),
    fields(user_id = tracing::field::Empty, destination_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<DestinationRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<DestinationCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_id_or_401()?;
    let details = DestinationDetails::try_from(json.into_inner()).map_err(into_status_error)?;

    let span = tracing::Span::current();

    span.record("user_id", user.get());

    let id = state
        .app
        .catalog
        .create_destination(details)
        .await
        .map_err(into_status_error)?
        .id;

    span.record("destination_id", id.get());

    res.add_header(LOCATION, format!("/destinations/{id}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(DestinationCreatedResponse { id: id.get() }))
}
