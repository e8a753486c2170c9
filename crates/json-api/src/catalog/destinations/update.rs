//! Update Destination Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};

use galactic_app::domain::catalog::data::DestinationDetails;

use crate::{
    catalog::{destinations::create::DestinationRequest, errors::into_status_error},
    extensions::*,
    state::State,
};

/// Update Destination Handler
///
/// Replaces every mutable field of a destination.
#[endpoint(
    tags("destinations"),
    summary = "Update Destination",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Destination updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Destination not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "destinations.update",
    skip(destination, json, depot),
    fields(user_id = tracing::field::Empty, destination_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    destination: PathParam<i64>,
    json: JsonBody<DestinationRequest>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_id_or_401()?;
    let destination = destination.into_inner();
    let details = DestinationDetails::try_from(json.into_inner()).map_err(into_status_error)?;

    let span = tracing::Span::current();

    span.record("user_id", user.get());
    span.record("destination_id", destination);

    let updated = state
        .app
        .catalog
        .update_destination(destination.into(), details)
        .await
        .map_err(into_status_error)?;

    if !updated {
        return Err(StatusError::not_found().brief("Destination not found"));
    }

    tracing::info!(destination_id = destination, "updated destination");

    Ok(StatusCode::OK)
}
