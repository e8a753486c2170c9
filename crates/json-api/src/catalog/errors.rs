//! Catalog Errors

use salvo::http::StatusError;
use tracing::error;

use galactic_app::domain::catalog::CatalogError;

pub(crate) fn into_status_error(error: CatalogError) -> StatusError {
    match error {
        CatalogError::AlreadyExists => StatusError::conflict().brief("Catalog item already exists"),
        CatalogError::MissingRequiredData => {
            StatusError::bad_request().brief("Name and description are required")
        }
        CatalogError::InvalidData => StatusError::bad_request().brief("Invalid catalog payload"),
        CatalogError::NotFound => StatusError::not_found(),
        CatalogError::Sql(source) => {
            error!("failed to access catalog: {source}");

            StatusError::internal_server_error()
        }
    }
}
