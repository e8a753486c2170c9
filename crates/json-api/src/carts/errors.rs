//! Cart Errors

use salvo::http::StatusError;
use tracing::error;

use galactic_app::domain::carts::CartsServiceError;

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::NotFound => StatusError::not_found().brief("Cart line not found"),
        CartsServiceError::ItemNotFound => StatusError::not_found().brief("Item not found"),
        CartsServiceError::InvalidItemType(item_type) => {
            StatusError::bad_request().brief(format!("Invalid item type: {item_type}"))
        }
        CartsServiceError::InvalidQuantity(_) => {
            StatusError::bad_request().brief("Quantity must be at least 1")
        }
        CartsServiceError::InvalidReference | CartsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid cart payload")
        }
        CartsServiceError::Sql(source) => {
            error!("failed to access cart: {source}");

            StatusError::internal_server_error()
        }
    }
}
