//! User Errors

use salvo::http::StatusError;
use tracing::error;

use galactic_app::domain::users::UsersServiceError;

pub(crate) fn into_status_error(error: UsersServiceError) -> StatusError {
    match error {
        UsersServiceError::AlreadyExists => {
            StatusError::conflict().brief("Username is already taken")
        }
        UsersServiceError::MissingRequiredData => {
            StatusError::bad_request().brief("Username, email and password are required")
        }
        UsersServiceError::InvalidCredentials | UsersServiceError::NotFound => {
            StatusError::unauthorized().brief("Invalid username or password")
        }
        UsersServiceError::PasswordHash(source) => {
            error!("failed to process password: {source}");

            StatusError::internal_server_error()
        }
        UsersServiceError::Sql(source) => {
            error!("failed to access users: {source}");

            StatusError::internal_server_error()
        }
    }
}
