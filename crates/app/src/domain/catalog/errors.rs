//! Catalog errors.

use sqlx::{Error, error::ErrorKind};
use thiserror::Error;

/// SQLSTATE for a value outside the column's numeric range.
const NUMERIC_VALUE_OUT_OF_RANGE: &str = "22003";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog item already exists")]
    AlreadyExists,

    #[error("catalog item not found")]
    NotFound,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for CatalogError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        let Some(database_error) = error.as_database_error() else {
            return Self::Sql(error);
        };

        if database_error.code().as_deref() == Some(NUMERIC_VALUE_OUT_OF_RANGE) {
            return Self::InvalidData;
        }

        match database_error.kind() {
            ErrorKind::UniqueViolation => Self::AlreadyExists,
            ErrorKind::NotNullViolation => Self::MissingRequiredData,
            ErrorKind::CheckViolation => Self::InvalidData,
            _ => Self::Sql(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        let error = CatalogError::from(Error::RowNotFound);

        assert!(matches!(error, CatalogError::NotFound), "got {error:?}");
    }

    #[test]
    fn pool_timeout_is_a_storage_error() {
        let error = CatalogError::from(Error::PoolTimedOut);

        assert!(matches!(error, CatalogError::Sql(_)), "got {error:?}");
    }
}
