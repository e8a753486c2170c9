//! Carts service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::domain::catalog::{CatalogError, models::InvalidItemType};

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("cart line not found")]
    NotFound,

    #[error("catalog item not found")]
    ItemNotFound,

    #[error("invalid item type: {0}")]
    InvalidItemType(String),

    #[error("invalid quantity: {0}")]
    InvalidQuantity(i64),

    #[error("invalid reference")]
    InvalidReference,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for CartsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::CheckViolation | ErrorKind::NotNullViolation) => Self::InvalidData,
            _ => Self::Sql(error),
        }
    }
}

impl From<InvalidItemType> for CartsServiceError {
    fn from(error: InvalidItemType) -> Self {
        Self::InvalidItemType(error.0)
    }
}

impl From<CatalogError> for CartsServiceError {
    fn from(error: CatalogError) -> Self {
        match error {
            CatalogError::NotFound => Self::ItemNotFound,
            CatalogError::Sql(source) => Self::Sql(source),
            CatalogError::AlreadyExists
            | CatalogError::MissingRequiredData
            | CatalogError::InvalidData => Self::InvalidData,
        }
    }
}
