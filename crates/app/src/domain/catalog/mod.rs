//! Catalog of purchasable destinations and market items.

pub mod data;
pub mod errors;
pub mod models;
mod repositories;
pub mod store;

pub use errors::CatalogError;
pub use store::*;
