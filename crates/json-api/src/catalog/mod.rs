//! Catalog

pub(crate) mod destinations;
mod errors;
pub(crate) mod market_items;
