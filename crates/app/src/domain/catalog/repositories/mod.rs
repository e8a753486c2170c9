//! Catalog Repositories

mod destinations;
mod market_items;

pub(crate) use destinations::PgDestinationsRepository;
pub(crate) use market_items::PgMarketItemsRepository;
