//! Carts

pub mod data;
pub mod errors;
pub mod models;
mod repositories;
pub mod service;
pub mod store;

pub use errors::CartsServiceError;
pub use service::*;
pub use store::*;
