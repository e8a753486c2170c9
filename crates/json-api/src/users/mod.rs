//! Users

mod errors;
pub(crate) mod login;
pub(crate) mod register;
pub(crate) mod session;
