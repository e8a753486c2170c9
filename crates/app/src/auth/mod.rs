//! Authentication primitives: password hashing and session tokens.

mod password;
mod token;

pub use password::*;
pub use token::*;
