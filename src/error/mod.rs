//! Error handling
//!
//! Defines error types and handling for DrinkCraft.

pub mod handlers;
pub mod types;

pub use handlers::{GENERIC_ERROR_MESSAGE, format_secure_error};
pub use types::*;
