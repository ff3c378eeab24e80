//! Utility functions
//!
//! Provides logging setup and input sanitization.

pub mod logging;
pub mod validation;

pub use validation::{sanitize_text, validate_amount};
