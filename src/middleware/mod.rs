//! Request middleware
//!
//! Provides attempt logging and rate limiting for auth actions.

pub mod logging;
pub mod rate_limit;

pub use rate_limit::RateLimiter;
