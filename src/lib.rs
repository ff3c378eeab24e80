pub mod auth;
pub mod commands;
pub mod config;
pub mod drink;
pub mod error;
pub mod middleware;
pub mod session;
pub mod utils;

pub use session::Session;
