//! Error types
//!
//! Defines domain-specific error types for each module of DrinkCraft.

use std::fmt;
use std::io;

use crate::auth::{AuthAction, BackendError};

/// Authentication flow errors
#[derive(Debug)]
pub enum AuthError {
    RateLimited {
        action: AuthAction,
        retry_after_secs: u64,
    },
    InvalidEmail,
    WeakPassword(Vec<&'static str>),
    Backend(BackendError),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::RateLimited {
                action,
                retry_after_secs,
            } => write!(f, "Too many {} attempts, retry in {}s", action, retry_after_secs),
            AuthError::InvalidEmail => write!(f, "Invalid email address"),
            AuthError::WeakPassword(feedback) => {
                write!(f, "Password too weak: {}", feedback.join(", "))
            }
            AuthError::Backend(e) => write!(f, "Backend error: {}", e),
        }
    }
}

impl std::error::Error for AuthError {}

impl From<BackendError> for AuthError {
    fn from(error: BackendError) -> Self {
        AuthError::Backend(error)
    }
}

/// Drink builder errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrinkError {
    UnknownIngredient(String),
    AlreadyAdded(String),
    NotInDrink(String),
    EmptyDrink,
}

impl fmt::Display for DrinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrinkError::UnknownIngredient(id) => write!(f, "Unknown ingredient: {}", id),
            DrinkError::AlreadyAdded(id) => write!(f, "Ingredient already added: {}", id),
            DrinkError::NotInDrink(id) => write!(f, "Ingredient not in drink: {}", id),
            DrinkError::EmptyDrink => write!(f, "Drink has no ingredients"),
        }
    }
}

impl std::error::Error for DrinkError {}

/// Top-level application error that encompasses all error types
#[derive(Debug)]
pub enum AppError {
    Config(config::ConfigError),
    Auth(AuthError),
    Drink(DrinkError),
    IoError(io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(e) => write!(f, "Configuration error: {}", e),
            AppError::Auth(e) => write!(f, "Authentication error: {}", e),
            AppError::Drink(e) => write!(f, "Drink error: {}", e),
            AppError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for AppError {}

impl From<config::ConfigError> for AppError {
    fn from(error: config::ConfigError) -> Self {
        AppError::Config(error)
    }
}

impl From<AuthError> for AppError {
    fn from(error: AuthError) -> Self {
        AppError::Auth(error)
    }
}

impl From<DrinkError> for AppError {
    fn from(error: DrinkError) -> Self {
        AppError::Drink(error)
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        AppError::IoError(error)
    }
}
