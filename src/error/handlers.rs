//! Error handlers
//!
//! Turns errors into log lines and into text that is safe to show a user.

use crate::error::types::{AppError, AuthError, DrinkError};
use log::error;

/// Shown for any backend error that has no curated message
pub const GENERIC_ERROR_MESSAGE: &str =
    "An error occurred. Please try again or contact support if the problem persists";

/// Backend error fragments and their user-facing replacements.
///
/// Matched case-insensitively by containment, first entry wins.
pub const SECURE_MESSAGES: &[(&str, &str)] = &[
    ("Invalid login credentials", "Invalid email or password"),
    (
        "User already registered",
        "An account with this email already exists",
    ),
    (
        "Email not confirmed",
        "Please check your email and confirm your account",
    ),
    (
        "Password too weak",
        "Password does not meet security requirements",
    ),
    (
        "Rate limit exceeded",
        "Too many attempts. Please try again later",
    ),
    (
        "Network error",
        "Connection error. Please check your internet connection",
    ),
];

/// Log an application error
pub fn handle_error(err: &AppError) {
    error!("DrinkCraft error: {}", err);
}

/// Map a raw backend error message to a message that leaks nothing internal
pub fn format_secure_error(message: Option<&str>) -> &'static str {
    let Some(message) = message else {
        return GENERIC_ERROR_MESSAGE;
    };
    let message = message.to_lowercase();

    SECURE_MESSAGES
        .iter()
        .find(|(needle, _)| message.contains(&needle.to_lowercase()))
        .map(|(_, secure)| *secure)
        .unwrap_or(GENERIC_ERROR_MESSAGE)
}

/// Convert an auth error to the text shown next to the form
pub fn auth_error_message(err: &AuthError) -> String {
    match err {
        AuthError::RateLimited {
            action,
            retry_after_secs,
        } => format!(
            "Too many {} attempts. Please try again in {} minutes.",
            action,
            retry_after_secs.div_ceil(60)
        ),
        AuthError::InvalidEmail => "Please enter a valid email address".to_string(),
        AuthError::WeakPassword(_) => "Please create a stronger password".to_string(),
        AuthError::Backend(e) => format_secure_error(Some(e.message.as_str())).to_string(),
    }
}

/// Convert a drink builder error to the text shown to the user
pub fn drink_error_message(err: &DrinkError) -> String {
    match err {
        DrinkError::UnknownIngredient(id) => format!("No ingredient called '{}'", id),
        DrinkError::AlreadyAdded(_) => "Ingredient already added!".to_string(),
        DrinkError::NotInDrink(id) => format!("'{}' is not in your drink", id),
        DrinkError::EmptyDrink => "Add some ingredients first!".to_string(),
    }
}
