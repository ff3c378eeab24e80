//! Authentication validator
//!
//! Syntactic checks run on sign-in and sign-up fields before anything is
//! sent to the backend. Real validation of the address is the backend's job.

use regex::Regex;
use std::sync::LazyLock;

use super::results::PasswordStrength;

/// Longest email address accepted, in characters
pub const MAX_EMAIL_LENGTH: usize = 254;

/// `local@domain.tld` shape: no whitespace, one `@`, a dot after it
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Punctuation counted as a special character
pub const SPECIAL_CHAR_PATTERN: &str = r#"[!@#$%\^&*(),.?":{}|<>]"#;

/// Minimum length for the base length point
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Length that earns the bonus point
pub const BONUS_PASSWORD_LENGTH: usize = 12;

/// Scores at or above this are strong
pub const STRONG_SCORE: u8 = 4;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"));

static SPECIAL_CHAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SPECIAL_CHAR_PATTERN).expect("special char pattern is valid"));

/// Checks that `email` is shaped like an address and short enough.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email) && email.chars().count() <= MAX_EMAIL_LENGTH
}

/// Scores a password against five criteria plus a length bonus.
pub fn score_password(password: &str) -> PasswordStrength {
    let length = password.chars().count();
    let mut feedback = Vec::new();
    let mut score = 0;

    let criteria = [
        (length >= MIN_PASSWORD_LENGTH, "Use at least 8 characters"),
        (
            password.chars().any(|c| c.is_ascii_lowercase()),
            "Add lowercase letters",
        ),
        (
            password.chars().any(|c| c.is_ascii_uppercase()),
            "Add uppercase letters",
        ),
        (
            password.chars().any(|c| c.is_ascii_digit()),
            "Add numbers",
        ),
        (
            SPECIAL_CHAR_RE.is_match(password),
            "Add special characters (!@#$%^&*)",
        ),
    ];

    for (met, hint) in criteria {
        if met {
            score += 1;
        } else {
            feedback.push(hint);
        }
    }

    if length >= BONUS_PASSWORD_LENGTH {
        score += 1;
    }

    let is_strong = score >= STRONG_SCORE;
    if is_strong {
        feedback.clear();
    }

    PasswordStrength {
        score,
        feedback,
        is_strong,
    }
}
