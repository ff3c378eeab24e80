//! Input validation utilities
//!
//! Cleans free-text fields (display name, drink name, ingredient amount)
//! before they are stored or rendered.

use regex::Regex;
use std::sync::LazyLock;

/// Length bound used when a caller has no field-specific limit
pub const DEFAULT_MAX_LENGTH: usize = 255;

/// Length bound for ingredient amounts
pub const AMOUNT_MAX_LENGTH: usize = 10;

/// Characters removed outright from every sanitized string
pub const MARKUP_CHARS: [char; 5] = ['<', '>', '\'', '"', '&'];

/// Allow-list for ingredient amounts: digits, `.`, `,`, `/`, vulgar fractions, whitespace and `-`
pub const AMOUNT_PATTERN: &str = r"^[0-9.,/½¼¾\s-]*$";

static AMOUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(AMOUNT_PATTERN).expect("amount pattern is valid"));

/// Removes markup characters, truncates to `max_length` characters and trims.
///
/// Truncation happens after removal, so the result never exceeds `max_length`.
pub fn sanitize_text(input: &str, max_length: usize) -> String {
    let truncated: String = input
        .chars()
        .filter(|c| !MARKUP_CHARS.contains(c))
        .take(max_length)
        .collect();

    truncated.trim().to_string()
}

/// Sanitizes an ingredient amount and voids it entirely if anything outside
/// the allow-list remains.
pub fn validate_amount(amount: &str) -> String {
    let sanitized = sanitize_text(amount, AMOUNT_MAX_LENGTH);

    if !AMOUNT_RE.is_match(&sanitized) {
        return String::new();
    }

    sanitized
}
