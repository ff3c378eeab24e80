//! Authentication result types
//!
//! Defines result structures returned by authentication operations.

use std::fmt;

/// Highest score the strength meter shows; the length bonus can push the raw score past it
pub const DISPLAY_SCORE_MAX: u8 = 5;

/// Signed-in account as reported by the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub email: String,
    pub display_name: String,
}

/// Rate-limited auth actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthAction {
    SignIn,
    SignUp,
}

impl AuthAction {
    /// Limiter key for this action
    pub fn key(self) -> &'static str {
        match self {
            AuthAction::SignIn => "signin",
            AuthAction::SignUp => "signup",
        }
    }
}

impl fmt::Display for AuthAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthAction::SignIn => write!(f, "sign-in"),
            AuthAction::SignUp => write!(f, "sign-up"),
        }
    }
}

/// Result of password strength scoring
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordStrength {
    /// Raw score, 0 to 6 (five criteria plus the length bonus)
    pub score: u8,
    /// One remediation hint per unmet criterion; empty when strong
    pub feedback: Vec<&'static str>,
    pub is_strong: bool,
}

impl PasswordStrength {
    /// Score as shown on the meter, capped at [`DISPLAY_SCORE_MAX`]
    pub fn display_score(&self) -> u8 {
        self.score.min(DISPLAY_SCORE_MAX)
    }

    /// Meter fill, 0 to 100
    pub fn meter_percent(&self) -> u8 {
        (u16::from(self.display_score()) * 100 / u16::from(DISPLAY_SCORE_MAX)) as u8
    }

    pub fn label(&self) -> &'static str {
        match self.score {
            0 | 1 => "Very Weak",
            2 => "Weak",
            3 => "Fair",
            4 => "Good",
            _ => "Strong",
        }
    }
}
