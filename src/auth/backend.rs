//! Authentication backend seam
//!
//! Account creation, session issuance and credential storage belong to an
//! external service. This module only describes the shape of its answers.

use std::fmt;
use std::future::Future;

use super::results::User;

/// Error reported by the auth backend.
///
/// `message` is raw backend text and must go through
/// [`crate::error::format_secure_error`] before a user sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendError {
    pub message: String,
}

impl BackendError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for BackendError {}

/// External sign-in / sign-up service
pub trait AuthBackend {
    fn sign_in(
        &mut self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<User, BackendError>> + Send;

    fn sign_up(
        &mut self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> impl Future<Output = Result<User, BackendError>> + Send;
}
