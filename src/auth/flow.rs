//! Sign-in and sign-up submit handling
//!
//! Gates every form submission through the attempt limiter and the field
//! validators before the backend is contacted.

use crate::config::InputConfig;
use crate::error::AuthError;
use crate::middleware::RateLimiter;
use crate::middleware::logging::{log_attempt, log_lockout};
use crate::utils::sanitize_text;

use super::backend::AuthBackend;
use super::results::{AuthAction, User};
use super::validator::{is_valid_email, score_password};

/// Form handler for the auth page
pub struct AuthFlow<B> {
    backend: B,
    limiter: RateLimiter,
    display_name_max_length: usize,
}

impl<B: AuthBackend> AuthFlow<B> {
    /// Build a flow around an injected backend and limiter
    pub fn new(backend: B, limiter: RateLimiter, input: &InputConfig) -> Self {
        Self {
            backend,
            limiter,
            display_name_max_length: input.display_name_max_length,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn limiter(&self) -> &RateLimiter {
        &self.limiter
    }

    pub async fn sign_in(&mut self, email: &str, password: &str) -> Result<User, AuthError> {
        self.check_rate_limit(AuthAction::SignIn)?;
        log_attempt("sign-in", email);

        if !is_valid_email(email) {
            return Err(AuthError::InvalidEmail);
        }

        Ok(self.backend.sign_in(email, password).await?)
    }

    pub async fn sign_up(
        &mut self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<User, AuthError> {
        self.check_rate_limit(AuthAction::SignUp)?;
        log_attempt("sign-up", email);

        if !is_valid_email(email) {
            return Err(AuthError::InvalidEmail);
        }

        let strength = score_password(password);
        if !strength.is_strong {
            return Err(AuthError::WeakPassword(strength.feedback));
        }

        let display_name = sanitize_text(display_name, self.display_name_max_length);
        Ok(self
            .backend
            .sign_up(email, password, &display_name)
            .await?)
    }

    fn check_rate_limit(&mut self, action: AuthAction) -> Result<(), AuthError> {
        let key = action.key();
        if self.limiter.is_allowed(key) {
            return Ok(());
        }

        let retry_after_secs = self.limiter.remaining_lockout_seconds(key);
        log_lockout(key, retry_after_secs);
        Err(AuthError::RateLimited {
            action,
            retry_after_secs,
        })
    }
}
