//! Module `session`
//!
//! Per-user state for one terminal session: the auth form handler, the
//! signed-in account, the drink under construction and saved recipes.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::auth::{AuthBackend, AuthFlow, User};
use crate::config::AppConfig;
use crate::drink::{DrinkBuilder, SavedRecipe};
use crate::middleware::RateLimiter;

pub struct Session<B> {
    pub auth: AuthFlow<B>,
    pub builder: DrinkBuilder,
    pub user: Option<User>,
    pub recipes: Vec<SavedRecipe>,
    pub rng: StdRng,
}

impl<B: AuthBackend> Session<B> {
    /// Build a session around an injected backend and limiter
    pub fn new(backend: B, limiter: RateLimiter, config: &AppConfig) -> Self {
        Self::with_rng(backend, limiter, config, StdRng::from_entropy())
    }

    /// Same as [`Session::new`] with a caller-supplied random source
    pub fn with_rng(backend: B, limiter: RateLimiter, config: &AppConfig, rng: StdRng) -> Self {
        Self {
            auth: AuthFlow::new(backend, limiter, &config.input),
            builder: DrinkBuilder::new(config.default_drink, config.input.drink_name_max_length),
            user: None,
            recipes: Vec::new(),
            rng,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Clears the signed-in account. The drink in progress is kept.
    pub fn sign_out(&mut self) -> Option<User> {
        self.user.take()
    }
}
