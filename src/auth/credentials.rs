//! Credential storage and management
//!
//! In-memory stand-in for the hosted auth service. Error messages mirror the
//! wording the hosted service uses so the secure formatter sees realistic input.

use std::collections::HashMap;

use log::debug;

use super::backend::{AuthBackend, BackendError};
use super::results::User;

#[derive(Debug, Clone)]
struct Account {
    password: String,
    display_name: String,
    confirmed: bool,
}

/// Account store keyed by lower-cased email
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    accounts: HashMap<String, Account>,
    require_confirmation: bool,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// New sign-ups cannot sign in until [`InMemoryBackend::confirm`] is called
    pub fn with_confirmation() -> Self {
        Self {
            accounts: HashMap::new(),
            require_confirmation: true,
        }
    }

    /// Seed a confirmed account
    pub fn with_account(mut self, email: &str, password: &str, display_name: &str) -> Self {
        self.accounts.insert(
            email.to_lowercase(),
            Account {
                password: password.to_string(),
                display_name: display_name.to_string(),
                confirmed: true,
            },
        );
        self
    }

    /// Mark an account as confirmed; returns false if it does not exist
    pub fn confirm(&mut self, email: &str) -> bool {
        match self.accounts.get_mut(&email.to_lowercase()) {
            Some(account) => {
                account.confirmed = true;
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    fn lookup(&self, email: &str, password: &str) -> Result<User, BackendError> {
        match self.accounts.get(&email.to_lowercase()) {
            Some(account) if account.password == password => {
                if !account.confirmed {
                    return Err(BackendError::new("Email not confirmed"));
                }
                Ok(User {
                    email: email.to_lowercase(),
                    display_name: account.display_name.clone(),
                })
            }
            _ => Err(BackendError::new("Invalid login credentials")),
        }
    }

    fn register(
        &mut self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<User, BackendError> {
        let key = email.to_lowercase();
        if self.accounts.contains_key(&key) {
            return Err(BackendError::new("User already registered"));
        }

        self.accounts.insert(
            key.clone(),
            Account {
                password: password.to_string(),
                display_name: display_name.to_string(),
                confirmed: !self.require_confirmation,
            },
        );
        debug!("Registered account {}", key);

        Ok(User {
            email: key,
            display_name: display_name.to_string(),
        })
    }
}

impl AuthBackend for InMemoryBackend {
    async fn sign_in(&mut self, email: &str, password: &str) -> Result<User, BackendError> {
        self.lookup(email, password)
    }

    async fn sign_up(
        &mut self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<User, BackendError> {
        self.register(email, password, display_name)
    }
}
