//! Logging middleware
//!
//! Provides auth attempt logging. Passwords never reach these helpers.

use log::{info, warn};

/// Log an auth attempt that passed the limiter
pub fn log_attempt(action: &str, email: &str) {
    info!("{} attempt for {}", action, email);
}

/// Log an attempt rejected by the limiter
pub fn log_lockout(action: &str, retry_after_secs: u64) {
    warn!(
        "{} rate limited, retry in {}s",
        action, retry_after_secs
    );
}
