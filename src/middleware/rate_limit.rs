//! Rate limiting middleware
//!
//! Sliding-window attempt counter keyed by action name. State lives in
//! memory only and is lost with the process, so this throttles honest
//! users; it is not a security boundary.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::config::RateLimitConfig;

/// Attempts allowed per window when nothing else is configured
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

/// Default window length (15 minutes)
pub const DEFAULT_WINDOW: Duration = Duration::from_secs(15 * 60);

/// Sliding-window attempt limiter
#[derive(Debug)]
pub struct RateLimiter {
    attempts: HashMap<String, Vec<Instant>>,
    max_attempts: usize,
    window: Duration,
}

impl RateLimiter {
    pub fn new(max_attempts: usize, window: Duration) -> Self {
        Self {
            attempts: HashMap::new(),
            max_attempts,
            window,
        }
    }

    pub fn from_config(config: &RateLimitConfig) -> Self {
        Self::new(config.max_attempts, config.window())
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Records an attempt for `key` and reports whether it is allowed.
    pub fn is_allowed(&mut self, key: &str) -> bool {
        self.is_allowed_at(key, Instant::now())
    }

    /// Same as [`RateLimiter::is_allowed`] with an explicit clock reading.
    ///
    /// A denied attempt prunes expired entries but is not itself recorded,
    /// so polling while locked out never extends the lockout.
    pub fn is_allowed_at(&mut self, key: &str, now: Instant) -> bool {
        let window = self.window;
        let entry = self.attempts.entry(key.to_string()).or_default();

        // Remove expired attempts
        entry.retain(|&time| now.saturating_duration_since(time) < window);

        if entry.len() >= self.max_attempts {
            return false;
        }

        entry.push(now);
        true
    }

    /// Seconds (rounded up) until the oldest stored attempt for `key` leaves the window.
    ///
    /// Returns 0 while fewer than `max_attempts` attempts are stored.
    pub fn remaining_lockout_seconds(&self, key: &str) -> u64 {
        self.remaining_lockout_seconds_at(key, Instant::now())
    }

    /// Same as [`RateLimiter::remaining_lockout_seconds`] with an explicit clock reading.
    ///
    /// Reads the stored list as-is, without pruning.
    pub fn remaining_lockout_seconds_at(&self, key: &str, now: Instant) -> u64 {
        let Some(attempts) = self.attempts.get(key) else {
            return 0;
        };

        if attempts.len() < self.max_attempts {
            return 0;
        }

        let Some(oldest) = attempts.iter().min() else {
            return 0;
        };

        let remaining = self
            .window
            .saturating_sub(now.saturating_duration_since(*oldest));

        remaining.as_millis().div_ceil(1000) as u64
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS, DEFAULT_WINDOW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_allows_up_to_max_then_denies() {
        let mut limiter = RateLimiter::new(3, ms(1000));
        let start = Instant::now();

        assert!(limiter.is_allowed_at("k", start));
        assert!(limiter.is_allowed_at("k", start + ms(1)));
        assert!(limiter.is_allowed_at("k", start + ms(2)));
        assert!(!limiter.is_allowed_at("k", start + ms(3)));
    }

    #[test]
    fn test_allows_again_after_window() {
        let mut limiter = RateLimiter::new(3, ms(1000));
        let start = Instant::now();

        for i in 0..3 {
            assert!(limiter.is_allowed_at("k", start + ms(i)));
        }
        assert!(!limiter.is_allowed_at("k", start + ms(500)));
        assert!(limiter.is_allowed_at("k", start + ms(1001)));
    }

    #[test]
    fn test_allows_again_after_real_sleep() {
        let mut limiter = RateLimiter::new(3, ms(100));

        assert!(limiter.is_allowed("k"));
        assert!(limiter.is_allowed("k"));
        assert!(limiter.is_allowed("k"));
        assert!(!limiter.is_allowed("k"));

        thread::sleep(ms(150));
        assert!(limiter.is_allowed("k"));
    }

    #[test]
    fn test_keys_are_independent() {
        let mut limiter = RateLimiter::new(1, ms(1000));
        let now = Instant::now();

        assert!(limiter.is_allowed_at("signin", now));
        assert!(!limiter.is_allowed_at("signin", now));
        assert!(limiter.is_allowed_at("signup", now));
    }

    #[test]
    fn test_denial_is_not_recorded() {
        let mut limiter = RateLimiter::new(2, ms(1000));
        let start = Instant::now();

        assert!(limiter.is_allowed_at("k", start));
        assert!(limiter.is_allowed_at("k", start + ms(10)));

        // Hammering while locked out must not push the unlock time back
        for i in 1..50 {
            assert!(!limiter.is_allowed_at("k", start + ms(10 + i * 10)));
        }
        assert_eq!(limiter.attempts["k"].len(), 2);

        // The first attempt has expired, so one slot frees up
        assert!(limiter.is_allowed_at("k", start + ms(1000)));
    }

    #[test]
    fn test_window_boundary_is_exclusive() {
        let mut limiter = RateLimiter::new(1, ms(1000));
        let start = Instant::now();

        assert!(limiter.is_allowed_at("k", start));
        assert!(!limiter.is_allowed_at("k", start + ms(999)));
        assert!(limiter.is_allowed_at("k", start + ms(1000)));
    }

    #[test]
    fn test_retained_entries_stay_within_window_and_bound() {
        let mut limiter = RateLimiter::new(3, ms(100));
        let start = Instant::now();

        for i in 0..40 {
            let now = start + ms(i * 17);
            limiter.is_allowed_at("k", now);

            let stored = &limiter.attempts["k"];
            assert!(stored.len() <= 3);
            assert!(
                stored
                    .iter()
                    .all(|&t| t <= now && now.saturating_duration_since(t) < ms(100))
            );
        }
    }

    #[test]
    fn test_remaining_lockout_zero_before_attempts() {
        let limiter = RateLimiter::new(3, ms(1000));
        assert_eq!(limiter.remaining_lockout_seconds("k"), 0);
    }

    #[test]
    fn test_remaining_lockout_zero_below_threshold() {
        let mut limiter = RateLimiter::new(3, ms(1000));
        let now = Instant::now();

        limiter.is_allowed_at("k", now);
        limiter.is_allowed_at("k", now);
        assert_eq!(limiter.remaining_lockout_seconds_at("k", now), 0);
    }

    #[test]
    fn test_remaining_lockout_positive_when_exhausted() {
        let mut limiter = RateLimiter::new(3, Duration::from_secs(900));
        let start = Instant::now();

        for i in 0..3 {
            assert!(limiter.is_allowed_at("k", start + ms(i)));
        }
        assert!(!limiter.is_allowed_at("k", start + ms(10)));

        assert_eq!(limiter.remaining_lockout_seconds_at("k", start), 900);
        assert_eq!(
            limiter.remaining_lockout_seconds_at("k", start + Duration::from_secs(60)),
            840
        );
        // Partial seconds round up
        assert_eq!(
            limiter.remaining_lockout_seconds_at("k", start + ms(899_001)),
            1
        );
        assert!(limiter.remaining_lockout_seconds("k") > 0);
    }

    #[test]
    fn test_remaining_lockout_reads_unpruned_list() {
        let mut limiter = RateLimiter::new(2, ms(1000));
        let start = Instant::now();

        limiter.is_allowed_at("k", start);
        limiter.is_allowed_at("k", start + ms(400));

        // Oldest entry has aged out, but nothing pruned it yet: the raw list
        // is still full, and the remaining time floors at zero.
        let later = start + ms(1200);
        assert_eq!(limiter.attempts["k"].len(), 2);
        assert_eq!(limiter.remaining_lockout_seconds_at("k", later), 0);

        // A check at the same instant agrees that the key is usable again
        assert!(limiter.is_allowed_at("k", later));
    }

    #[test]
    fn test_zero_max_attempts_always_denies() {
        let mut limiter = RateLimiter::new(0, ms(1000));
        assert!(!limiter.is_allowed("k"));
        assert_eq!(limiter.remaining_lockout_seconds("k"), 0);
    }

    #[test]
    fn test_from_config_uses_configured_values() {
        let config = RateLimitConfig {
            max_attempts: 2,
            window_secs: 30,
        };
        let limiter = RateLimiter::from_config(&config);
        assert_eq!(limiter.max_attempts(), 2);
        assert_eq!(limiter.window(), Duration::from_secs(30));

        let default = RateLimiter::default();
        assert_eq!(default.max_attempts(), 5);
        assert_eq!(default.window(), Duration::from_secs(900));
    }
}
