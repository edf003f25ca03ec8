use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Allows one send per key per window. A permitted attempt is recorded
/// immediately, whether or not the send later succeeds.
#[derive(Debug)]
pub struct RateLimiter {
    window: Duration,
    last_sent: Mutex<HashMap<String, Instant>>,
}

impl RateLimiter {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_sent: Mutex::new(HashMap::new()),
        }
    }

    /// Returns `true` if `key` sent within the window; otherwise records `now`.
    pub fn check_and_record(&self, key: &str) -> bool {
        self.check_and_record_at(key, Instant::now())
    }

    pub fn check_and_record_at(&self, key: &str, now: Instant) -> bool {
        let mut last_sent = self
            .last_sent
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(prev) = last_sent.get(key) {
            if now.saturating_duration_since(*prev) < self.window {
                return true;
            }
        }
        last_sent.retain(|_, t| now.saturating_duration_since(*t) < self.window);
        last_sent.insert(key.to_string(), now);
        false
    }

    pub fn tracked(&self) -> usize {
        self.last_sent
            .lock()
            .map(|m| m.len())
            .unwrap_or_else(|poisoned| poisoned.into_inner().len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_secs(60);

    #[test]
    fn test_second_send_within_window_is_limited() {
        let limiter = RateLimiter::new(WINDOW);
        let t0 = Instant::now();
        assert!(!limiter.check_and_record_at("a@example.com", t0));
        assert!(limiter.check_and_record_at("a@example.com", t0 + Duration::from_secs(59)));
    }

    #[test]
    fn test_send_allowed_after_window() {
        let limiter = RateLimiter::new(WINDOW);
        let t0 = Instant::now();
        assert!(!limiter.check_and_record_at("a@example.com", t0));
        assert!(!limiter.check_and_record_at("a@example.com", t0 + WINDOW));
    }

    #[test]
    fn test_keys_are_independent() {
        let limiter = RateLimiter::new(WINDOW);
        let t0 = Instant::now();
        assert!(!limiter.check_and_record_at("a@example.com", t0));
        assert!(!limiter.check_and_record_at("b@example.com", t0));
    }

    #[test]
    fn test_expired_entries_are_pruned() {
        let limiter = RateLimiter::new(WINDOW);
        let t0 = Instant::now();
        limiter.check_and_record_at("a@example.com", t0);
        limiter.check_and_record_at("b@example.com", t0 + Duration::from_secs(61));
        assert_eq!(limiter.tracked(), 1);
    }
}
