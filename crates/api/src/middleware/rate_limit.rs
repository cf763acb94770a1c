//! Fixed-window rate limiting for the public submission endpoints.
//!
//! [`RateLimited`] is an extractor, like the RBAC guards: adding it to a
//! handler's parameters subjects that route to the shared limiter. Clients
//! are keyed by `X-Forwarded-For` (first hop) when present, falling back
//! to a single shared bucket, which keeps the limiter honest behind the
//! reverse proxy this API is deployed under.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::config::RateLimitConfig;
use crate::error::AppError;
use crate::state::AppState;

/// Bucket key used when no client address can be determined.
const ANONYMOUS_KEY: &str = "unknown";

struct Window {
    started: Instant,
    count: u32,
}

/// Shared fixed-window counter map.
pub struct RateLimiter {
    max_requests: u32,
    window: Duration,
    windows: Mutex<HashMap<String, Window>>,
}

impl RateLimiter {
    pub fn new(config: &RateLimitConfig) -> Self {
        Self {
            max_requests: config.max_requests,
            window: Duration::from_secs(config.window_secs),
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// Record a hit for `key`. Returns `false` when the client has used up
    /// its window.
    pub fn check(&self, key: &str) -> bool {
        let now = Instant::now();
        let mut windows = self.windows.lock().expect("rate limiter lock poisoned");

        let window = windows.entry(key.to_string()).or_insert(Window {
            started: now,
            count: 0,
        });

        if now.duration_since(window.started) >= self.window {
            window.started = now;
            window.count = 0;
        }

        window.count += 1;
        window.count <= self.max_requests
    }
}

/// Extractor guard that enforces the shared rate limit.
pub struct RateLimited;

impl FromRequestParts<AppState> for RateLimited {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let key = client_key(parts);
        if !state.rate_limiter.check(&key) {
            tracing::warn!(client = %key, "Rate limit exceeded");
            return Err(AppError::TooManyRequests);
        }
        Ok(RateLimited)
    }
}

/// Derive the limiter key from the forwarded client address.
fn client_key(parts: &Parts) -> String {
    parts
        .headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| ANONYMOUS_KEY.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limiter(max_requests: u32, window_secs: u64) -> RateLimiter {
        RateLimiter::new(&RateLimitConfig {
            max_requests,
            window_secs,
        })
    }

    #[test]
    fn allows_up_to_the_limit() {
        let limiter = limiter(3, 60);
        assert!(limiter.check("1.2.3.4"));
        assert!(limiter.check("1.2.3.4"));
        assert!(limiter.check("1.2.3.4"));
        assert!(!limiter.check("1.2.3.4"));
    }

    #[test]
    fn keys_are_independent() {
        let limiter = limiter(1, 60);
        assert!(limiter.check("1.2.3.4"));
        assert!(limiter.check("5.6.7.8"));
        assert!(!limiter.check("1.2.3.4"));
    }

    #[test]
    fn window_resets_after_expiry() {
        // Zero-length window: every check starts a fresh window.
        let limiter = limiter(1, 0);
        assert!(limiter.check("1.2.3.4"));
        assert!(limiter.check("1.2.3.4"));
    }
}
