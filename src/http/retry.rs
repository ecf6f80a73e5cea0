//! Retry policies for GET requests.
//!
//! Loaders retry only when the user asks (refresh / refetch), so the client
//! default is [`RetryPolicy::None`]. Callers that front a flaky network can opt
//! into transparent retries through the builder.

use crate::error::HttpError;
use rand::Rng;
use std::time::Duration;

/// Retry policy applied by the HTTP transport.
#[derive(Debug, Clone, Default)]
pub enum RetryPolicy {
    /// Single attempt.
    #[default]
    None,
    /// Retry on transport failures, timeouts, 429 and 502/503/504.
    Idempotent,
    /// User-provided retry logic.
    Custom(RetryConfig),
}

impl RetryPolicy {
    /// Resolve the policy into a concrete config; `None` means one attempt.
    pub fn config(&self) -> Option<RetryConfig> {
        match self {
            RetryPolicy::None => None,
            RetryPolicy::Idempotent => Some(RetryConfig::idempotent()),
            RetryPolicy::Custom(c) => Some(c.clone()),
        }
    }
}

/// Configuration for retry behavior.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retry attempts (not counting the initial request).
    pub max_retries: u32,
    /// Initial delay before the first retry.
    pub initial_delay: Duration,
    /// Maximum delay between retries.
    pub max_delay: Duration,
    /// Multiplier applied to the delay after each retry.
    pub backoff_factor: f64,
    /// Spread each delay by ±25%.
    pub jitter: bool,
    /// HTTP status codes that trigger a retry.
    pub retryable_statuses: Vec<u16>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::idempotent()
    }
}

impl RetryConfig {
    /// The config behind [`RetryPolicy::Idempotent`].
    ///
    /// The public API rate-limits aggressively, so the first backoff step is
    /// a full second.
    pub fn idempotent() -> Self {
        Self {
            max_retries: 2,
            initial_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(15),
            backoff_factor: 2.0,
            jitter: true,
            retryable_statuses: vec![429, 502, 503, 504],
        }
    }

    /// Whether `error` is worth another attempt under this config.
    pub fn is_retryable(&self, error: &HttpError) -> bool {
        match error {
            HttpError::ServerError { status, .. } => self.retryable_statuses.contains(status),
            HttpError::RateLimited { .. } => self.retryable_statuses.contains(&429),
            HttpError::Timeout => true,
            #[cfg(feature = "http")]
            HttpError::Reqwest(e) => e.is_connect() || e.is_timeout() || e.is_request(),
            _ => false,
        }
    }

    /// Delay before retry number `attempt` (0-indexed).
    ///
    /// A server-provided `Retry-After` wins over the computed backoff but is
    /// still capped at `max_delay`.
    pub fn delay_for(&self, attempt: u32, error: &HttpError) -> Duration {
        if let HttpError::RateLimited {
            retry_after_ms: Some(ms),
        } = error
        {
            return Duration::from_millis(*ms).min(self.max_delay);
        }
        self.delay_for_attempt(attempt)
    }

    /// Exponential backoff for retry number `attempt` (0-indexed).
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let base =
            self.initial_delay.as_millis() as f64 * self.backoff_factor.powi(attempt as i32);
        let capped = base.min(self.max_delay.as_millis() as f64);

        let final_ms = if self.jitter && capped > 0.0 {
            let spread = capped * 0.25;
            (capped + rand::thread_rng().gen_range(-spread..=spread)).max(0.0)
        } else {
            capped
        };

        Duration::from_millis(final_ms as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(initial_ms: u64, max_ms: u64, factor: f64) -> RetryConfig {
        RetryConfig {
            max_retries: 3,
            initial_delay: Duration::from_millis(initial_ms),
            max_delay: Duration::from_millis(max_ms),
            backoff_factor: factor,
            jitter: false,
            retryable_statuses: vec![429, 503],
        }
    }

    #[test]
    fn test_default_policy_is_single_attempt() {
        assert!(RetryPolicy::default().config().is_none());
    }

    #[test]
    fn test_idempotent_retries_rate_limits() {
        let config = RetryPolicy::Idempotent.config().unwrap();
        assert!(config.is_retryable(&HttpError::RateLimited { retry_after_ms: None }));
        assert!(config.is_retryable(&HttpError::ServerError {
            status: 502,
            body: String::new()
        }));
        assert!(!config.is_retryable(&HttpError::NotFound("bitcoin".into())));
        assert!(!config.is_retryable(&HttpError::ServerError {
            status: 500,
            body: String::new()
        }));
    }

    #[test]
    fn test_backoff_doubles_then_caps() {
        let config = fixed(100, 300, 2.0);
        assert_eq!(config.delay_for_attempt(0).as_millis(), 100);
        assert_eq!(config.delay_for_attempt(1).as_millis(), 200);
        assert_eq!(config.delay_for_attempt(2).as_millis(), 300);
        assert_eq!(config.delay_for_attempt(5).as_millis(), 300);
    }

    #[test]
    fn test_retry_after_overrides_backoff() {
        let config = fixed(100, 5_000, 2.0);
        let limited = HttpError::RateLimited {
            retry_after_ms: Some(1_500),
        };
        assert_eq!(config.delay_for(0, &limited).as_millis(), 1_500);

        let huge = HttpError::RateLimited {
            retry_after_ms: Some(60_000),
        };
        assert_eq!(config.delay_for(0, &huge).as_millis(), 5_000);
    }

    #[test]
    fn test_jitter_stays_within_a_quarter() {
        let config = RetryConfig {
            jitter: true,
            ..fixed(1_000, 10_000, 1.0)
        };
        for _ in 0..50 {
            let ms = config.delay_for_attempt(0).as_millis();
            assert!((750..=1_250).contains(&ms), "delay {ms} out of range");
        }
    }
}
