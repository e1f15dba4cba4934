//! Configuration types for the Quran.com client.

use std::time::Duration;
use url::Url;

/// Public Quran.com v4 API.
pub const DEFAULT_BASE_URL: &str = "https://api.quran.com/api/v4";

/// One hour, in line with how often the reference lists change upstream.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_millis(3_600_000);

pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(30_000);

/// Configuration for the Quran.com client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the upstream API, always ending in `/`.
    pub base_url: Url,
    /// Sent as `x-api-key` when present.
    pub api_key: Option<String>,
    /// Bound on each individual attempt.
    pub timeout: Duration,
    /// Retry configuration.
    pub retry_config: RetryConfig,
    /// Lifetime of cached reference lists.
    pub cache_ttl: Duration,
}

impl ClientConfig {
    /// Create a new configuration with the given base URL.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url: with_trailing_slash(base_url),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
            retry_config: RetryConfig::default(),
            cache_ttl: DEFAULT_CACHE_TTL,
        }
    }
}

/// `Url::join` replaces the last path segment unless the base ends in `/`.
pub fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

/// Configuration for retry behavior.
///
/// Backoff is exponential without jitter: with the defaults a failing call
/// waits 1s, 2s and 4s between its four attempts.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retries after the first attempt.
    pub max_retries: u32,
    /// Delay before the first retry.
    pub initial_backoff: Duration,
    /// Maximum backoff duration.
    pub max_backoff: Duration,
    /// Backoff multiplier.
    pub backoff_multiplier: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_backoff: Duration::from_millis(1000),
            max_backoff: Duration::from_secs(10),
            backoff_multiplier: 2.0,
        }
    }
}

impl RetryConfig {
    /// Create a configuration with no retries.
    pub fn no_retry() -> Self {
        Self {
            max_retries: 0,
            ..Default::default()
        }
    }

    /// Calculate backoff duration for a given attempt.
    pub fn backoff_for_attempt(&self, attempt: u32) -> Duration {
        let backoff_ms = self.initial_backoff.as_millis() as f64
            * self.backoff_multiplier.powi(attempt as i32);
        let backoff = Duration::from_millis(backoff_ms as u64);
        std::cmp::min(backoff, self.max_backoff)
    }

    /// Server errors are worth another try, everything else is final.
    pub fn should_retry_status(&self, status: u16) -> bool {
        (500..600).contains(&status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_calculation() {
        let config = RetryConfig::default();

        assert_eq!(config.backoff_for_attempt(0), Duration::from_millis(1000));
        assert_eq!(config.backoff_for_attempt(1), Duration::from_millis(2000));
        assert_eq!(config.backoff_for_attempt(2), Duration::from_millis(4000));
    }

    #[test]
    fn test_backoff_capped_at_max() {
        let config = RetryConfig {
            max_backoff: Duration::from_millis(5000),
            ..Default::default()
        };

        assert_eq!(config.backoff_for_attempt(10), Duration::from_millis(5000));
    }

    #[test]
    fn test_should_retry_status() {
        let config = RetryConfig::default();

        assert!(config.should_retry_status(500));
        assert!(config.should_retry_status(503));
        assert!(config.should_retry_status(599));
        assert!(!config.should_retry_status(400));
        assert!(!config.should_retry_status(404));
        assert!(!config.should_retry_status(429));
        assert!(!config.should_retry_status(600));
    }

    #[test]
    fn test_client_config_defaults() {
        let url = Url::parse(DEFAULT_BASE_URL).unwrap();
        let config = ClientConfig::new(url);

        assert_eq!(config.base_url.as_str(), "https://api.quran.com/api/v4/");
        assert!(config.api_key.is_none());
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.cache_ttl, Duration::from_secs(3600));
        assert_eq!(config.retry_config.max_retries, 3);
    }

    #[test]
    fn test_trailing_slash_is_idempotent() {
        let url = Url::parse("http://localhost:8080/api/v4/").unwrap();
        assert_eq!(with_trailing_slash(url).as_str(), "http://localhost:8080/api/v4/");

        let url = Url::parse("http://localhost:8080").unwrap();
        assert_eq!(with_trailing_slash(url).as_str(), "http://localhost:8080/");
    }

    #[test]
    fn test_retry_config_no_retry() {
        let config = RetryConfig::no_retry();

        assert_eq!(config.max_retries, 0);
        assert_eq!(config.initial_backoff, Duration::from_millis(1000));
    }
}
