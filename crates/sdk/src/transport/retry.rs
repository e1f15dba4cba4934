//! Retry with exponential backoff around a [`Transport`].

use crate::config::RetryConfig;
use crate::error::{AttemptError, QuranError, QuranResult, TransportError};
use crate::transport::{Query, Transport};
use quran_core::Payload;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Longest slice of an upstream error body copied into a [`TransportError`].
const BODY_EXCERPT_CHARS: usize = 500;

/// Issues a call, retrying connectivity failures and 5xx responses.
///
/// Each attempt is bounded by `attempt_timeout`; the retry sequence as a whole
/// has no deadline.
#[derive(Clone)]
pub struct RetryingFetcher {
    transport: Arc<dyn Transport>,
    retry: RetryConfig,
    attempt_timeout: Duration,
}

impl RetryingFetcher {
    pub fn new(transport: Arc<dyn Transport>, retry: RetryConfig, attempt_timeout: Duration) -> Self {
        Self {
            transport,
            retry,
            attempt_timeout,
        }
    }

    pub fn retry_config(&self) -> &RetryConfig {
        &self.retry
    }

    fn is_retryable(&self, err: &AttemptError) -> bool {
        err.is_connectivity()
            || err
                .status()
                .is_some_and(|status| self.retry.should_retry_status(status))
    }

    /// Fetch `path`, failing with [`QuranError::Transport`] once retries are exhausted
    /// or the failure is terminal.
    pub async fn fetch(&self, path: &str, query: &Query) -> QuranResult<Payload> {
        let mut attempt: u32 = 0;

        loop {
            debug!(
                path,
                attempt,
                max_retries = self.retry.max_retries,
                query = ?query.pairs(),
                "request"
            );

            let outcome =
                match tokio::time::timeout(self.attempt_timeout, self.transport.get(path, query)).await {
                    Ok(outcome) => outcome,
                    Err(_) => Err(AttemptError::Timeout),
                };

            let err = match outcome {
                Ok(payload) => {
                    debug!(path, attempt, "response");
                    return Ok(payload);
                }
                Err(err) => err,
            };

            debug!(path, attempt, error = %err, "error");

            if matches!(err, AttemptError::Decode(_) | AttemptError::InvalidUrl(_)) {
                error!(path, error = %err, "request cannot succeed");
                return Err(QuranError::Unexpected(format!(
                    "API request failed: {err}"
                )));
            }

            if self.is_retryable(&err) && attempt < self.retry.max_retries {
                let delay = self.retry.backoff_for_attempt(attempt);
                warn!(
                    path,
                    status = err.status(),
                    attempt = attempt + 1,
                    max_retries = self.retry.max_retries,
                    delay_ms = delay.as_millis() as u64,
                    "API request failed, retrying"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
                continue;
            }

            let failure = transport_error(&err);
            error!(path, attempts = attempt + 1, status = failure.status, "{}", failure.message);
            return Err(failure.into());
        }
    }
}

/// Build the caller-facing error for the last failed attempt.
fn transport_error(err: &AttemptError) -> TransportError {
    let mut message = format!("API request failed: {err}");

    if let AttemptError::Status { status, body } = err {
        message.push_str(&format!(" (Status: {status})"));
        let body = body.trim();
        if !body.is_empty() {
            let excerpt: String = body.chars().take(BODY_EXCERPT_CHARS).collect();
            message.push_str(" - ");
            message.push_str(&excerpt);
            if body.chars().count() > BODY_EXCERPT_CHARS {
                message.push_str("...");
            }
        }
    }

    if err.is_connectivity() {
        message.push_str(" - Connection failed or timed out");
    }

    TransportError {
        status: err.status(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{server_error, ScriptedTransport, Step};
    use serde_json::json;

    fn fetcher(transport: Arc<ScriptedTransport>) -> RetryingFetcher {
        RetryingFetcher::new(transport, RetryConfig::default(), Duration::from_secs(30))
    }

    fn assert_gap(actual: Duration, expected_ms: u64) {
        let expected = Duration::from_millis(expected_ms);
        assert!(
            actual >= expected && actual <= expected + Duration::from_millis(1),
            "expected a {expected:?} backoff, got {actual:?}"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_succeeds_on_nth_attempt() {
        for n in 1..=4usize {
            let mut steps: Vec<Step> = (1..n).map(|_| server_error(503)).collect();
            steps.push(Step::ok(json!({"attempt": n})));
            let transport = Arc::new(ScriptedTransport::new(steps));

            let payload = fetcher(transport.clone())
                .fetch("chapters", &Query::new())
                .await
                .unwrap();

            assert_eq!(payload, json!({"attempt": n}));
            assert_eq!(transport.calls(), n);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_backoff_delays_double() {
        let transport = Arc::new(ScriptedTransport::new(vec![
            server_error(503),
            server_error(503),
            server_error(503),
            Step::ok(json!({})),
        ]));

        fetcher(transport.clone())
            .fetch("chapters", &Query::new())
            .await
            .unwrap();

        let gaps = transport.gaps();
        assert_eq!(gaps.len(), 3);
        assert_gap(gaps[0], 1000);
        assert_gap(gaps[1], 2000);
        assert_gap(gaps[2], 4000);
    }

    #[tokio::test(start_paused = true)]
    async fn test_gives_up_after_max_retries() {
        let transport = Arc::new(ScriptedTransport::repeating(server_error(500)));

        let err = fetcher(transport.clone())
            .fetch("verses/by_key/1:1", &Query::new())
            .await
            .unwrap_err();

        assert_eq!(transport.calls(), 4);
        match err {
            QuranError::Transport(e) => {
                assert_eq!(e.status, Some(500));
                assert!(e.message.contains("(Status: 500)"), "{}", e.message);
                assert!(e.message.contains("upstream exploded"), "{}", e.message);
            }
            other => panic!("Expected transport error, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_client_errors_are_not_retried() {
        let transport = Arc::new(ScriptedTransport::new(vec![Step::status(404, "Not found")]));

        let err = fetcher(transport.clone())
            .fetch("chapters/500", &Query::new())
            .await
            .unwrap_err();

        assert_eq!(transport.calls(), 1);
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test(start_paused = true)]
    async fn test_connectivity_failures_are_retried() {
        let transport = Arc::new(ScriptedTransport::repeating(Step::connect_error()));

        let err = fetcher(transport.clone())
            .fetch("juzs", &Query::new())
            .await
            .unwrap_err();

        assert_eq!(transport.calls(), 4);
        assert_eq!(err.status(), None);
        assert!(err.to_string().ends_with("Connection failed or timed out"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_attempt_timeout_counts_as_connectivity_failure() {
        let transport = Arc::new(ScriptedTransport::new(vec![
            Step::Hang(Duration::from_secs(60)),
            Step::ok(json!({"ok": true})),
        ]));

        let fetcher = RetryingFetcher::new(
            transport.clone(),
            RetryConfig::default(),
            Duration::from_secs(5),
        );
        let payload = fetcher.fetch("juzs", &Query::new()).await.unwrap();

        assert_eq!(payload, json!({"ok": true}));
        assert_eq!(transport.calls(), 2);
        // 5s attempt timeout plus the 1s backoff
        assert_gap(transport.gaps()[0], 6000);
    }

    #[tokio::test(start_paused = true)]
    async fn test_decode_failure_is_unexpected() {
        let transport = Arc::new(ScriptedTransport::new(vec![Step::Fail(AttemptError::Decode(
            "expected value".into(),
        ))]));

        let err = fetcher(transport.clone())
            .fetch("search", &Query::new())
            .await
            .unwrap_err();

        assert_eq!(transport.calls(), 1);
        assert!(matches!(err, QuranError::Unexpected(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_url_is_not_retried() {
        let transport = Arc::new(ScriptedTransport::new(vec![Step::Fail(
            AttemptError::InvalidUrl("http://[: invalid IPv6 address".into()),
        )]));

        let started = tokio::time::Instant::now();
        let err = fetcher(transport.clone())
            .fetch("http://[", &Query::new())
            .await
            .unwrap_err();

        assert_eq!(transport.calls(), 1);
        assert!(matches!(err, QuranError::Unexpected(_)));
        assert_eq!(started.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_long_bodies_are_truncated() {
        let err = AttemptError::Status {
            status: 502,
            body: "x".repeat(2000),
        };
        let failure = transport_error(&err);
        assert_eq!(failure.status, Some(502));
        assert!(failure.message.ends_with("..."));
        assert!(failure.message.len() < 600);
    }
}
