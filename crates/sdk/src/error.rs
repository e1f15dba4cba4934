//! Error types for the Quran.com client.

use quran_core::ValidationError;

/// Result type for client operations.
pub type QuranResult<T> = Result<T, QuranError>;

/// Error types that can surface from a resource operation.
#[derive(Debug, thiserror::Error)]
pub enum QuranError {
    /// Arguments were rejected before any network activity.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Upstream unreachable, 5xx after all retries, or an immediate 4xx.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Anything else that went wrong while producing a response.
    #[error("Unexpected error: {0}")]
    Unexpected(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl QuranError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Upstream status code, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport(e) => e.status,
            _ => None,
        }
    }
}

/// Final outcome of a fetch that did not produce a payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct TransportError {
    pub status: Option<u16>,
    pub message: String,
}

/// Outcome of a single attempt, before retry classification.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AttemptError {
    /// No response was received at all.
    #[error("{0}")]
    Connect(String),

    /// The attempt exceeded its timeout.
    #[error("request timed out")]
    Timeout,

    /// The upstream answered with a non-success status.
    #[error("Request failed with status code {status}")]
    Status { status: u16, body: String },

    /// A success response whose body was not valid JSON.
    #[error("invalid response body: {0}")]
    Decode(String),

    /// The request URL could not be built. Never retried.
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),
}

impl AttemptError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when no response was received (connection failure or timeout).
    pub fn is_connectivity(&self) -> bool {
        matches!(self, Self::Connect(_) | Self::Timeout)
    }
}

impl From<reqwest::Error> for AttemptError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Connect(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_accessors() {
        let err = QuranError::Transport(TransportError {
            status: Some(503),
            message: "API request failed".to_string(),
        });
        assert_eq!(err.status(), Some(503));
        assert!(!err.is_validation());

        let err = QuranError::from(ValidationError::single("id", "bad"));
        assert!(err.is_validation());
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "Validation error: id: bad");
    }

    #[test]
    fn test_attempt_classification() {
        assert!(AttemptError::Connect("refused".into()).is_connectivity());
        assert!(AttemptError::Timeout.is_connectivity());
        let status = AttemptError::Status {
            status: 404,
            body: String::new(),
        };
        assert!(!status.is_connectivity());
        assert_eq!(status.status(), Some(404));
        assert!(!AttemptError::Decode("eof".into()).is_connectivity());
    }
}
