//! Transport layer for the Quran.com client.

pub mod http;
pub mod retry;

pub use http::HttpTransport;
pub use retry::RetryingFetcher;

use crate::error::AttemptError;
use quran_core::{ArgValue, Payload};

/// Flat list of query parameters. Absent values are never added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query(Vec<(String, String)>);

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, key: &str, value: impl Into<String>) -> Self {
        self.0.push((key.to_string(), value.into()));
        self
    }

    pub fn push_opt(self, key: &str, value: Option<&str>) -> Self {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(v) => self.push(key, v),
            None => self,
        }
    }

    pub fn push_arg(self, key: &str, value: Option<&ArgValue>) -> Self {
        match value {
            Some(v) => self.push(key, v.to_query_value()),
            None => self,
        }
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.0
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Issues one outbound GET. Implementations do not retry.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Fetch `path` relative to the API base with the given query.
    async fn get(&self, path: &str, query: &Query) -> Result<Payload, AttemptError>;
}
