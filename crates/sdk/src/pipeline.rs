//! Request pipeline shared by every resource kind.
//!
//! Each operation is described by a static [`Endpoint`]. A [`ResourceService`]
//! validates the parameters, then either calls the upstream directly or goes
//! through its cache and degrades to the fallback tables when the call fails.

use crate::error::{QuranError, QuranResult};
use crate::transport::{Query, RetryingFetcher};
use quran_core::{
    get_fallback, normalize_language, Cache, FallbackDataset, FallbackReason, Payload,
    ResourceKind, ResourceResponse, SourceKind, Validate,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Post-processing applied to a live response before it is cached.
pub type Shape = fn(Payload) -> Result<Payload, String>;

/// How an endpoint treats the cache and failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Served from the cache when fresh; failures degrade to a fallback table.
    Cached {
        key_prefix: &'static str,
        fallback: FallbackDataset,
    },
    /// Always fetched; failures propagate.
    Direct,
}

/// Static description of one operation.
#[derive(Debug, Clone, Copy)]
pub struct Endpoint {
    pub operation: &'static str,
    pub kind: ResourceKind,
    pub policy: Policy,
    pub shape: Option<Shape>,
}

impl Endpoint {
    pub fn is_cached(&self) -> bool {
        matches!(self.policy, Policy::Cached { .. })
    }
}

/// Resolved upstream call for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub path: String,
    pub query: Query,
    language: Option<String>,
}

impl Request {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Query::new(),
            language: None,
        }
    }

    pub fn query(mut self, query: Query) -> Self {
        self.query = query;
        self
    }

    /// Language that selects the cache entry. It is not added to the query.
    pub fn language(mut self, language: Option<&str>) -> Self {
        self.language = language.map(str::to_string);
        self
    }

    pub fn cache_key(&self, key_prefix: &str) -> String {
        format!(
            "{key_prefix}_{}",
            normalize_language(self.language.as_deref())
        )
    }
}

/// Serves every operation of one resource kind.
#[derive(Clone)]
pub struct ResourceService {
    kind: ResourceKind,
    cache: Arc<Cache<Payload>>,
    fetcher: RetryingFetcher,
}

impl ResourceService {
    pub fn new(kind: ResourceKind, cache: Arc<Cache<Payload>>, fetcher: RetryingFetcher) -> Self {
        Self {
            kind,
            cache,
            fetcher,
        }
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn cache(&self) -> &Arc<Cache<Payload>> {
        &self.cache
    }

    /// Run `endpoint` for `params`.
    ///
    /// `build` is only called once `params` passed validation, so it may rely
    /// on required fields being present.
    pub async fn execute<P, F>(
        &self,
        endpoint: &Endpoint,
        params: &P,
        build: F,
    ) -> QuranResult<ResourceResponse>
    where
        P: Validate,
        F: FnOnce(&P) -> Request,
    {
        debug_assert_eq!(endpoint.kind, self.kind);
        let operation = endpoint.operation;

        if let Err(err) = params.validate() {
            debug!(operation, error = %err, "rejected arguments");
            return Err(err.into());
        }

        let request = build(params);

        let (key_prefix, fallback) = match endpoint.policy {
            Policy::Direct => {
                let data = self.load(endpoint, &request).await?;
                debug!(operation, source = "api", "response");
                return Ok(ResourceResponse::new(operation, SourceKind::Api, data));
            }
            Policy::Cached {
                key_prefix,
                fallback,
            } => (key_prefix, fallback),
        };

        let key = request.cache_key(key_prefix);
        if let Some(data) = self.cache.get(&key) {
            debug!(
                operation,
                source = "cache",
                key = %key,
                cache_size = self.cache.size(),
                "response"
            );
            return Ok(ResourceResponse::new(operation, SourceKind::Cache, data));
        }

        match self.load(endpoint, &request).await {
            Ok(data) => {
                self.cache.set(key, data.clone());
                debug!(
                    operation,
                    source = "api",
                    cache_size = self.cache.size(),
                    "response"
                );
                Ok(ResourceResponse::new(operation, SourceKind::Api, data))
            }
            Err(err) => {
                let reason = match err {
                    QuranError::Transport(_) => FallbackReason::ApiUnavailable,
                    _ => FallbackReason::ErrorOccurred,
                };
                warn!(
                    operation,
                    source = "fallback",
                    reason = reason.describe(),
                    error = %err,
                    "serving fallback data"
                );
                Ok(ResourceResponse::new(
                    operation,
                    SourceKind::Fallback(reason),
                    get_fallback(fallback),
                ))
            }
        }
    }

    async fn load(&self, endpoint: &Endpoint, request: &Request) -> QuranResult<Payload> {
        let payload = self.fetcher.fetch(&request.path, &request.query).await?;
        match endpoint.shape {
            Some(shape) => shape(payload).map_err(QuranError::Unexpected),
            None => Ok(payload),
        }
    }
}
