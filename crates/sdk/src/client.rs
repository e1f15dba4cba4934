//! Main client for the Quran.com API.

use crate::api::*;
use crate::config::{with_trailing_slash, ClientConfig, RetryConfig, DEFAULT_BASE_URL};
use crate::error::{QuranError, QuranResult};
use crate::pipeline::ResourceService;
use crate::transport::{HttpTransport, RetryingFetcher, Transport};
use quran_core::{Cache, ResourceKind};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Entries kept per language for the chapter list.
pub const CHAPTERS_CACHE_CAPACITY: usize = 50;

/// Entries kept by every other resource cache.
pub const DEFAULT_CACHE_CAPACITY: usize = 100;

/// Main client for interacting with the Quran.com API.
///
/// Every resource kind gets its own [`ResourceService`] and cache; all of
/// them share one [`RetryingFetcher`].
#[derive(Clone)]
pub struct QuranClient {
    config: Arc<ClientConfig>,
    chapters: ResourceService,
    verses: ResourceService,
    audio: ResourceService,
    translations: ResourceService,
    tafsirs: ResourceService,
    languages: ResourceService,
    juzs: ResourceService,
    search: ResourceService,
}

impl QuranClient {
    /// Create a new client builder.
    pub fn builder() -> QuranClientBuilder {
        QuranClientBuilder::new()
    }

    /// Create a client talking HTTP to `config.base_url`.
    pub fn from_config(config: ClientConfig) -> QuranResult<Self> {
        let transport = Arc::new(HttpTransport::new(&config)?);
        Ok(Self::with_transport(config, transport))
    }

    fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        let fetcher = RetryingFetcher::new(transport, config.retry_config.clone(), config.timeout);
        let ttl = config.cache_ttl;
        let service = |kind: ResourceKind, capacity: usize| {
            ResourceService::new(kind, Arc::new(Cache::new(capacity, ttl)), fetcher.clone())
        };

        Self {
            chapters: service(ResourceKind::Chapters, CHAPTERS_CACHE_CAPACITY),
            verses: service(ResourceKind::Verses, DEFAULT_CACHE_CAPACITY),
            audio: service(ResourceKind::Audio, DEFAULT_CACHE_CAPACITY),
            translations: service(ResourceKind::Translations, DEFAULT_CACHE_CAPACITY),
            tafsirs: service(ResourceKind::Tafsirs, DEFAULT_CACHE_CAPACITY),
            languages: service(ResourceKind::Languages, DEFAULT_CACHE_CAPACITY),
            juzs: service(ResourceKind::Juzs, DEFAULT_CACHE_CAPACITY),
            search: service(ResourceKind::Search, DEFAULT_CACHE_CAPACITY),
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The service backing one resource kind.
    pub fn service(&self, kind: ResourceKind) -> &ResourceService {
        match kind {
            ResourceKind::Chapters => &self.chapters,
            ResourceKind::Verses => &self.verses,
            ResourceKind::Audio => &self.audio,
            ResourceKind::Translations => &self.translations,
            ResourceKind::Tafsirs => &self.tafsirs,
            ResourceKind::Languages => &self.languages,
            ResourceKind::Juzs => &self.juzs,
            ResourceKind::Search => &self.search,
        }
    }

    /// Drop every cached entry.
    pub fn clear_caches(&self) {
        for kind in ResourceKind::ALL {
            self.service(kind).cache().clear();
        }
    }

    /// Get the chapters API.
    pub fn chapters(&self) -> ChaptersApi<'_> {
        ChaptersApi::new(self)
    }

    /// Get the verses API.
    pub fn verses(&self) -> VersesApi<'_> {
        VersesApi::new(self)
    }

    /// Get the audio API.
    pub fn audio(&self) -> AudioApi<'_> {
        AudioApi::new(self)
    }

    /// Get the translations API.
    pub fn translations(&self) -> TranslationsApi<'_> {
        TranslationsApi::new(self)
    }

    /// Get the tafsirs API.
    pub fn tafsirs(&self) -> TafsirsApi<'_> {
        TafsirsApi::new(self)
    }

    /// Get the languages API.
    pub fn languages(&self) -> LanguagesApi<'_> {
        LanguagesApi::new(self)
    }

    /// Get the juzs API.
    pub fn juzs(&self) -> JuzsApi<'_> {
        JuzsApi::new(self)
    }

    /// Get the search API.
    pub fn search(&self) -> SearchApi<'_> {
        SearchApi::new(self)
    }
}

/// Builder for creating a QuranClient.
pub struct QuranClientBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    timeout: Duration,
    retry_config: RetryConfig,
    cache_ttl: Duration,
    transport: Option<Arc<dyn Transport>>,
}

impl QuranClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            timeout: crate::config::DEFAULT_TIMEOUT,
            retry_config: RetryConfig::default(),
            cache_ttl: crate::config::DEFAULT_CACHE_TTL,
            transport: None,
        }
    }

    /// Set the base URL of the API. Defaults to the public Quran.com v4 API.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the API key sent as `x-api-key`. An empty key is not sent.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the per-attempt request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the retry configuration.
    pub fn retry_config(mut self, config: RetryConfig) -> Self {
        self.retry_config = config;
        self
    }

    /// Set how long cached reference lists stay fresh.
    pub fn cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Use a custom transport instead of HTTP.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client.
    pub fn build(self) -> QuranResult<QuranClient> {
        if self.timeout.is_zero() {
            return Err(QuranError::Config(
                "request timeout must be greater than zero".to_string(),
            ));
        }

        let base_url = Url::parse(self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(QuranError::Config(format!(
                "unsupported base URL scheme: {}",
                base_url.scheme()
            )));
        }

        let config = ClientConfig {
            base_url: with_trailing_slash(base_url),
            api_key: self.api_key.filter(|k| !k.is_empty()),
            timeout: self.timeout,
            retry_config: self.retry_config,
            cache_ttl: self.cache_ttl,
        };

        match self.transport {
            Some(transport) => Ok(QuranClient::with_transport(config, transport)),
            None => QuranClient::from_config(config),
        }
    }
}

impl Default for QuranClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
