//! HTTP transport backed by reqwest.

use crate::config::ClientConfig;
use crate::error::{AttemptError, QuranError, QuranResult};
use crate::transport::{Query, Transport};
use quran_core::Payload;
use reqwest::{header, Client};
use tracing::debug;
use url::Url;

/// Header carrying the optional static credential.
pub const API_KEY_HEADER: &str = "x-api-key";

/// HTTP transport for making API requests.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given configuration.
    pub fn new(config: &ClientConfig) -> QuranResult<Self> {
        let mut headers = header::HeaderMap::new();

        if let Some(api_key) = config.api_key.as_deref().filter(|k| !k.is_empty()) {
            let mut value = header::HeaderValue::from_str(api_key)
                .map_err(|_| QuranError::Config("Invalid API key format".to_string()))?;
            value.set_sensitive(true);
            headers.insert(header::HeaderName::from_static(API_KEY_HEADER), value);
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("quran-sdk/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()
            .map_err(|e| QuranError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Build a URL for the given path.
    fn build_url(&self, path: &str) -> Result<Url, AttemptError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| AttemptError::InvalidUrl(format!("{path}: {e}")))
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str, query: &Query) -> Result<Payload, AttemptError> {
        let url = self.build_url(path)?;
        debug!(url = %url, query = ?query.pairs(), "GET request");

        let response = self.client.get(url).query(query.pairs()).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), body_len = body.len(), "GET failed");
            return Err(AttemptError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await?;
        debug!(status = status.as_u16(), body_len = body.len(), "GET response");
        serde_json::from_slice(&body).map_err(|e| AttemptError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RetryConfig;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_config(base_url: &str) -> ClientConfig {
        let mut config = ClientConfig::new(Url::parse(base_url).unwrap());
        config.retry_config = RetryConfig::no_retry();
        config
    }

    fn create_config_with_key(base_url: &str, api_key: &str) -> ClientConfig {
        let mut config = create_config(base_url);
        config.api_key = Some(api_key.to_string());
        config
    }

    #[tokio::test]
    async fn test_get_request_with_query() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v4/chapters"))
            .and(query_param("language", "en"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"chapters": []})))
            .expect(1)
            .mount(&server)
            .await;

        let config = create_config(&format!("{}/api/v4", server.uri()));
        let transport = HttpTransport::new(&config).unwrap();

        let query = Query::new().push("language", "en");
        let body = transport.get("chapters", &query).await.unwrap();
        assert_eq!(body, json!({"chapters": []}));
    }

    #[tokio::test]
    async fn test_api_key_header() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/juzs"))
            .and(header("x-api-key", "secret-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"juzs": []})))
            .mount(&server)
            .await;

        let config = create_config_with_key(&server.uri(), "secret-key");
        let transport = HttpTransport::new(&config).unwrap();

        let body = transport.get("juzs", &Query::new()).await.unwrap();
        assert_eq!(body["juzs"], json!([]));
    }

    #[tokio::test]
    async fn test_empty_api_key_is_not_sent() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/juzs"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let config = create_config_with_key(&server.uri(), "");
        let transport = HttpTransport::new(&config).unwrap();
        transport.get("juzs", &Query::new()).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(!requests[0].headers.contains_key(API_KEY_HEADER));
    }

    #[tokio::test]
    async fn test_status_error_keeps_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/chapters/999"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Not found"))
            .mount(&server)
            .await;

        let transport = HttpTransport::new(&create_config(&server.uri())).unwrap();

        let err = transport.get("chapters/999", &Query::new()).await.unwrap_err();
        assert_eq!(
            err,
            AttemptError::Status {
                status: 404,
                body: "Not found".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_unbuildable_url_is_not_a_connect_error() {
        let server = MockServer::start().await;
        let transport = HttpTransport::new(&create_config(&server.uri())).unwrap();

        let err = transport.get("http://[", &Query::new()).await.unwrap_err();
        assert!(matches!(err, AttemptError::InvalidUrl(_)));
        assert!(!err.is_connectivity());
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_json_is_decode_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let transport = HttpTransport::new(&create_config(&server.uri())).unwrap();

        let err = transport.get("search", &Query::new()).await.unwrap_err();
        assert!(matches!(err, AttemptError::Decode(_)));
    }

    #[tokio::test]
    async fn test_slow_response_is_timeout() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/juzs"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({}))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let mut config = create_config(&server.uri());
        config.timeout = Duration::from_millis(100);
        let transport = HttpTransport::new(&config).unwrap();

        let err = transport.get("juzs", &Query::new()).await.unwrap_err();
        assert_eq!(err, AttemptError::Timeout);
    }

    #[tokio::test]
    async fn test_connection_refused_is_connectivity_failure() {
        // Grab a free port, then close it again so nothing is listening
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let uri = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let transport = HttpTransport::new(&create_config(&uri)).unwrap();

        let err = transport.get("juzs", &Query::new()).await.unwrap_err();
        assert!(err.is_connectivity());
    }

    #[test]
    fn test_build_url_keeps_base_path() {
        let transport =
            HttpTransport::new(&create_config("https://api.quran.com/api/v4")).unwrap();

        let url = transport.build_url("verses/by_key/2:255").unwrap();
        assert_eq!(url.as_str(), "https://api.quran.com/api/v4/verses/by_key/2:255");

        let url = transport.build_url("/resources/tafsirs").unwrap();
        assert_eq!(url.as_str(), "https://api.quran.com/api/v4/resources/tafsirs");
    }
}
