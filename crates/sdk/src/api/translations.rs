//! Translation endpoints.

use crate::client::QuranClient;
use crate::error::QuranResult;
use crate::pipeline::{Endpoint, Policy, Request};
use crate::transport::Query;
use quran_core::{
    FallbackDataset, LanguageParams, ResourceKind, ResourceResponse, TextScope,
    TranslationInfoParams, TranslationParams,
};

pub const LIST_TRANSLATIONS: Endpoint = Endpoint {
    operation: "translations",
    kind: ResourceKind::Translations,
    policy: Policy::Cached {
        key_prefix: "translations",
        fallback: FallbackDataset::Translations,
    },
    shape: None,
};

pub const TRANSLATION_INFO: Endpoint = Endpoint {
    operation: "translation-info",
    kind: ResourceKind::Translations,
    policy: Policy::Direct,
    shape: None,
};

pub const TRANSLATION: Endpoint = Endpoint {
    operation: "translation",
    kind: ResourceKind::Translations,
    policy: Policy::Direct,
    shape: None,
};

/// Fields and scope forwarded when fetching a translation or tafsir text.
pub(crate) fn scope_query(scope: &TextScope) -> Query {
    Query::new()
        .push_opt("fields", scope.fields.as_deref())
        .push_arg("chapter_number", scope.chapter_number.as_ref())
        .push_arg("juz_number", scope.juz_number.as_ref())
        .push_arg("page_number", scope.page_number.as_ref())
        .push_arg("hizb_number", scope.hizb_number.as_ref())
        .push_arg("rub_el_hizb_number", scope.rub_el_hizb_number.as_ref())
        .push_opt("verse_key", scope.verse_key.as_deref())
}

/// Translations API.
pub struct TranslationsApi<'a> {
    client: &'a QuranClient,
}

impl<'a> TranslationsApi<'a> {
    pub(crate) fn new(client: &'a QuranClient) -> Self {
        Self { client }
    }

    /// List available translations.
    pub async fn list(&self, params: &LanguageParams) -> QuranResult<ResourceResponse> {
        self.client
            .service(ResourceKind::Translations)
            .execute(&LIST_TRANSLATIONS, params, |p| {
                Request::new("resources/translations")
                    .query(Query::new().push_opt("language", p.language.as_deref()))
                    .language(p.language.as_deref())
            })
            .await
    }

    pub async fn info(&self, params: &TranslationInfoParams) -> QuranResult<ResourceResponse> {
        self.client
            .service(ResourceKind::Translations)
            .execute(&TRANSLATION_INFO, params, |p| {
                Request::new(format!(
                    "resources/translations/{}/info",
                    p.translation_id.as_deref().map(str::trim).unwrap_or_default()
                ))
            })
            .await
    }

    /// Get the text of one translation, optionally narrowed to a scope.
    pub async fn get(&self, params: &TranslationParams) -> QuranResult<ResourceResponse> {
        self.client
            .service(ResourceKind::Translations)
            .execute(&TRANSLATION, params, |p| {
                Request::new(format!(
                    "quran/translations/{}",
                    p.translation_id.as_deref().map(str::trim).unwrap_or_default()
                ))
                .query(scope_query(&p.scope))
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{server_error, ScriptedTransport, Step};
    use quran_core::{get_fallback, FallbackReason, SourceKind};
    use serde_json::json;
    use std::sync::Arc;

    fn client(transport: Arc<ScriptedTransport>) -> QuranClient {
        QuranClient::builder().transport(transport).build().unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_list_is_cached_per_language() {
        let transport = Arc::new(ScriptedTransport::repeating(Step::ok(json!({"translations": []}))));
        let client = client(transport.clone());

        let first = client.translations().list(&LanguageParams::default()).await.unwrap();
        let second = client.translations().list(&LanguageParams::new("en")).await.unwrap();

        assert_eq!(first.source, SourceKind::Api);
        assert_eq!(second.source, SourceKind::Cache);
        assert_eq!(transport.calls(), 1);
        // No language given means none is forwarded
        assert!(transport.last_query().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_list_falls_back() {
        let transport = Arc::new(ScriptedTransport::repeating(Step::connect_error()));
        let client = client(transport.clone());

        let response = client.translations().list(&LanguageParams::new("en")).await.unwrap();

        assert_eq!(
            response.source,
            SourceKind::Fallback(FallbackReason::ApiUnavailable)
        );
        assert_eq!(response.data, get_fallback(FallbackDataset::Translations));
    }

    #[tokio::test(start_paused = true)]
    async fn test_text_forwards_scope() {
        let transport = Arc::new(ScriptedTransport::repeating(Step::ok(json!({"translations": []}))));
        let client = client(transport.clone());

        let params: TranslationParams = serde_json::from_value(json!({
            "translation_id": "131",
            "verse_key": "2:255",
            "fields": "text"
        }))
        .unwrap();
        let response = client.translations().get(&params).await.unwrap();

        assert_eq!(response.message(), "translation executed successfully");
        assert_eq!(transport.paths(), vec!["quran/translations/131"]);
        let query = transport.last_query().unwrap();
        assert_eq!(query.get("verse_key"), Some("2:255"));
        assert_eq!(query.get("fields"), Some("text"));
        assert_eq!(query.get("chapter_number"), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_info_propagates_client_errors() {
        let transport = Arc::new(ScriptedTransport::new(vec![Step::status(404, "{\"status\":404}")]));
        let client = client(transport.clone());

        let params = TranslationInfoParams {
            translation_id: Some("99999".into()),
        };
        let err = client.translations().info(&params).await.unwrap_err();

        assert_eq!(err.status(), Some(404));
        assert_eq!(transport.paths(), vec!["resources/translations/99999/info"]);
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_info_server_error_is_retried() {
        let transport = Arc::new(ScriptedTransport::new(vec![
            server_error(502),
            Step::ok(json!({"translation": {}})),
        ]));
        let client = client(transport.clone());

        let params = TranslationInfoParams {
            translation_id: Some("131".into()),
        };
        client.translations().info(&params).await.unwrap();
        assert_eq!(transport.calls(), 2);
    }
}
