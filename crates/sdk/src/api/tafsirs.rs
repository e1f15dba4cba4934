//! Tafsir (commentary) endpoints.

use crate::api::translations::scope_query;
use crate::client::QuranClient;
use crate::error::QuranResult;
use crate::pipeline::{Endpoint, Policy, Request};
use crate::transport::Query;
use quran_core::{
    FallbackDataset, LanguageParams, ResourceKind, ResourceResponse, TafsirInfoParams,
    TafsirParams,
};

pub const LIST_TAFSIRS: Endpoint = Endpoint {
    operation: "tafsirs",
    kind: ResourceKind::Tafsirs,
    policy: Policy::Cached {
        key_prefix: "tafsirs",
        fallback: FallbackDataset::Tafsirs,
    },
    shape: None,
};

pub const TAFSIR_INFO: Endpoint = Endpoint {
    operation: "tafsir-info",
    kind: ResourceKind::Tafsirs,
    policy: Policy::Direct,
    shape: None,
};

pub const TAFSIR: Endpoint = Endpoint {
    operation: "tafsir",
    kind: ResourceKind::Tafsirs,
    policy: Policy::Direct,
    shape: None,
};

/// Tafsirs API.
pub struct TafsirsApi<'a> {
    client: &'a QuranClient,
}

impl<'a> TafsirsApi<'a> {
    pub(crate) fn new(client: &'a QuranClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, params: &LanguageParams) -> QuranResult<ResourceResponse> {
        self.client
            .service(ResourceKind::Tafsirs)
            .execute(&LIST_TAFSIRS, params, |p| {
                Request::new("resources/tafsirs")
                    .query(Query::new().push_opt("language", p.language.as_deref()))
                    .language(p.language.as_deref())
            })
            .await
    }

    pub async fn info(&self, params: &TafsirInfoParams) -> QuranResult<ResourceResponse> {
        self.client
            .service(ResourceKind::Tafsirs)
            .execute(&TAFSIR_INFO, params, |p| {
                Request::new(format!(
                    "resources/tafsirs/{}/info",
                    p.tafsir_id.as_deref().map(str::trim).unwrap_or_default()
                ))
            })
            .await
    }

    /// Get the commentary text of one tafsir, optionally narrowed to a scope.
    pub async fn get(&self, params: &TafsirParams) -> QuranResult<ResourceResponse> {
        self.client
            .service(ResourceKind::Tafsirs)
            .execute(&TAFSIR, params, |p| {
                Request::new(format!(
                    "quran/tafsirs/{}",
                    p.tafsir_id.as_deref().map(str::trim).unwrap_or_default()
                ))
                .query(scope_query(&p.scope))
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ScriptedTransport, Step};
    use quran_core::{get_fallback, FallbackReason, SourceKind};
    use serde_json::json;
    use std::sync::Arc;

    fn client(transport: Arc<ScriptedTransport>) -> QuranClient {
        QuranClient::builder().transport(transport).build().unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_list_degrades_on_unreadable_body() {
        let transport = Arc::new(ScriptedTransport::repeating(Step::Fail(
            crate::error::AttemptError::Decode("expected value at line 1".into()),
        )));
        let client = client(transport.clone());

        let response = client.tafsirs().list(&LanguageParams::new("en")).await.unwrap();

        assert_eq!(
            response.source,
            SourceKind::Fallback(FallbackReason::ErrorOccurred)
        );
        assert_eq!(
            response.message(),
            "tafsirs executed with mock data (error occurred)"
        );
        assert_eq!(response.data, get_fallback(FallbackDataset::Tafsirs));
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_text_scope_by_chapter() {
        let transport = Arc::new(ScriptedTransport::repeating(Step::ok(json!({"tafsirs": []}))));
        let client = client(transport.clone());

        let params: TafsirParams =
            serde_json::from_value(json!({"tafsir_id": "169", "chapter_number": 1})).unwrap();
        client.tafsirs().get(&params).await.unwrap();

        assert_eq!(transport.paths(), vec!["quran/tafsirs/169"]);
        assert_eq!(
            transport.last_query().unwrap().get("chapter_number"),
            Some("1")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_info_requires_id() {
        let transport = Arc::new(ScriptedTransport::repeating(Step::ok(json!({}))));
        let client = client(transport.clone());

        let err = client
            .tafsirs()
            .info(&TafsirInfoParams::default())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Validation error: tafsir_id: Required");
        assert_eq!(transport.calls(), 0);
    }
}
