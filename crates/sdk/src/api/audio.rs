//! Recitation reference lists.

use crate::client::QuranClient;
use crate::error::QuranResult;
use crate::pipeline::{Endpoint, Policy, Request};
use crate::transport::Query;
use quran_core::{EmptyParams, FallbackDataset, LanguageParams, ResourceKind, ResourceResponse};

pub const CHAPTER_RECITERS: Endpoint = Endpoint {
    operation: "chapter-reciters",
    kind: ResourceKind::Audio,
    policy: Policy::Cached {
        key_prefix: "chapter_reciters",
        fallback: FallbackDataset::ChapterReciters,
    },
    shape: None,
};

pub const RECITATION_STYLES: Endpoint = Endpoint {
    operation: "recitation-styles",
    kind: ResourceKind::Audio,
    policy: Policy::Cached {
        key_prefix: "recitation_styles",
        fallback: FallbackDataset::RecitationStyles,
    },
    shape: None,
};

/// Audio API. Both lists share one cache, kept apart by key prefix.
pub struct AudioApi<'a> {
    client: &'a QuranClient,
}

impl<'a> AudioApi<'a> {
    pub(crate) fn new(client: &'a QuranClient) -> Self {
        Self { client }
    }

    pub async fn chapter_reciters(&self, params: &LanguageParams) -> QuranResult<ResourceResponse> {
        self.client
            .service(ResourceKind::Audio)
            .execute(&CHAPTER_RECITERS, params, |p| {
                Request::new("resources/chapter_reciters")
                    .query(Query::new().push_opt("language", p.language.as_deref()))
                    .language(p.language.as_deref())
            })
            .await
    }

    pub async fn recitation_styles(&self) -> QuranResult<ResourceResponse> {
        self.client
            .service(ResourceKind::Audio)
            .execute(&RECITATION_STYLES, &EmptyParams {}, |_| {
                Request::new("resources/recitation_styles")
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{server_error, ScriptedTransport, Step};
    use quran_core::{get_fallback, SourceKind};
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn test_lists_do_not_collide_in_shared_cache() {
        let transport = Arc::new(ScriptedTransport::new(vec![
            Step::ok(json!({"reciters": []})),
            Step::ok(json!({"recitation_styles": {}})),
        ]));
        let client = QuranClient::builder()
            .transport(transport.clone())
            .build()
            .unwrap();

        let reciters = client.audio().chapter_reciters(&LanguageParams::default()).await.unwrap();
        let styles = client.audio().recitation_styles().await.unwrap();
        let styles_again = client.audio().recitation_styles().await.unwrap();

        assert_eq!(reciters.data, json!({"reciters": []}));
        assert_eq!(styles.data, json!({"recitation_styles": {}}));
        assert_eq!(styles_again.source, SourceKind::Cache);
        assert_eq!(
            transport.paths(),
            vec!["resources/chapter_reciters", "resources/recitation_styles"]
        );
        assert_eq!(client.service(ResourceKind::Audio).cache().size(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_styles_fall_back() {
        let transport = Arc::new(ScriptedTransport::repeating(server_error(503)));
        let client = QuranClient::builder()
            .transport(transport.clone())
            .build()
            .unwrap();

        let response = client.audio().recitation_styles().await.unwrap();
        assert_eq!(
            response.message(),
            "recitation-styles executed with mock data (API unavailable)"
        );
        assert_eq!(response.data, get_fallback(FallbackDataset::RecitationStyles));
    }
}
