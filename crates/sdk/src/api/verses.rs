//! Verse (ayah) endpoints. None of these are cached.

use crate::client::QuranClient;
use crate::error::QuranResult;
use crate::pipeline::{Endpoint, Policy, Request};
use crate::transport::Query;
use quran_core::{
    ArgValue, Pagination, RandomVerseParams, ResourceKind, ResourceResponse, VerseByKeyParams,
    VerseOptions, VersesByChapterParams, VersesByHizbParams, VersesByJuzParams,
    VersesByPageParams, VersesByRubElHizbParams,
};

const fn direct(operation: &'static str) -> Endpoint {
    Endpoint {
        operation,
        kind: ResourceKind::Verses,
        policy: Policy::Direct,
        shape: None,
    }
}

pub const BY_CHAPTER: Endpoint = direct("verses-by_chapter_number");
pub const BY_PAGE: Endpoint = direct("verses-by_page_number");
pub const BY_JUZ: Endpoint = direct("verses-by_juz_number");
pub const BY_HIZB: Endpoint = direct("verses-by_hizb_number");
pub const BY_RUB_EL_HIZB: Endpoint = direct("verses-by_rub_el_hizb_number");
pub const BY_KEY: Endpoint = direct("verses-by_verse_key");
pub const RANDOM: Endpoint = direct("random_verse");

/// Query forwarded by every verse listing.
fn options_query(options: &VerseOptions) -> Query {
    Query::new()
        .push_opt("language", options.language.as_deref())
        .push_arg("words", options.words.as_ref())
        .push_opt("translations", options.translations.as_deref())
        .push_arg("audio", options.audio.as_ref())
        .push_opt("tafsirs", options.tafsirs.as_deref())
        .push_opt("word_fields", options.word_fields.as_deref())
        .push_opt("translation_fields", options.translation_fields.as_deref())
        .push_opt("fields", options.fields.as_deref())
}

fn paged_query(options: &VerseOptions, pagination: &Pagination) -> Query {
    options_query(options)
        .push_arg("page", pagination.page.as_ref())
        .push_arg("per_page", pagination.per_page.as_ref())
}

fn segment(value: Option<&ArgValue>) -> String {
    value.map(ArgValue::to_query_value).unwrap_or_default()
}

/// Verses API.
pub struct VersesApi<'a> {
    client: &'a QuranClient,
}

impl<'a> VersesApi<'a> {
    pub(crate) fn new(client: &'a QuranClient) -> Self {
        Self { client }
    }

    pub async fn by_chapter(&self, params: &VersesByChapterParams) -> QuranResult<ResourceResponse> {
        self.client
            .service(ResourceKind::Verses)
            .execute(&BY_CHAPTER, params, |p| {
                Request::new(format!("verses/by_chapter/{}", segment(p.chapter_number.as_ref())))
                    .query(paged_query(&p.options, &p.pagination))
            })
            .await
    }

    pub async fn by_page(&self, params: &VersesByPageParams) -> QuranResult<ResourceResponse> {
        self.client
            .service(ResourceKind::Verses)
            .execute(&BY_PAGE, params, |p| {
                Request::new(format!("verses/by_page/{}", segment(p.page_number.as_ref())))
                    .query(paged_query(&p.options, &p.pagination))
            })
            .await
    }

    pub async fn by_juz(&self, params: &VersesByJuzParams) -> QuranResult<ResourceResponse> {
        self.client
            .service(ResourceKind::Verses)
            .execute(&BY_JUZ, params, |p| {
                Request::new(format!("verses/by_juz/{}", segment(p.juz_number.as_ref())))
                    .query(paged_query(&p.options, &p.pagination))
            })
            .await
    }

    pub async fn by_hizb(&self, params: &VersesByHizbParams) -> QuranResult<ResourceResponse> {
        self.client
            .service(ResourceKind::Verses)
            .execute(&BY_HIZB, params, |p| {
                Request::new(format!("verses/by_hizb/{}", segment(p.hizb_number.as_ref())))
                    .query(paged_query(&p.options, &p.pagination))
            })
            .await
    }

    /// Rub el Hizb listings are not paginated upstream.
    pub async fn by_rub_el_hizb(
        &self,
        params: &VersesByRubElHizbParams,
    ) -> QuranResult<ResourceResponse> {
        self.client
            .service(ResourceKind::Verses)
            .execute(&BY_RUB_EL_HIZB, params, |p| {
                Request::new(format!(
                    "verses/by_rub/{}",
                    segment(p.rub_el_hizb_number.as_ref())
                ))
                .query(options_query(&p.options))
            })
            .await
    }

    /// Get one verse by its `chapter:verse` key.
    pub async fn by_key(&self, params: &VerseByKeyParams) -> QuranResult<ResourceResponse> {
        self.client
            .service(ResourceKind::Verses)
            .execute(&BY_KEY, params, |p| {
                Request::new(format!(
                    "verses/by_key/{}",
                    p.verse_key.as_deref().map(str::trim).unwrap_or_default()
                ))
                .query(options_query(&p.options))
            })
            .await
    }

    pub async fn random(&self, params: &RandomVerseParams) -> QuranResult<ResourceResponse> {
        self.client
            .service(ResourceKind::Verses)
            .execute(&RANDOM, params, |p| {
                Request::new("verses/random").query(options_query(&p.options))
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{server_error, ScriptedTransport, Step};
    use crate::QuranError;
    use serde_json::json;
    use std::sync::Arc;

    fn client(transport: Arc<ScriptedTransport>) -> QuranClient {
        QuranClient::builder().transport(transport).build().unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_by_chapter_forwards_options_and_pagination() {
        let transport = Arc::new(ScriptedTransport::repeating(Step::ok(json!({"verses": []}))));
        let client = client(transport.clone());

        let params: VersesByChapterParams = serde_json::from_value(json!({
            "chapter_number": "2",
            "language": "en",
            "words": true,
            "translations": "131,20",
            "per_page": 10
        }))
        .unwrap();

        let response = client.verses().by_chapter(&params).await.unwrap();
        assert_eq!(response.message(), "verses-by_chapter_number executed successfully");

        let query = transport.last_query().unwrap();
        assert_eq!(transport.paths(), vec!["verses/by_chapter/2"]);
        assert_eq!(query.get("language"), Some("en"));
        assert_eq!(query.get("words"), Some("true"));
        assert_eq!(query.get("translations"), Some("131,20"));
        assert_eq!(query.get("per_page"), Some("10"));
        // Absent options are omitted, not sent empty
        assert_eq!(query.get("audio"), None);
        assert_eq!(query.get("page"), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_listing_paths() {
        let transport = Arc::new(ScriptedTransport::repeating(Step::ok(json!({}))));
        let client = client(transport.clone());
        let verses = client.verses();

        let page: VersesByPageParams =
            serde_json::from_value(json!({"page_number": 604})).unwrap();
        let juz: VersesByJuzParams = serde_json::from_value(json!({"juz_number": 30})).unwrap();
        let hizb: VersesByHizbParams = serde_json::from_value(json!({"hizb_number": 1})).unwrap();
        let rub: VersesByRubElHizbParams =
            serde_json::from_value(json!({"rub_el_hizb_number": 240})).unwrap();

        verses.by_page(&page).await.unwrap();
        verses.by_juz(&juz).await.unwrap();
        verses.by_hizb(&hizb).await.unwrap();
        verses.by_rub_el_hizb(&rub).await.unwrap();
        verses.random(&RandomVerseParams::default()).await.unwrap();

        assert_eq!(
            transport.paths(),
            vec![
                "verses/by_page/604",
                "verses/by_juz/30",
                "verses/by_hizb/1",
                "verses/by_rub/240",
                "verses/random"
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_out_of_range_juz_is_rejected() {
        let transport = Arc::new(ScriptedTransport::repeating(Step::ok(json!({}))));
        let client = client(transport.clone());

        let juz: VersesByJuzParams = serde_json::from_value(json!({"juz_number": 31})).unwrap();
        let err = client.verses().by_juz(&juz).await.unwrap_err();

        assert!(err.is_validation());
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_by_key_failure_is_not_masked() {
        let transport = Arc::new(ScriptedTransport::repeating(server_error(500)));
        let client = client(transport.clone());

        let err = client
            .verses()
            .by_key(&VerseByKeyParams::new("1:1"))
            .await
            .unwrap_err();

        assert!(matches!(err, QuranError::Transport(_)));
        assert_eq!(err.status(), Some(500));
        assert_eq!(transport.calls(), 4);
    }
}
