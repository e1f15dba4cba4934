//! Chapter (surah) endpoints.

use crate::client::QuranClient;
use crate::error::QuranResult;
use crate::pipeline::{Endpoint, Policy, Request};
use crate::transport::Query;
use quran_core::{
    ArgValue, ChapterInfoParams, FallbackDataset, GetChapterParams, ListChaptersParams, Payload,
    ResourceKind, ResourceResponse,
};
use serde_json::json;

pub const LIST_CHAPTERS: Endpoint = Endpoint {
    operation: "list-chapters",
    kind: ResourceKind::Chapters,
    policy: Policy::Cached {
        key_prefix: "chapters",
        fallback: FallbackDataset::Chapters,
    },
    shape: Some(reduce_chapters),
};

pub const GET_CHAPTER: Endpoint = Endpoint {
    operation: "GET-chapter",
    kind: ResourceKind::Chapters,
    policy: Policy::Direct,
    shape: None,
};

pub const CHAPTER_INFO: Endpoint = Endpoint {
    operation: "info",
    kind: ResourceKind::Chapters,
    policy: Policy::Direct,
    shape: None,
};

/// Chapters API.
pub struct ChaptersApi<'a> {
    client: &'a QuranClient,
}

impl<'a> ChaptersApi<'a> {
    pub(crate) fn new(client: &'a QuranClient) -> Self {
        Self { client }
    }

    /// List all 114 chapters, reduced to their names.
    pub async fn list(&self, params: &ListChaptersParams) -> QuranResult<ResourceResponse> {
        self.client
            .service(ResourceKind::Chapters)
            .execute(&LIST_CHAPTERS, params, |p| {
                Request::new("chapters")
                    .query(Query::new().push_opt("language", p.language.as_deref()))
                    .language(p.language.as_deref())
            })
            .await
    }

    /// Get one chapter, the first when no id is given.
    pub async fn get(&self, params: &GetChapterParams) -> QuranResult<ResourceResponse> {
        self.client
            .service(ResourceKind::Chapters)
            .execute(&GET_CHAPTER, params, |p| {
                Request::new(format!("chapters/{}", chapter_segment(p.id.as_ref())))
                    .query(Query::new().push_opt("language", p.language.as_deref()))
            })
            .await
    }

    /// Get the descriptive info text of a chapter.
    pub async fn info(&self, params: &ChapterInfoParams) -> QuranResult<ResourceResponse> {
        self.client
            .service(ResourceKind::Chapters)
            .execute(&CHAPTER_INFO, params, |p| {
                Request::new(format!(
                    "chapters/{}/info",
                    chapter_segment(p.chapter_id.as_ref())
                ))
                .query(Query::new().push_opt("language", p.language.as_deref()))
            })
            .await
    }
}

fn chapter_segment(id: Option<&ArgValue>) -> String {
    id.map(|v| v.to_query_value())
        .unwrap_or_else(|| "1".to_string())
}

/// Keep only the fields callers need from the chapter list.
pub fn reduce_chapters(payload: Payload) -> Result<Payload, String> {
    let chapters = payload
        .get("chapters")
        .and_then(Payload::as_array)
        .ok_or_else(|| "chapter list response has no chapters array".to_string())?;

    let reduced: Vec<Payload> = chapters
        .iter()
        .map(|chapter| {
            json!({
                "id": chapter.get("id").cloned().unwrap_or(Payload::Null),
                "name_arabic": chapter.get("name_arabic").cloned().unwrap_or(Payload::Null),
                "name_simple": chapter.get("name_simple").cloned().unwrap_or(Payload::Null),
                "translated_name": {
                    "name": chapter
                        .pointer("/translated_name/name")
                        .and_then(Payload::as_str)
                        .unwrap_or_default()
                }
            })
        })
        .collect();

    Ok(json!({ "chapters": reduced }))
}
