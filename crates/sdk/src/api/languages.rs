//! Language reference list.

use crate::client::QuranClient;
use crate::error::QuranResult;
use crate::pipeline::{Endpoint, Policy, Request};
use crate::transport::Query;
use quran_core::{FallbackDataset, LanguageParams, ResourceKind, ResourceResponse};

pub const LIST_LANGUAGES: Endpoint = Endpoint {
    operation: "languages",
    kind: ResourceKind::Languages,
    policy: Policy::Cached {
        key_prefix: "languages",
        fallback: FallbackDataset::Languages,
    },
    shape: None,
};

pub struct LanguagesApi<'a> {
    client: &'a QuranClient,
}

impl<'a> LanguagesApi<'a> {
    pub(crate) fn new(client: &'a QuranClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, params: &LanguageParams) -> QuranResult<ResourceResponse> {
        self.client
            .service(ResourceKind::Languages)
            .execute(&LIST_LANGUAGES, params, |p| {
                Request::new("resources/languages")
                    .query(Query::new().push_opt("language", p.language.as_deref()))
                    .language(p.language.as_deref())
            })
            .await
    }
}
