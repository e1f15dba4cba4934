//! Full-text search.

use crate::client::QuranClient;
use crate::error::QuranResult;
use crate::pipeline::{Endpoint, Policy, Request};
use crate::transport::Query;
use quran_core::{ResourceKind, ResourceResponse, SearchParams};

pub const SEARCH: Endpoint = Endpoint {
    operation: "search",
    kind: ResourceKind::Search,
    policy: Policy::Direct,
    shape: None,
};

pub struct SearchApi<'a> {
    client: &'a QuranClient,
}

impl<'a> SearchApi<'a> {
    pub(crate) fn new(client: &'a QuranClient) -> Self {
        Self { client }
    }

    pub async fn search(&self, params: &SearchParams) -> QuranResult<ResourceResponse> {
        self.client
            .service(ResourceKind::Search)
            .execute(&SEARCH, params, |p| {
                Request::new("search").query(
                    Query::new()
                        .push_opt("q", p.q.as_deref())
                        .push_arg("size", p.size.as_ref())
                        .push_arg("page", p.page.as_ref())
                        .push_opt("language", p.language.as_deref()),
                )
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ScriptedTransport, Step};
    use quran_core::ArgValue;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn test_search_query() {
        let transport = Arc::new(ScriptedTransport::repeating(Step::ok(json!({"search": {}}))));
        let client = QuranClient::builder()
            .transport(transport.clone())
            .build()
            .unwrap();

        let params = SearchParams {
            size: Some(ArgValue::from(5)),
            ..SearchParams::new(" mercy ")
        };
        client.search().search(&params).await.unwrap();

        let query = transport.last_query().unwrap();
        assert_eq!(query.get("q"), Some("mercy"));
        assert_eq!(query.get("size"), Some("5"));
        assert_eq!(query.get("page"), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_query_is_rejected() {
        let transport = Arc::new(ScriptedTransport::repeating(Step::ok(json!({}))));
        let client = QuranClient::builder()
            .transport(transport.clone())
            .build()
            .unwrap();

        let err = client.search().search(&SearchParams::new("   ")).await.unwrap_err();
        assert!(err.is_validation());
        assert_eq!(transport.calls(), 0);
    }
}
