//! Juz listing.

use crate::client::QuranClient;
use crate::error::QuranResult;
use crate::pipeline::{Endpoint, Policy, Request};
use quran_core::{EmptyParams, ResourceKind, ResourceResponse};

/// Fetched on every call, failures propagate.
pub const LIST_JUZS: Endpoint = Endpoint {
    operation: "juzs",
    kind: ResourceKind::Juzs,
    policy: Policy::Direct,
    shape: None,
};

pub struct JuzsApi<'a> {
    client: &'a QuranClient,
}

impl<'a> JuzsApi<'a> {
    pub(crate) fn new(client: &'a QuranClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> QuranResult<ResourceResponse> {
        self.client
            .service(ResourceKind::Juzs)
            .execute(&LIST_JUZS, &EmptyParams {}, |_| Request::new("juzs"))
            .await
    }
}
