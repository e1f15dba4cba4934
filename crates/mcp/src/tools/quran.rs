// One MCP tool per Quran.com operation

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{schemas, Tool, ToolRegistry};
use anyhow::{Context, Result};
use quran_sdk::{Operation, QuranClient, QuranError};
use serde_json::Value;
use std::sync::Arc;

/// Shown for failures whose detail stays in the logs.
pub const GENERIC_FAILURE: &str =
    "An error occurred processing your request. Please try again later.";

/// Exposes a single client operation as a tool
pub struct ResourceTool {
    operation: Operation,
    client: Arc<QuranClient>,
}

impl ResourceTool {
    pub fn new(operation: Operation, client: Arc<QuranClient>) -> Self {
        Self { operation, client }
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }
}

#[async_trait::async_trait]
impl Tool for ResourceTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: self.operation.name().to_string(),
            description: schemas::description(self.operation).to_string(),
            input_schema: schemas::input_schema(self.operation),
            examples: schemas::examples(self.operation),
        }
    }

    async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
        let tool = self.operation.name();
        tracing::debug!(tool, arguments = %arguments, "tool request");

        match self.client.call(self.operation, arguments).await {
            Ok(response) => {
                let text = serde_json::to_string_pretty(&response.envelope())
                    .with_context(|| format!("Failed to serialize {} response", tool))?;
                tracing::debug!(tool, message = %response.message(), "tool response");
                Ok(CallToolResult::text(text))
            }
            Err(err) => Ok(render_error(tool, &err)),
        }
    }
}

/// Turn a failed operation into an `isError` result.
///
/// Validation failures name the offending fields. Transport failures only
/// reveal the upstream status. Everything else gets a generic message.
pub fn render_error(tool: &str, err: &QuranError) -> CallToolResult {
    match err {
        QuranError::Validation(e) => {
            tracing::debug!(tool, error = %e, "invalid arguments");
            CallToolResult::error(e.to_string())
        }
        QuranError::Transport(e) => {
            tracing::error!(tool, error = %e, "upstream request failed");
            match e.status {
                Some(status) => {
                    CallToolResult::error(format!("Error: API request failed (Status: {})", status))
                }
                None => CallToolResult::error(
                    "Error: API request failed - Connection failed or timed out",
                ),
            }
        }
        other => {
            tracing::error!(tool, error = %other, "tool failed");
            CallToolResult::error(GENERIC_FAILURE)
        }
    }
}

/// Register a tool for every operation of `client`
pub fn register_quran_tools(registry: &mut ToolRegistry, client: Arc<QuranClient>) {
    for operation in Operation::ALL {
        registry.register(Arc::new(ResourceTool::new(operation, client.clone())));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quran_sdk::{RetryConfig, TransportError, ValidationError};
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> Arc<QuranClient> {
        Arc::new(
            QuranClient::builder()
                .base_url(server.uri())
                .retry_config(RetryConfig::no_retry())
                .build()
                .unwrap(),
        )
    }

    #[test]
    fn test_render_error_variants() {
        let result = render_error("search", &ValidationError::single("q", "Required").into());
        assert!(result.is_error());
        assert_eq!(result.first_text(), Some("Validation error: q: Required"));

        let err = QuranError::Transport(TransportError {
            status: Some(502),
            message: "API request failed: ... - <html>secret proxy page</html>".into(),
        });
        let result = render_error("juzs", &err);
        assert_eq!(
            result.first_text(),
            Some("Error: API request failed (Status: 502)")
        );

        let result = render_error("juzs", &QuranError::Unexpected("boom".into()));
        assert_eq!(result.first_text(), Some(GENERIC_FAILURE));
    }

    #[test]
    fn test_registers_every_operation() {
        let client = Arc::new(QuranClient::builder().build().unwrap());
        let mut registry = ToolRegistry::new();
        register_quran_tools(&mut registry, client);

        assert_eq!(registry.len(), 21);
        for op in Operation::ALL {
            assert!(registry.contains(op.name()), "{op}");
        }
    }

    #[tokio::test]
    async fn test_success_is_pretty_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/juzs"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"juzs": [{"id": 1}]})))
            .mount(&server)
            .await;

        let tool = ResourceTool::new(Operation::Juzs, client_for(&server).await);
        let result = tool.execute(json!({})).await.unwrap();

        assert!(!result.is_error());
        let text = result.first_text().unwrap();
        assert!(text.contains('\n'));
        let envelope: Value = serde_json::from_str(text).unwrap();
        assert_eq!(
            envelope,
            json!({
                "success": true,
                "message": "juzs executed successfully",
                "data": {"juzs": [{"id": 1}]}
            })
        );
    }

    #[tokio::test]
    async fn test_validation_failure_is_tool_error() {
        let server = MockServer::start().await;
        let tool = ResourceTool::new(Operation::GetChapter, client_for(&server).await);

        let result = tool
            .execute(json!({"language": "en", "id": "abc"}))
            .await
            .unwrap();

        assert!(result.is_error());
        assert_eq!(
            result.first_text(),
            Some("Validation error: id: Chapter ID must be a positive integer")
        );
        assert!(server.received_requests().await.unwrap().is_empty());
    }
}
