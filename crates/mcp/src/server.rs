// MCP server: newline-delimited JSON-RPC 2.0 over stdio

use crate::protocol::{
    CallToolParams, CallToolResult, InitializeParams, InitializeResult, JsonRpcError,
    JsonRpcRequest, JsonRpcResponse, ListToolsResult, ServerCapabilities, ServerInfo,
    ToolsCapability, PROTOCOL_VERSION,
};
use crate::tools::quran::GENERIC_FAILURE;
use crate::tools::ToolRegistry;
use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;

pub const SERVER_NAME: &str = "Quran.com API";

pub struct McpServer {
    registry: ToolRegistry,
}

impl McpServer {
    pub fn new(registry: ToolRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Serve stdin/stdout until stdin closes.
    pub async fn start(self: Arc<Self>) -> Result<()> {
        tracing::info!(tools = self.registry.len(), "{} MCP server running on stdio", SERVER_NAME);
        self.run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
            .await
    }

    /// Read requests line by line and write one response line per request.
    ///
    /// Each request runs as its own task, so responses may be written out of
    /// order. Returns once the input is exhausted and every in-flight request
    /// has been answered.
    pub async fn run<R, W>(self: Arc<Self>, reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<String>();

        let read = async move {
            let mut lines = reader.lines();
            while let Some(line) = lines.next_line().await.context("Failed to read request")? {
                if line.trim().is_empty() {
                    continue;
                }
                let server = Arc::clone(&self);
                let tx = tx.clone();
                tokio::spawn(async move {
                    let Some(response) = server.handle_line(&line).await else {
                        return;
                    };
                    match serde_json::to_string(&response) {
                        Ok(encoded) => {
                            // The receiver only goes away when the writer failed
                            let _ = tx.send(encoded);
                        }
                        Err(e) => tracing::error!(error = %e, "Failed to encode response"),
                    }
                });
            }
            tracing::debug!("input closed");
            Ok::<_, anyhow::Error>(())
        };

        let write = async {
            while let Some(line) = rx.recv().await {
                writer.write_all(line.as_bytes()).await?;
                writer.write_all(b"\n").await?;
                writer.flush().await?;
            }
            Ok::<_, std::io::Error>(())
        };

        let (read, write) = tokio::join!(read, write);
        read?;
        write.context("Failed to write response")?;
        Ok(())
    }

    /// Handle one raw input line. Returns `None` for notifications.
    pub async fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        let value: Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "Unparsable request line");
                return Some(JsonRpcResponse::error(Value::Null, JsonRpcError::parse_error()));
            }
        };

        let id = value.get("id").cloned().unwrap_or(Value::Null);
        match serde_json::from_value::<JsonRpcRequest>(value) {
            Ok(request) => self.handle_request(request).await,
            Err(_) => Some(JsonRpcResponse::error(id, JsonRpcError::invalid_request())),
        }
    }

    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        let Some(id) = request.id.clone() else {
            tracing::debug!(method = %request.method, "notification");
            return None;
        };

        if request.jsonrpc != "2.0" {
            return Some(JsonRpcResponse::error(id, JsonRpcError::invalid_request()));
        }

        tracing::debug!(method = %request.method, id = %id, "request");
        let params = request.params.unwrap_or(Value::Null);

        let response = match request.method.as_str() {
            "initialize" => JsonRpcResponse::success(id, self.initialize(params)),
            "ping" => JsonRpcResponse::success(id, json!({})),
            "tools/list" => JsonRpcResponse::success(
                id,
                ListToolsResult {
                    tools: self.registry.list_schemas(),
                },
            ),
            "tools/call" => match self.call_tool(params).await {
                Ok(result) => JsonRpcResponse::success(id, result),
                Err(error) => JsonRpcResponse::error(id, error),
            },
            "prompts/list" => JsonRpcResponse::success(id, json!({ "prompts": [] })),
            "prompts/get" => JsonRpcResponse::error(id, prompt_not_found(&params)),
            "resources/list" => JsonRpcResponse::success(id, json!({ "resources": [] })),
            other => JsonRpcResponse::error(id, JsonRpcError::method_not_found(other)),
        };
        Some(response)
    }

    fn initialize(&self, params: Value) -> InitializeResult {
        let params: InitializeParams = serde_json::from_value(params).unwrap_or_default();
        if let Some(client) = &params.client_info {
            tracing::info!(client = %client.name, version = %client.version, "client connected");
        }

        InitializeResult {
            protocol_version: params
                .protocol_version
                .unwrap_or_else(|| PROTOCOL_VERSION.to_string()),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: false,
                }),
                prompts: json!({}),
                resources: json!({}),
            },
            server_info: ServerInfo {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }

    async fn call_tool(&self, params: Value) -> Result<CallToolResult, JsonRpcError> {
        let params: CallToolParams = serde_json::from_value(params)
            .map_err(|e| JsonRpcError::invalid_params(format!("Invalid tools/call params: {}", e)))?;

        let arguments = params
            .arguments
            .ok_or_else(|| JsonRpcError::invalid_params("Arguments are required"))?;

        let tool = self
            .registry
            .get(&params.name)
            .ok_or_else(|| JsonRpcError::unknown_tool(&params.name))?;

        match tool.execute(arguments).await {
            Ok(result) => Ok(result),
            Err(e) => {
                tracing::error!(tool = %params.name, error = ?e, "Tool execution failed");
                Ok(CallToolResult::error(GENERIC_FAILURE))
            }
        }
    }
}

/// No prompts are offered, so every lookup misses.
fn prompt_not_found(params: &Value) -> JsonRpcError {
    let id = params
        .get("id")
        .or_else(|| params.get("name"))
        .map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .unwrap_or_default();
    tracing::debug!(prompt = %id, "prompts/get for unknown prompt");
    JsonRpcError::prompt_not_found(&id)
}
