use serde::{Deserialize, Serialize};

/// Raw JSON body returned by the upstream API (or a fallback table).
pub type Payload = serde_json::Value;

/// Category of upstream data served by one resource service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Chapters,
    Verses,
    Audio,
    Translations,
    Tafsirs,
    Languages,
    Juzs,
    Search,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 8] = [
        ResourceKind::Chapters,
        ResourceKind::Verses,
        ResourceKind::Audio,
        ResourceKind::Translations,
        ResourceKind::Tafsirs,
        ResourceKind::Languages,
        ResourceKind::Juzs,
        ResourceKind::Search,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Chapters => "chapters",
            ResourceKind::Verses => "verses",
            ResourceKind::Audio => "audio",
            ResourceKind::Translations => "translations",
            ResourceKind::Tafsirs => "tafsirs",
            ResourceKind::Languages => "languages",
            ResourceKind::Juzs => "juzs",
            ResourceKind::Search => "search",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a response was served from the fallback tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    /// Retries were exhausted or the upstream rejected the call
    ApiUnavailable,
    /// Anything else went wrong while producing the live response
    ErrorOccurred,
}

impl FallbackReason {
    pub fn describe(&self) -> &'static str {
        match self {
            FallbackReason::ApiUnavailable => "API unavailable",
            FallbackReason::ErrorOccurred => "error occurred",
        }
    }
}

/// Where the payload of a response came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "reason", rename_all = "snake_case")]
pub enum SourceKind {
    Api,
    Cache,
    Fallback(FallbackReason),
}

impl SourceKind {
    pub fn is_degraded(&self) -> bool {
        matches!(self, SourceKind::Fallback(_))
    }
}

/// Result of one resource operation, built once and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceResponse {
    pub success: bool,
    pub operation: &'static str,
    pub source: SourceKind,
    pub data: Payload,
}

impl ResourceResponse {
    pub fn new(operation: &'static str, source: SourceKind, data: Payload) -> Self {
        Self {
            success: true,
            operation,
            source,
            data,
        }
    }

    /// Human-readable status line telling callers which source produced the data.
    pub fn message(&self) -> String {
        match self.source {
            SourceKind::Api => format!("{} executed successfully", self.operation),
            SourceKind::Cache => format!("{} executed successfully (from cache)", self.operation),
            SourceKind::Fallback(reason) => format!(
                "{} executed with mock data ({})",
                self.operation,
                reason.describe()
            ),
        }
    }

    /// The `{ success, message, data }` envelope handed to callers.
    pub fn envelope(&self) -> ResponseEnvelope<'_> {
        ResponseEnvelope {
            success: self.success,
            message: self.message(),
            data: &self.data,
        }
    }
}

/// Serialized form of a [`ResourceResponse`]
#[derive(Debug, Serialize)]
pub struct ResponseEnvelope<'a> {
    pub success: bool,
    pub message: String,
    pub data: &'a Payload,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_per_source() {
        let api = ResourceResponse::new("list-chapters", SourceKind::Api, json!({}));
        assert_eq!(api.message(), "list-chapters executed successfully");

        let cached = ResourceResponse::new("list-chapters", SourceKind::Cache, json!({}));
        assert_eq!(
            cached.message(),
            "list-chapters executed successfully (from cache)"
        );

        let degraded = ResourceResponse::new(
            "languages",
            SourceKind::Fallback(FallbackReason::ApiUnavailable),
            json!({}),
        );
        assert_eq!(
            degraded.message(),
            "languages executed with mock data (API unavailable)"
        );
        assert!(degraded.source.is_degraded());
    }

    #[test]
    fn test_envelope_serialization() {
        let response = ResourceResponse::new(
            "tafsirs",
            SourceKind::Fallback(FallbackReason::ErrorOccurred),
            json!({"tafsirs": []}),
        );

        let value = serde_json::to_value(response.envelope()).unwrap();
        assert_eq!(value["success"], json!(true));
        assert_eq!(
            value["message"],
            json!("tafsirs executed with mock data (error occurred)")
        );
        assert_eq!(value["data"], json!({"tafsirs": []}));
    }

    #[test]
    fn test_resource_kind_names() {
        let names: Vec<_> = ResourceKind::ALL.iter().map(|k| k.to_string()).collect();
        assert_eq!(
            names,
            vec!["chapters", "verses", "audio", "translations", "tafsirs", "languages", "juzs", "search"]
        );
    }
}
