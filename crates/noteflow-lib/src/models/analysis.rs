// Analysis data models
// Targets for dispatched actions, the analysis service response envelope,
// and the result records that accumulate in the result log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::annotation::ActionKind;
use crate::utils::id;

/// Maximum characters of source text kept in a result's display preview.
pub const SOURCE_PREVIEW_CHARS: usize = 100;

// ============================================================================
// Action targets
// ============================================================================

/// What a dispatched action applies to: free selected text, or an entire
/// document referenced by name (per-document menu actions).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ActionTarget {
    Text(String),
    Document(String),
}

impl ActionTarget {
    /// The text an action's result is attributed to: the selection itself,
    /// or the document name for whole-document actions.
    pub fn source_text(&self) -> &str {
        match self {
            ActionTarget::Text(text) => text,
            ActionTarget::Document(name) => name,
        }
    }

    /// A target is empty when it holds nothing but whitespace; empty targets
    /// are rejected before any request is dispatched.
    pub fn is_empty(&self) -> bool {
        self.source_text().trim().is_empty()
    }
}

// ============================================================================
// Service response envelope
// ============================================================================

/// Successful response from the analysis service.
///
/// The payload for the requested action is nested under its flow key inside
/// `educational_content`; `topic` and `generated_files` are optional extras
/// some flows attach (e.g. assessment PDF references).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    #[serde(default)]
    pub educational_content: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_files: Option<Value>,
}

// ============================================================================
// Result records
// ============================================================================

/// One settled analysis action, success or failure.
///
/// Exactly one of `payload` / `error` is present; the two constructors are
/// the only way to build a record and it is never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Locally generated; later records always sort after earlier ones.
    pub id: String,
    pub kind: ActionKind,
    /// Bounded preview of the analyzed text, for list display.
    pub source_preview: String,
    /// Full analyzed text.
    pub source_text: String,
    /// Structured flow payload; absent on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
    /// Failure description; present only when `payload` is absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_files: Option<Value>,
    pub created_at: DateTime<Utc>,
}

impl AnalysisResult {
    /// Record a successful settlement.
    pub fn success(
        kind: ActionKind,
        source_text: String,
        payload: Value,
        topic: Option<String>,
        generated_files: Option<Value>,
    ) -> Self {
        Self {
            id: id::result_id(),
            kind,
            source_preview: preview(&source_text),
            source_text,
            payload: Some(payload),
            error: None,
            topic,
            generated_files,
            created_at: Utc::now(),
        }
    }

    /// Record a failed settlement. Failures are first-class visible results,
    /// never swallowed.
    pub fn failure(kind: ActionKind, source_text: String, error: String) -> Self {
        Self {
            id: id::result_id(),
            kind,
            source_preview: preview(&source_text),
            source_text,
            payload: None,
            error: Some(error),
            topic: None,
            generated_files: None,
            created_at: Utc::now(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Truncate text for preview display (handle multi-byte UTF-8 characters).
fn preview(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count > SOURCE_PREVIEW_CHARS {
        let truncated: String = text.chars().take(SOURCE_PREVIEW_CHARS).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_targets() {
        assert!(ActionTarget::Text(String::new()).is_empty());
        assert!(ActionTarget::Text("   \n".to_string()).is_empty());
        assert!(!ActionTarget::Text("Transformer".to_string()).is_empty());
        assert!(ActionTarget::Document("  ".to_string()).is_empty());
        assert!(!ActionTarget::Document("paper.pdf".to_string()).is_empty());
    }

    #[test]
    fn test_preview_truncates_long_text() {
        let text = "x".repeat(250);
        let record = AnalysisResult::failure(ActionKind::Summarize, text.clone(), "boom".to_string());
        assert_eq!(record.source_preview.chars().count(), SOURCE_PREVIEW_CHARS + 3);
        assert!(record.source_preview.ends_with("..."));
        assert_eq!(record.source_text, text);
    }

    #[test]
    fn test_preview_keeps_short_text_verbatim() {
        let record =
            AnalysisResult::failure(ActionKind::Assess, "short".to_string(), "boom".to_string());
        assert_eq!(record.source_preview, "short");
    }

    #[test]
    fn test_preview_counts_chars_not_bytes() {
        let text = "é".repeat(SOURCE_PREVIEW_CHARS);
        let record = AnalysisResult::failure(ActionKind::Assess, text.clone(), "e".to_string());
        assert_eq!(record.source_preview, text);
    }

    #[test]
    fn test_success_and_failure_are_mutually_exclusive() {
        let ok = AnalysisResult::success(
            ActionKind::WebSearch,
            "Transformer architecture".to_string(),
            json!({"sources_found": "3 papers"}),
            Some("transformers".to_string()),
            None,
        );
        assert!(ok.payload.is_some());
        assert!(ok.error.is_none());
        assert!(!ok.is_error());

        let failed = AnalysisResult::failure(
            ActionKind::WebSearch,
            "Transformer architecture".to_string(),
            "connection refused".to_string(),
        );
        assert!(failed.payload.is_none());
        assert!(failed.error.is_some());
        assert!(failed.is_error());
    }

    #[test]
    fn test_analyze_response_deserializes_nested_payload() {
        let raw = json!({
            "educational_content": {
                "web_search": {"sources_found": "arXiv:1706.03762"}
            },
            "topic": "attention"
        });
        let response: AnalyzeResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(
            response.educational_content["web_search"]["sources_found"],
            json!("arXiv:1706.03762")
        );
        assert_eq!(response.topic.as_deref(), Some("attention"));
        assert!(response.generated_files.is_none());
    }

    #[test]
    fn test_analyze_response_tolerates_missing_content() {
        let response: AnalyzeResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.educational_content.is_empty());
    }
}
