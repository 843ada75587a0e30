// Annotation data models
// Annotations are user-created markers anchored to a document region,
// tagged with the intent chosen when they were created.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::id;

// ============================================================================
// Action kinds
// ============================================================================

/// The fixed set of intents a user can attach to selected content.
///
/// Every kind except `AnnotateOnly` triggers a remote analysis flow;
/// `AnnotateOnly` only ever creates or updates a local annotation record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    AnnotateOnly,
    WebSearch,
    KnowledgeExplain,
    HybridAnalyze,
    Summarize,
    Assess,
}

impl ActionKind {
    /// The key the analysis service nests this kind's payload under, inside
    /// the `educational_content` object of a successful response.
    ///
    /// `AnnotateOnly` has no flow and never produces a response.
    pub fn flow_key(&self) -> Option<&'static str> {
        match self {
            ActionKind::AnnotateOnly => None,
            ActionKind::WebSearch => Some("web_search"),
            ActionKind::KnowledgeExplain => Some("llm_knowledge"),
            ActionKind::HybridAnalyze => Some("hybrid_retrieval"),
            ActionKind::Summarize => Some("summary"),
            ActionKind::Assess => Some("assessment"),
        }
    }

    /// The action value sent to the analysis service.
    pub fn wire_value(&self) -> &'static str {
        match self {
            ActionKind::AnnotateOnly => "highlight",
            ActionKind::WebSearch => "search",
            ActionKind::KnowledgeExplain => "explain",
            ActionKind::HybridAnalyze => "analyze",
            ActionKind::Summarize => "summarize",
            ActionKind::Assess => "assess",
        }
    }

    /// Display glyph shown next to annotations and results of this kind.
    pub fn glyph(&self) -> &'static str {
        match self {
            ActionKind::AnnotateOnly => "💡",
            ActionKind::WebSearch => "🔍",
            ActionKind::KnowledgeExplain => "🧠",
            ActionKind::HybridAnalyze => "⚡",
            ActionKind::Summarize => "📝",
            ActionKind::Assess => "✅",
        }
    }

    /// Whether this kind dispatches a remote analysis call.
    pub fn is_remote(&self) -> bool {
        !matches!(self, ActionKind::AnnotateOnly)
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.wire_value())
    }
}

impl std::str::FromStr for ActionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "highlight" | "annotate_only" => Ok(ActionKind::AnnotateOnly),
            "search" | "web_search" => Ok(ActionKind::WebSearch),
            "explain" | "knowledge_explain" => Ok(ActionKind::KnowledgeExplain),
            "analyze" | "hybrid_analyze" => Ok(ActionKind::HybridAnalyze),
            "summarize" => Ok(ActionKind::Summarize),
            "assess" => Ok(ActionKind::Assess),
            _ => Err(format!("Invalid action kind: {}", s)),
        }
    }
}

// ============================================================================
// Annotation records
// ============================================================================

/// Intent tag attached to an annotation: the chosen action kind plus the
/// glyph it is rendered with. Mutable after creation (relabel).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationLabel {
    pub kind: ActionKind,
    pub glyph: String,
}

impl AnnotationLabel {
    pub fn for_kind(kind: ActionKind) -> Self {
        Self {
            kind,
            glyph: kind.glyph().to_string(),
        }
    }
}

/// Captured payload of an annotation: extracted text, a captured image
/// reference, or both.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl AnnotationContent {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            image: None,
        }
    }

    /// Merge a partial patch into this content: `Some` fields overwrite,
    /// `None` fields leave the existing value untouched.
    pub fn merge(&mut self, patch: &AnnotationContent) {
        if let Some(text) = &patch.text {
            self.text = Some(text.clone());
        }
        if let Some(image) = &patch.image {
            self.image = Some(image.clone());
        }
    }
}

/// A user-created marker anchored to a document region.
///
/// `position` is viewer geometry (page-relative rectangles or a text range).
/// It is opaque to this core and passed through unmodified; patches are
/// shallow-merged the way the viewer emits them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    /// Locally generated, immutable once assigned.
    pub id: String,
    pub position: Value,
    pub content: AnnotationContent,
    pub label: AnnotationLabel,
}

impl Annotation {
    pub fn new(partial: NewAnnotation) -> Self {
        Self {
            id: id::annotation_id(),
            position: partial.position,
            content: partial.content,
            label: AnnotationLabel::for_kind(partial.kind),
        }
    }

    /// Shallow-merge a position patch: keys present in the patch overwrite
    /// keys in the existing geometry. A non-object patch replaces wholesale.
    pub fn apply_position_patch(&mut self, patch: &Value) {
        if let (Some(existing), Some(patch)) = (self.position.as_object_mut(), patch.as_object()) {
            for (key, value) in patch {
                existing.insert(key.clone(), value.clone());
            }
            return;
        }
        if !patch.is_null() {
            self.position = patch.clone();
        }
    }
}

/// Input for creating an annotation; the store assigns the id and builds the
/// label from the chosen kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAnnotation {
    pub position: Value,
    pub content: AnnotationContent,
    pub kind: ActionKind,
}
