// Document data models
// Opaque handles for the documents the analysis service hosts; the viewer
// streams the bytes itself, this core only tracks the selection.

use serde::{Deserialize, Serialize};

/// A document available on the analysis service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentInfo {
    /// Server-side document name, unique per service.
    #[serde(alias = "filename")]
    pub name: String,
    #[serde(default, alias = "file_type", skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

impl DocumentInfo {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file_type: None,
            size: None,
        }
    }
}

/// Response from the upload endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub message: String,
    pub filename: String,
    #[serde(default)]
    pub file_type: Option<String>,
}

/// Response from the QA endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
}
