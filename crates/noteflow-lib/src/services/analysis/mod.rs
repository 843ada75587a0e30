// Analysis Service Module
// The opaque RPC boundary to the remote analysis backend. The session only
// ever talks to the `AnalysisService` trait; the HTTP implementation lives
// behind it so orchestration can be tested without a network.

pub mod error;
pub mod http;

use async_trait::async_trait;

pub use error::AnalysisError;
pub use http::{HttpAnalysisService, ServiceConfig};

use crate::models::analysis::{ActionTarget, AnalyzeResponse};
use crate::models::annotation::ActionKind;
use crate::models::document::{AskResponse, DocumentInfo, UploadResponse};

/// Remote analysis boundary.
///
/// Implementations receive a content payload and the requested action and
/// return structured content or an error; everything behind the boundary
/// (crews, flows, retrieval) is opaque to this core.
#[async_trait]
pub trait AnalysisService: Send + Sync {
    /// Run an analysis flow against the target content.
    async fn analyze(
        &self,
        kind: ActionKind,
        target: &ActionTarget,
    ) -> Result<AnalyzeResponse, AnalysisError>;

    /// List the documents hosted by the service.
    async fn list_documents(&self) -> Result<Vec<DocumentInfo>, AnalysisError>;

    /// Upload a new document.
    async fn upload_document(
        &self,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadResponse, AnalysisError>;

    /// Ask the QA pipeline a free-form question.
    async fn ask(&self, question: &str) -> Result<AskResponse, AnalysisError>;
}
