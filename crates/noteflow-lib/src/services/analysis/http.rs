// HTTP Analysis Service Implementation
//
// Talks to the analysis backend over JSON:
//   POST /process  - run a flow against text or a whole document
//   GET  /files    - list hosted documents
//   POST /upload   - multipart document upload
//   POST /qa       - free-form question answering
// Document bytes are streamed by the viewer directly from /files/<name>;
// this client only builds the URL.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use super::{AnalysisError, AnalysisService};
use crate::models::analysis::{ActionTarget, AnalyzeResponse};
use crate::models::annotation::ActionKind;
use crate::models::document::{AskResponse, DocumentInfo, UploadResponse};

/// Default development endpoint of the analysis backend.
const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000";

/// Default request timeout. Analysis flows fan out to crews and can run for
/// minutes on large selections.
const DEFAULT_TIMEOUT_SECS: u64 = 180;

/// Analysis service connection settings.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ServiceConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }
}

/// HTTP client for the analysis backend.
pub struct HttpAnalysisService {
    config: ServiceConfig,
    client: Client,
}

impl HttpAnalysisService {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn api_url(&self, path: &str) -> String {
        let base = self.config.endpoint.trim_end_matches('/');
        format!("{}{}", base, path)
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.config.timeout_secs)
    }

    /// URL the viewer streams document bytes from.
    pub fn document_url(&self, name: &str) -> String {
        self.api_url(&format!("/files/{}", name))
    }

    /// Turn a non-success response into an error, preferring the
    /// server-supplied message when the body carries one.
    async fn status_error(response: reqwest::Response) -> AnalysisError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if let Ok(server) = serde_json::from_str::<ServerErrorBody>(&body) {
            return AnalysisError::ApiError(server.error);
        }
        AnalysisError::ApiError(format!("analysis service error ({}): {}", status, body))
    }
}

// Wire types

#[derive(Debug, Serialize)]
struct ProcessRequest<'a> {
    action: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    filename: Option<&'a str>,
}

impl<'a> ProcessRequest<'a> {
    fn for_target(kind: ActionKind, target: &'a ActionTarget) -> Self {
        match target {
            ActionTarget::Text(text) => Self {
                action: kind.wire_value(),
                text: Some(text),
                filename: None,
            },
            ActionTarget::Document(name) => Self {
                action: kind.wire_value(),
                text: None,
                filename: Some(name),
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct ServerErrorBody {
    error: String,
}

#[derive(Debug, Deserialize)]
struct ListFilesResponse {
    #[serde(default)]
    files: Vec<DocumentInfo>,
}

#[derive(Debug, Serialize)]
struct AskRequest<'a> {
    question: &'a str,
}

#[async_trait]
impl AnalysisService for HttpAnalysisService {
    async fn analyze(
        &self,
        kind: ActionKind,
        target: &ActionTarget,
    ) -> Result<AnalyzeResponse, AnalysisError> {
        let request = ProcessRequest::for_target(kind, target);
        log::debug!("dispatching '{}' to {}", request.action, self.config.endpoint);

        let response = self
            .client
            .post(self.api_url("/process"))
            .timeout(self.timeout())
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }

        let parsed: AnalyzeResponse = response.json().await?;
        Ok(parsed)
    }

    async fn list_documents(&self) -> Result<Vec<DocumentInfo>, AnalysisError> {
        let response = self
            .client
            .get(self.api_url("/files"))
            .timeout(self.timeout())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }

        let parsed: ListFilesResponse = response.json().await?;
        Ok(parsed.files)
    }

    async fn upload_document(
        &self,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadResponse, AnalysisError> {
        let part = Part::bytes(bytes).file_name(filename.to_string());
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(self.api_url("/upload"))
            .timeout(self.timeout())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::BAD_REQUEST {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ServerErrorBody>(&body)
                .map(|server| server.error)
                .unwrap_or(body);
            return Err(AnalysisError::UploadRejected(message));
        }
        if !status.is_success() {
            return Err(Self::status_error(response).await);
        }

        let parsed: UploadResponse = response.json().await?;
        Ok(parsed)
    }

    async fn ask(&self, question: &str) -> Result<AskResponse, AnalysisError> {
        let response = self
            .client
            .post(self.api_url("/qa"))
            .timeout(self.timeout())
            .json(&AskRequest { question })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }

        let parsed: AskResponse = response.json().await?;
        Ok(parsed)
    }
}
