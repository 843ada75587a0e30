// Analysis Service Error Types

use thiserror::Error;

/// Analysis service error
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The action has no content to analyze; rejected before dispatch
    #[error("no target content to analyze")]
    NoTarget,

    /// Another action is already outstanding (single-flight gate)
    #[error("another action is still in progress")]
    Busy,

    /// Connection failed
    #[error("cannot connect to analysis service: {0}")]
    ConnectionFailed(String),

    /// Request timeout
    #[error("analysis service response timeout")]
    Timeout,

    /// API error from the service (non-success status; prefers the
    /// server-supplied message when the body carries one)
    #[error("analysis service error: {0}")]
    ApiError(String),

    /// Success status but the expected flow key is missing from the response
    #[error("invalid response shape: {0}")]
    InvalidResponseShape(String),

    /// JSON parsing error
    #[error("response parse error: {0}")]
    ParseError(String),

    /// Upload endpoint refused the file
    #[error("upload rejected: {0}")]
    UploadRejected(String),
}

impl From<reqwest::Error> for AnalysisError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AnalysisError::Timeout
        } else if err.is_connect() {
            AnalysisError::ConnectionFailed(err.to_string())
        } else {
            AnalysisError::ApiError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(err: serde_json::Error) -> Self {
        AnalysisError::ParseError(err.to_string())
    }
}

impl AnalysisError {
    /// Whether this error is a synchronous precondition failure that must be
    /// reported to the caller instead of being materialized as a result
    /// record.
    pub fn is_precondition(&self) -> bool {
        matches!(self, AnalysisError::NoTarget | AnalysisError::Busy)
    }
}

impl From<AnalysisError> for String {
    fn from(err: AnalysisError) -> Self {
        err.to_string()
    }
}
