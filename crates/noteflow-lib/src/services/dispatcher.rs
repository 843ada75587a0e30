// Action Dispatcher
// Turns a user intent into a single outbound analysis request and
// normalizes its settlement, success or failure, into one result record.

use std::sync::Arc;

use crate::models::analysis::{ActionTarget, AnalysisResult};
use crate::models::annotation::ActionKind;
use crate::services::analysis::{AnalysisError, AnalysisService};

/// Dispatches analysis actions against the service boundary.
pub struct ActionDispatcher {
    service: Arc<dyn AnalysisService>,
}

impl ActionDispatcher {
    pub fn new(service: Arc<dyn AnalysisService>) -> Self {
        Self { service }
    }

    /// Reject empty targets before any request leaves the client.
    pub fn validate_target(target: &ActionTarget) -> Result<(), AnalysisError> {
        if target.is_empty() {
            return Err(AnalysisError::NoTarget);
        }
        Ok(())
    }

    /// Issue one request and settle it into a result record.
    ///
    /// Every settlement produces exactly one record: the flow payload on
    /// success, a failure record otherwise. `Err` is returned only for
    /// precondition violations, before anything was dispatched.
    pub async fn dispatch(
        &self,
        kind: ActionKind,
        target: &ActionTarget,
    ) -> Result<AnalysisResult, AnalysisError> {
        // Annotate-only never reaches the service; dispatching it is a
        // caller bug surfaced as the same precondition failure.
        let flow_key = kind.flow_key().ok_or(AnalysisError::NoTarget)?;
        Self::validate_target(target)?;

        let source_text = target.source_text().to_string();

        let record = match self.service.analyze(kind, target).await {
            Ok(mut response) => match response.educational_content.remove(flow_key) {
                Some(payload) => {
                    log::info!("action '{}' settled with '{}' payload", kind, flow_key);
                    AnalysisResult::success(
                        kind,
                        source_text,
                        payload,
                        response.topic,
                        response.generated_files,
                    )
                }
                None => {
                    // Success status but the contract key is absent: a
                    // protocol violation surfaced as a visible result.
                    log::warn!("action '{}' response is missing flow key '{}'", kind, flow_key);
                    let error = AnalysisError::InvalidResponseShape(format!(
                        "expected '{}' in response for action '{}'",
                        flow_key, kind
                    ));
                    AnalysisResult::failure(kind, source_text, error.to_string())
                }
            },
            Err(err) => {
                log::warn!("action '{}' failed: {}", kind, err);
                AnalysisResult::failure(kind, source_text, err.to_string())
            }
        };

        Ok(record)
    }
}
