// Session Orchestration
//
// The orchestration root: owns the selected document and selection text, the
// annotation store, the result and chat logs, the anchor bridge, and the
// single-flight busy gate. The presentation layer drives it through the
// entry points below and re-renders from the snapshot accessors; stores are
// never mutated from outside.

pub mod anchor;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;

use crate::models::analysis::{ActionTarget, AnalysisResult};
use crate::models::annotation::{
    ActionKind, Annotation, AnnotationContent, AnnotationLabel, NewAnnotation,
};
use crate::models::chat::ChatMessage;
use crate::models::document::DocumentInfo;
use crate::services::analysis::{AnalysisError, AnalysisService};
use crate::services::dispatcher::ActionDispatcher;
use crate::stores::{AnnotationStore, ChatLog, LoadState, ResultLog, StoreError};

use anchor::AnchorBridge;

/// Current document and selection.
#[derive(Debug, Clone, Default)]
struct SelectionState {
    document: Option<DocumentInfo>,
    /// Last text captured from a direct selection or an annotation creation.
    text: String,
}

/// Clears the busy flag on every exit path of a dispatch.
struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

/// One user session over one analysis service.
///
/// All state transitions run in response to discrete events and commit
/// before the next event is observed; the only suspension points are the
/// service calls, and annotation, result, and chat operations stay
/// responsive while a call is outstanding.
pub struct Session {
    service: Arc<dyn AnalysisService>,
    dispatcher: ActionDispatcher,
    annotations: RwLock<AnnotationStore>,
    results: RwLock<ResultLog>,
    chat: RwLock<ChatLog>,
    anchor: RwLock<AnchorBridge>,
    selection: RwLock<SelectionState>,
    busy: AtomicBool,
}

impl Session {
    pub fn new(service: Arc<dyn AnalysisService>) -> Self {
        Self {
            dispatcher: ActionDispatcher::new(service.clone()),
            service,
            annotations: RwLock::new(AnnotationStore::new()),
            results: RwLock::new(ResultLog::new()),
            chat: RwLock::new(ChatLog::new()),
            anchor: RwLock::new(AnchorBridge::new()),
            selection: RwLock::new(SelectionState::default()),
            busy: AtomicBool::new(false),
        }
    }

    /// Handle to the underlying service, for boundary calls the session does
    /// not orchestrate (document listing and upload).
    pub fn service(&self) -> Arc<dyn AnalysisService> {
        self.service.clone()
    }

    /// Take the single-flight gate. Fails with `Busy` while another action
    /// is outstanding; never queues.
    fn acquire_busy(&self) -> Result<BusyGuard<'_>, AnalysisError> {
        if self.busy.swap(true, Ordering::SeqCst) {
            return Err(AnalysisError::Busy);
        }
        Ok(BusyGuard { flag: &self.busy })
    }

    // =========================================================================
    // Document selection
    // =========================================================================

    /// Switch to another document (or to none).
    ///
    /// Annotations and results are scoped to one document's content, so the
    /// selection change discards them along with the selection text and the
    /// anchor. The chat log is independent and survives. An in-flight action
    /// is not cancelled; its result still lands in the result log when it
    /// settles.
    pub async fn select_document(&self, document: Option<DocumentInfo>) {
        match &document {
            Some(info) => log::info!("selected document '{}'", info.name),
            None => log::info!("cleared document selection"),
        }
        let has_document = document.is_some();

        {
            let mut selection = self.selection.write().await;
            selection.document = document;
            selection.text.clear();
        }
        {
            let mut annotations = self.annotations.write().await;
            if has_document {
                annotations.reset_all();
            } else {
                annotations.unload();
            }
        }
        self.results.write().await.clear_all();
        self.anchor.write().await.clear();
    }

    /// Record a direct text selection from the viewer.
    pub async fn select_text(&self, text: impl Into<String>) {
        self.selection.write().await.text = text.into();
    }

    pub async fn selected_document(&self) -> Option<DocumentInfo> {
        self.selection.read().await.document.clone()
    }

    pub async fn selected_text(&self) -> String {
        self.selection.read().await.text.clone()
    }

    // =========================================================================
    // Annotations
    // =========================================================================

    /// Create an annotation with a fresh id; the captured text becomes the
    /// current selection.
    pub async fn create_annotation(&self, partial: NewAnnotation) -> Annotation {
        let annotation = self.annotations.write().await.create(partial);
        if let Some(text) = &annotation.content.text {
            self.selection.write().await.text = text.clone();
        }
        annotation
    }

    /// Merge geometry/content patches into an existing annotation.
    pub async fn update_annotation(
        &self,
        id: &str,
        position_patch: Option<Value>,
        content_patch: Option<AnnotationContent>,
    ) -> Result<(), StoreError> {
        self.annotations
            .write()
            .await
            .update(id, position_patch.as_ref(), content_patch.as_ref())
    }

    /// Switch an existing annotation's intent without touching its geometry.
    pub async fn relabel_annotation(&self, id: &str, kind: ActionKind) -> Result<(), StoreError> {
        self.annotations
            .write()
            .await
            .relabel(id, AnnotationLabel::for_kind(kind))
    }

    /// Delete one annotation; the anchor is cleared if it referenced it.
    pub async fn delete_annotation(&self, id: &str) -> bool {
        let removed = self.annotations.write().await.delete_one(id);
        if removed && self.anchor.write().await.forget(id) {
            log::debug!("anchor cleared with deleted annotation {}", id);
        }
        removed
    }

    /// Clear every annotation and the anchor. Idempotent; returns the number
    /// of records removed so callers can react to the N-to-0 transition.
    pub async fn reset_annotations(&self) -> usize {
        let removed = self.annotations.write().await.reset_all();
        self.anchor.write().await.clear();
        log::info!("cleared {} annotations", removed);
        removed
    }

    pub async fn annotations(&self) -> Vec<Annotation> {
        self.annotations.read().await.records().to_vec()
    }

    pub async fn annotation_load_state(&self) -> LoadState {
        self.annotations.read().await.load_state()
    }

    // =========================================================================
    // Actions and results
    // =========================================================================

    /// Route a user intent.
    ///
    /// Annotate-only stays local: the target text becomes the current
    /// selection and nothing is dispatched. Every other kind issues exactly
    /// one request under the busy gate and prepends the settled record,
    /// success or failure, to the result log. The gate is released on every
    /// path.
    pub async fn dispatch_action(
        &self,
        kind: ActionKind,
        target: ActionTarget,
    ) -> Result<(), AnalysisError> {
        ActionDispatcher::validate_target(&target)?;

        if !kind.is_remote() {
            if let ActionTarget::Text(text) = target {
                self.selection.write().await.text = text;
            }
            return Ok(());
        }

        let _guard = self.acquire_busy()?;
        let record = self.dispatcher.dispatch(kind, &target).await?;
        self.results.write().await.prepend(record);
        Ok(())
    }

    /// Delete one result record; unknown ids are a no-op.
    pub async fn delete_result(&self, id: &str) -> bool {
        self.results.write().await.delete_one(id)
    }

    /// Clear the result log. Idempotent.
    pub async fn clear_results(&self) -> usize {
        self.results.write().await.clear_all()
    }

    pub async fn results(&self) -> Vec<AnalysisResult> {
        self.results.read().await.records().to_vec()
    }

    // =========================================================================
    // Chat
    // =========================================================================

    /// Send a question to the QA boundary.
    ///
    /// The user message is appended immediately; the assistant reply is
    /// appended on settlement. A failed settlement appends a visible
    /// assistant message instead of dropping the turn.
    pub async fn send_chat_message(&self, text: &str) -> Result<(), AnalysisError> {
        let question = text.trim().to_string();
        if question.is_empty() {
            return Err(AnalysisError::NoTarget);
        }

        let _guard = self.acquire_busy()?;
        self.chat.write().await.append(ChatMessage::user(question.as_str()));

        let reply = match self.service.ask(&question).await {
            Ok(response) => ChatMessage::assistant(response.answer),
            Err(err) => {
                log::warn!("question could not be answered: {}", err);
                ChatMessage::assistant(format!("The question could not be answered: {}", err))
            }
        };
        self.chat.write().await.append(reply);
        Ok(())
    }

    /// Clear the chat log. Idempotent.
    pub async fn clear_chat(&self) -> usize {
        self.chat.write().await.clear_all()
    }

    pub async fn chat_messages(&self) -> Vec<ChatMessage> {
        self.chat.read().await.messages().to_vec()
    }

    // =========================================================================
    // Hash anchor
    // =========================================================================

    /// External navigation event: the fragment changed under us (back or
    /// forward navigation, or another component writing it).
    ///
    /// A fragment matching a stored annotation anchors to it and queues the
    /// scroll; an unknown id is silently ignored (it may reference an
    /// annotation from another session); an empty or foreign-shaped fragment
    /// clears the anchor.
    pub async fn handle_fragment_change(&self, fragment: &str) {
        match anchor::parse_fragment(fragment) {
            Some(id) => {
                let record = self.annotations.read().await.get(id).cloned();
                match record {
                    Some(annotation) => self.anchor.write().await.anchor_to(annotation),
                    None => log::debug!("fragment references unknown annotation {}", id),
                }
            }
            None => self.anchor.write().await.clear(),
        }
    }

    /// Anchor to a stored annotation (e.g. the user clicked its chip).
    /// Returns the fragment the presentation layer should write, or `None`
    /// if the id is unknown.
    pub async fn anchor_to(&self, id: &str) -> Option<String> {
        let record = self.annotations.read().await.get(id).cloned()?;
        let mut anchor = self.anchor.write().await;
        anchor.anchor_to(record);
        anchor.fragment()
    }

    pub async fn active_anchor(&self) -> Option<String> {
        self.anchor.read().await.active().map(str::to_string)
    }

    /// Scroll target queued by the last anchor change, handed out once.
    pub async fn take_pending_scroll(&self) -> Option<Annotation> {
        self.anchor.write().await.take_pending_scroll()
    }

    // =========================================================================
    // Status
    // =========================================================================

    /// Whether an action is outstanding. The presentation layer disables
    /// triggering affordances while this is true.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::analysis::AnalyzeResponse;
    use crate::models::chat::ChatSender;
    use crate::models::document::{AskResponse, UploadResponse};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::atomic::AtomicUsize;
    use tokio::sync::Notify;

    /// Mock analysis service with a scripted settlement; can optionally hold
    /// every analyze call until released.
    struct MockService {
        analyze_outcome: Result<Value, String>,
        ask_outcome: Result<String, String>,
        hold: Option<Arc<Notify>>,
        analyze_calls: AtomicUsize,
    }

    impl MockService {
        fn ok(response: Value) -> Self {
            Self {
                analyze_outcome: Ok(response),
                ask_outcome: Ok("mock answer".to_string()),
                hold: None,
                analyze_calls: AtomicUsize::new(0),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                analyze_outcome: Err(message.to_string()),
                ask_outcome: Err(message.to_string()),
                hold: None,
                analyze_calls: AtomicUsize::new(0),
            }
        }

        fn held(response: Value, release: Arc<Notify>) -> Self {
            Self {
                hold: Some(release),
                ..Self::ok(response)
            }
        }

        fn analyze_calls(&self) -> usize {
            self.analyze_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl AnalysisService for MockService {
        async fn analyze(
            &self,
            _kind: ActionKind,
            _target: &ActionTarget,
        ) -> Result<AnalyzeResponse, AnalysisError> {
            self.analyze_calls.fetch_add(1, Ordering::SeqCst);
            if let Some(release) = &self.hold {
                release.notified().await;
            }
            match &self.analyze_outcome {
                Ok(value) => Ok(serde_json::from_value(value.clone()).unwrap()),
                Err(message) => Err(AnalysisError::ConnectionFailed(message.clone())),
            }
        }

        async fn list_documents(&self) -> Result<Vec<DocumentInfo>, AnalysisError> {
            Ok(Vec::new())
        }

        async fn upload_document(
            &self,
            _filename: &str,
            _bytes: Vec<u8>,
        ) -> Result<UploadResponse, AnalysisError> {
            Err(AnalysisError::UploadRejected("not supported".to_string()))
        }

        async fn ask(&self, question: &str) -> Result<AskResponse, AnalysisError> {
            match &self.ask_outcome {
                Ok(answer) => Ok(AskResponse {
                    answer: format!("{} ({})", answer, question),
                }),
                Err(message) => Err(AnalysisError::ConnectionFailed(message.clone())),
            }
        }
    }

    fn web_search_response() -> Value {
        json!({
            "educational_content": {
                "web_search": {"sources_found": "arXiv:1706.03762"}
            }
        })
    }

    fn session_with(service: MockService) -> (Arc<Session>, Arc<MockService>) {
        let service = Arc::new(service);
        (Arc::new(Session::new(service.clone())), service)
    }

    fn annotation_input(text: &str, kind: ActionKind) -> NewAnnotation {
        NewAnnotation {
            position: json!({"pageNumber": 1}),
            content: AnnotationContent::text(text),
            kind,
        }
    }

    #[tokio::test]
    async fn test_dispatch_success_lands_in_result_log() {
        let (session, _) = session_with(MockService::ok(web_search_response()));
        session
            .select_document(Some(DocumentInfo::named("paper.pdf")))
            .await;
        session
            .create_annotation(annotation_input("Transformer architecture", ActionKind::WebSearch))
            .await;

        session
            .dispatch_action(
                ActionKind::WebSearch,
                ActionTarget::Text("Transformer architecture".to_string()),
            )
            .await
            .unwrap();

        let results = session.results().await;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].kind, ActionKind::WebSearch);
        assert!(results[0].payload.as_ref().unwrap()["sources_found"].is_string());
        assert!(results[0].error.is_none());
        assert!(!session.is_busy());
    }

    #[tokio::test]
    async fn test_dispatch_failure_is_a_visible_record() {
        let (session, _) = session_with(MockService::failing("connection refused"));

        session
            .dispatch_action(
                ActionKind::KnowledgeExplain,
                ActionTarget::Text("gradient descent".to_string()),
            )
            .await
            .unwrap();

        let results = session.results().await;
        assert_eq!(results.len(), 1);
        assert!(results[0].payload.is_none());
        assert!(results[0].error.as_ref().unwrap().contains("connection refused"));
        assert!(!session.is_busy());
    }

    #[tokio::test]
    async fn test_missing_flow_key_surfaces_as_invalid_shape() {
        let (session, _) = session_with(MockService::ok(json!({
            "educational_content": {}
        })));

        session
            .dispatch_action(
                ActionKind::Assess,
                ActionTarget::Document("paper.pdf".to_string()),
            )
            .await
            .unwrap();

        let results = session.results().await;
        assert_eq!(results.len(), 1);
        assert!(results[0].error.as_ref().unwrap().contains("invalid response shape"));
    }

    #[tokio::test]
    async fn test_empty_target_is_rejected_without_side_effects() {
        let (session, service) = session_with(MockService::ok(web_search_response()));

        let result = session
            .dispatch_action(ActionKind::WebSearch, ActionTarget::Text("  ".to_string()))
            .await;

        assert!(matches!(result, Err(AnalysisError::NoTarget)));
        assert_eq!(service.analyze_calls(), 0);
        assert!(session.results().await.is_empty());
        assert!(!session.is_busy());
    }

    #[tokio::test]
    async fn test_annotate_only_stays_local() {
        let (session, service) = session_with(MockService::ok(web_search_response()));

        session
            .dispatch_action(
                ActionKind::AnnotateOnly,
                ActionTarget::Text("just a note".to_string()),
            )
            .await
            .unwrap();

        assert_eq!(service.analyze_calls(), 0);
        assert!(session.results().await.is_empty());
        assert_eq!(session.selected_text().await, "just a note");
    }

    #[tokio::test]
    async fn test_second_dispatch_while_busy_is_rejected_not_queued() {
        let release = Arc::new(Notify::new());
        let (session, service) =
            session_with(MockService::held(web_search_response(), release.clone()));

        let background = {
            let session = session.clone();
            tokio::spawn(async move {
                session
                    .dispatch_action(
                        ActionKind::WebSearch,
                        ActionTarget::Text("first".to_string()),
                    )
                    .await
            })
        };

        // Let the first dispatch reach the service and hold there.
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        assert!(session.is_busy());

        let second = session
            .dispatch_action(
                ActionKind::Summarize,
                ActionTarget::Text("second".to_string()),
            )
            .await;
        assert!(matches!(second, Err(AnalysisError::Busy)));
        assert_eq!(service.analyze_calls(), 1);

        release.notify_one();
        background.await.unwrap().unwrap();

        assert!(!session.is_busy());
        assert_eq!(session.results().await.len(), 1);
    }

    #[tokio::test]
    async fn test_document_switch_does_not_cancel_in_flight_action() {
        let release = Arc::new(Notify::new());
        let (session, _) =
            session_with(MockService::held(web_search_response(), release.clone()));
        session
            .select_document(Some(DocumentInfo::named("first.pdf")))
            .await;

        let background = {
            let session = session.clone();
            tokio::spawn(async move {
                session
                    .dispatch_action(
                        ActionKind::WebSearch,
                        ActionTarget::Text("from first.pdf".to_string()),
                    )
                    .await
            })
        };

        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        assert!(session.is_busy());

        // Annotation handling stays responsive while the call is held.
        session
            .select_document(Some(DocumentInfo::named("second.pdf")))
            .await;
        assert_eq!(session.selected_document().await.unwrap().name, "second.pdf");

        release.notify_one();
        background.await.unwrap().unwrap();

        // The settled record still lands even though the document changed.
        let results = session.results().await;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].source_text, "from first.pdf");
    }

    #[tokio::test]
    async fn test_select_document_clears_working_state_but_not_chat() {
        let (session, _) = session_with(MockService::ok(web_search_response()));
        session
            .select_document(Some(DocumentInfo::named("first.pdf")))
            .await;
        session.select_text("selection").await;
        session
            .create_annotation(annotation_input("span", ActionKind::AnnotateOnly))
            .await;
        session
            .dispatch_action(
                ActionKind::WebSearch,
                ActionTarget::Text("span".to_string()),
            )
            .await
            .unwrap();
        session.send_chat_message("what is this?").await.unwrap();

        session
            .select_document(Some(DocumentInfo::named("second.pdf")))
            .await;

        assert_eq!(session.selected_text().await, "");
        assert!(session.annotations().await.is_empty());
        assert_eq!(session.annotation_load_state().await, LoadState::Loaded);
        assert!(session.results().await.is_empty());
        assert_eq!(session.chat_messages().await.len(), 2);

        session.select_document(None).await;
        assert_eq!(session.annotation_load_state().await, LoadState::Unloaded);
    }

    #[tokio::test]
    async fn test_annotation_lifecycle_with_anchor() {
        let (session, _) = session_with(MockService::ok(web_search_response()));
        session
            .select_document(Some(DocumentInfo::named("paper.pdf")))
            .await;

        let record = session
            .create_annotation(annotation_input("span", ActionKind::AnnotateOnly))
            .await;
        assert_eq!(session.selected_text().await, "span");

        let fragment = session.anchor_to(&record.id).await.unwrap();
        assert_eq!(fragment, format!("highlight-{}", record.id));
        assert_eq!(session.take_pending_scroll().await.unwrap().id, record.id);

        // Deleting the anchored annotation clears the anchor.
        assert!(session.delete_annotation(&record.id).await);
        assert_eq!(session.active_anchor().await, None);

        // Second delete is a no-op.
        assert!(!session.delete_annotation(&record.id).await);
    }

    #[tokio::test]
    async fn test_fragment_change_resolves_against_store() {
        let (session, _) = session_with(MockService::ok(web_search_response()));
        session
            .select_document(Some(DocumentInfo::named("paper.pdf")))
            .await;
        let record = session
            .create_annotation(annotation_input("span", ActionKind::AnnotateOnly))
            .await;

        session
            .handle_fragment_change(&format!("#highlight-{}", record.id))
            .await;
        assert_eq!(session.active_anchor().await, Some(record.id.clone()));
        assert_eq!(session.take_pending_scroll().await.unwrap().id, record.id);

        // Unknown id: silent no-op, anchor untouched.
        session.handle_fragment_change("highlight-from-another-session").await;
        assert_eq!(session.active_anchor().await, Some(record.id.clone()));

        // Empty fragment clears.
        session.handle_fragment_change("").await;
        assert_eq!(session.active_anchor().await, None);
    }

    #[tokio::test]
    async fn test_reset_annotations_clears_anchor_and_reports_count() {
        let (session, _) = session_with(MockService::ok(web_search_response()));
        session
            .select_document(Some(DocumentInfo::named("paper.pdf")))
            .await;
        let record = session
            .create_annotation(annotation_input("a", ActionKind::AnnotateOnly))
            .await;
        session
            .create_annotation(annotation_input("b", ActionKind::WebSearch))
            .await;
        session.anchor_to(&record.id).await;

        assert_eq!(session.reset_annotations().await, 2);
        assert!(session.annotations().await.is_empty());
        assert_eq!(session.active_anchor().await, None);
        assert_eq!(session.annotation_load_state().await, LoadState::Loaded);

        // Idempotent on an empty store.
        assert_eq!(session.reset_annotations().await, 0);
    }

    #[tokio::test]
    async fn test_relabel_switches_intent_only() {
        let (session, _) = session_with(MockService::ok(web_search_response()));
        let record = session
            .create_annotation(annotation_input("span", ActionKind::AnnotateOnly))
            .await;

        session
            .relabel_annotation(&record.id, ActionKind::HybridAnalyze)
            .await
            .unwrap();

        let annotations = session.annotations().await;
        assert_eq!(annotations[0].label.kind, ActionKind::HybridAnalyze);
        assert_eq!(annotations[0].label.glyph, "⚡");
        assert_eq!(annotations[0].content, record.content);

        let missing = session
            .relabel_annotation("missing", ActionKind::Assess)
            .await;
        assert!(missing.is_err());
    }

    #[tokio::test]
    async fn test_delete_result_twice_is_noop() {
        let (session, _) = session_with(MockService::ok(web_search_response()));
        session
            .dispatch_action(
                ActionKind::WebSearch,
                ActionTarget::Text("span".to_string()),
            )
            .await
            .unwrap();
        let id = session.results().await[0].id.clone();

        assert!(session.delete_result(&id).await);
        assert!(session.results().await.is_empty());
        assert!(!session.delete_result(&id).await);
        assert!(session.results().await.is_empty());
    }

    #[tokio::test]
    async fn test_chat_round_trip() {
        let (session, _) = session_with(MockService::ok(web_search_response()));

        session.send_chat_message("what is attention?").await.unwrap();

        let messages = session.chat_messages().await;
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].sender, ChatSender::User);
        assert_eq!(messages[0].content, "what is attention?");
        assert_eq!(messages[1].sender, ChatSender::Assistant);
        assert!(messages[1].content.contains("mock answer"));
        assert!(!session.is_busy());

        assert_eq!(session.clear_chat().await, 2);
        assert!(session.chat_messages().await.is_empty());
    }

    #[tokio::test]
    async fn test_chat_failure_appends_visible_assistant_message() {
        let (session, _) = session_with(MockService::failing("qa backend down"));

        session.send_chat_message("anyone home?").await.unwrap();

        let messages = session.chat_messages().await;
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].sender, ChatSender::Assistant);
        assert!(messages[1].content.contains("could not be answered"));
        assert!(!session.is_busy());
    }

    #[tokio::test]
    async fn test_empty_chat_message_is_rejected() {
        let (session, _) = session_with(MockService::ok(web_search_response()));
        let result = session.send_chat_message("   ").await;
        assert!(matches!(result, Err(AnalysisError::NoTarget)));
        assert!(session.chat_messages().await.is_empty());
    }

    #[tokio::test]
    async fn test_update_annotation_merges_patches() {
        let (session, _) = session_with(MockService::ok(web_search_response()));
        let record = session
            .create_annotation(annotation_input("span", ActionKind::AnnotateOnly))
            .await;

        session
            .update_annotation(
                &record.id,
                Some(json!({"boundingRect": {"x1": 5.0}})),
                Some(AnnotationContent {
                    text: None,
                    image: Some("area-shot".to_string()),
                }),
            )
            .await
            .unwrap();

        let annotations = session.annotations().await;
        assert_eq!(annotations[0].id, record.id);
        assert_eq!(annotations[0].position["pageNumber"], json!(1));
        assert_eq!(annotations[0].position["boundingRect"], json!({"x1": 5.0}));
        assert_eq!(annotations[0].content.text.as_deref(), Some("span"));
        assert_eq!(annotations[0].content.image.as_deref(), Some("area-shot"));
    }
}
