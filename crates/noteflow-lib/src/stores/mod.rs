// Store Layer
// In-memory ordered collections owned by the session. Nothing here
// persists across a session reset.

pub mod annotation_store;
pub mod chat_log;
pub mod result_log;

pub use annotation_store::{AnnotationStore, LoadState, StoreError};
pub use chat_log::ChatLog;
pub use result_log::ResultLog;
