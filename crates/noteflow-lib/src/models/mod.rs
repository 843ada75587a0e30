// Data Models
// Shared types for annotations, analysis actions, chat, and documents

pub mod analysis;
pub mod annotation;
pub mod chat;
pub mod document;

pub use analysis::{ActionTarget, AnalysisResult, AnalyzeResponse, SOURCE_PREVIEW_CHARS};
pub use annotation::{ActionKind, Annotation, AnnotationContent, AnnotationLabel, NewAnnotation};
pub use chat::{ChatMessage, ChatSender};
pub use document::{AskResponse, DocumentInfo, UploadResponse};
