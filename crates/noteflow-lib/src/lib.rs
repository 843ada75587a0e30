// NoteFlow - Document Annotation Client Core
//
// Annotation lifecycle, action dispatch against the remote analysis
// service, result and chat logs, and the session orchestration that ties
// them together. The document viewer and the page chrome live outside this
// crate and drive it through `session::Session`.

pub mod models;
pub mod services;
pub mod session;
pub mod stores;
pub mod utils;

// Re-export the surface the presentation layer works with
pub use models::*;
pub use services::{
    ActionDispatcher, AnalysisError, AnalysisService, HttpAnalysisService, ServiceConfig,
};
pub use session::Session;
pub use stores::{LoadState, StoreError};
