// Service Layer
// The remote analysis boundary and the action dispatch built on top of it

pub mod analysis;
pub mod dispatcher;

pub use analysis::{AnalysisError, AnalysisService, HttpAnalysisService, ServiceConfig};
pub use dispatcher::ActionDispatcher;
