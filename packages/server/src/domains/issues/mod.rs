pub mod classifiers;
pub mod engine;
pub mod models;

// Re-export commonly used types
pub use classifiers::{AiClassifier, AnalysisError, KeywordClassifier};
pub use engine::{EngineError, RoutingEngine};
pub use models::{
    Classification, ClassificationSource, IssueRequest, IssueResponse, Severity, ValidationError,
};
