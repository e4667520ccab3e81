//! Issue classifiers: the language-model path and its keyword fallback.

pub mod ai;
pub mod error;
pub mod keyword;
pub mod parser;
pub mod prompt;

pub use ai::AiClassifier;
pub use error::AnalysisError;
pub use keyword::KeywordClassifier;
pub use parser::{parse_ai_response, strip_code_fences};
pub use prompt::build_prompt;
