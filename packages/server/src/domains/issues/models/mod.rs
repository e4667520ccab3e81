pub mod classification;
pub mod request;
pub mod response;
pub mod severity;

pub use classification::{Classification, ClassificationSource};
pub use request::{IssueRequest, ValidationError};
pub use response::{impact_score_in_range, IssueResponse, MAX_SUGGESTED_NGOS};
pub use severity::{Severity, UnknownSeverity};
