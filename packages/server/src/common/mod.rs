// Types shared across domains
pub mod category;

pub use category::{IssueCategory, UnknownCategory};
