use serde::{Deserialize, Serialize};

use crate::common::IssueCategory;

/// Service-area value meaning "serves the entire region".
pub const SERVES_ENTIRE_REGION: &str = "All Pune";

/// One NGO in the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NgoEntry {
    /// Unique display name; the string that appears in recommendations.
    pub name: String,
    pub category: IssueCategory,
    /// Free-text service area (locality name or [`SERVES_ENTIRE_REGION`]).
    pub area: String,
}

impl NgoEntry {
    pub fn new(name: impl Into<String>, category: IssueCategory, area: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category,
            area: area.into(),
        }
    }

    pub fn serves_entire_region(&self) -> bool {
        self.area.trim().eq_ignore_ascii_case(SERVES_ENTIRE_REGION)
    }
}
