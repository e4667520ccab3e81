use serde::{Deserialize, Serialize};

use super::Severity;
use crate::common::IssueCategory;

pub const MAX_SUGGESTED_NGOS: usize = 3;
pub const MIN_IMPACT_SCORE: f64 = 0.0;
pub const MAX_IMPACT_SCORE: f64 = 10.0;

/// Classification and NGO recommendation for one issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueResponse {
    pub category: IssueCategory,
    pub severity: Severity,
    /// 0.0 (negligible) to 10.0 (most severe)
    pub impact_score: f64,
    /// One to three NGO names, best match first
    pub suggested_ngos: Vec<String>,
    pub reasoning: String,
}

pub fn impact_score_in_range(score: f64) -> bool {
    score.is_finite() && (MIN_IMPACT_SCORE..=MAX_IMPACT_SCORE).contains(&score)
}
