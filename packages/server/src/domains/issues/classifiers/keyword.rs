//! Keyword-based classification.
//!
//! Deterministic stand-in for the language model: no I/O, never fails, and
//! produces the same answer for the same text every time.

use std::sync::Arc;

use tracing::info;

use crate::common::IssueCategory;
use crate::domains::issues::models::{IssueResponse, Severity, MAX_SUGGESTED_NGOS};
use crate::domains::ngos::NgoRoster;

/// Keywords per category, in tie-break order. General has no keywords: it is
/// what remains when nothing matches.
pub const CATEGORY_KEYWORDS: [(IssueCategory, &[&str]); 9] = [
    (
        IssueCategory::Water,
        &["water", "pipe", "leak", "drain", "sewage", "tap", "plumbing", "overflow"],
    ),
    (
        IssueCategory::Waste,
        &["garbage", "waste", "trash", "dump", "litter", "disposal", "dustbin", "cleanliness"],
    ),
    (
        IssueCategory::Roads,
        &["road", "pothole", "street", "highway", "pavement", "footpath", "traffic"],
    ),
    (
        IssueCategory::Electricity,
        &["light", "electric", "power", "streetlight", "pole", "wire", "blackout", "outage"],
    ),
    (
        IssueCategory::WomenSafety,
        &["women", "harassment", "safety", "assault", "security", "lighting"],
    ),
    (
        IssueCategory::AnimalRescue,
        &["dog", "cat", "animal", "stray", "injured", "rescue", "wildlife"],
    ),
    (
        IssueCategory::Healthcare,
        &["health", "medical", "hospital", "clinic", "disease", "sanitation"],
    ),
    (
        IssueCategory::Environment,
        &["tree", "pollution", "air", "noise", "green", "park", "forest", "environmental"],
    ),
    (
        IssueCategory::Infrastructure,
        &["building", "construction", "illegal", "encroachment", "bridge", "structure"],
    ),
];

pub const HIGH_SEVERITY_KEYWORDS: [&str; 7] = [
    "urgent",
    "emergency",
    "critical",
    "dangerous",
    "immediate",
    "serious",
    "severe",
];

pub const MEDIUM_SEVERITY_KEYWORDS: [&str; 5] =
    ["concern", "issue", "problem", "needs attention", "repair"];

pub const HIGH_IMPACT_SCORE: f64 = 7.5;
pub const MEDIUM_IMPACT_SCORE: f64 = 5.0;
pub const LOW_IMPACT_SCORE: f64 = 3.0;

/// Recommended when the roster has nothing for the category and no region-wide NGOs.
pub const DEFAULT_NGOS: [&str; 3] = ["CommunityAid Trust", "Urban Relief NGO", "GreenCity NGO"];

fn count_matches(text: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|k| text.contains(*k)).count()
}

/// Category with the most keyword hits; the earliest category wins ties.
pub fn select_category(issue_text: &str) -> IssueCategory {
    let text = issue_text.to_lowercase();

    let mut category = IssueCategory::General;
    let mut max_matches = 0;

    for (candidate, keywords) in CATEGORY_KEYWORDS {
        let matches = count_matches(&text, keywords);
        if matches > max_matches {
            max_matches = matches;
            category = candidate;
        }
    }

    category
}

/// Severity and impact score from urgency wording.
pub fn assess_severity(issue_text: &str) -> (Severity, f64) {
    let text = issue_text.to_lowercase();

    if count_matches(&text, &HIGH_SEVERITY_KEYWORDS) > 0 {
        (Severity::High, HIGH_IMPACT_SCORE)
    } else if count_matches(&text, &MEDIUM_SEVERITY_KEYWORDS) > 0 {
        (Severity::Medium, MEDIUM_IMPACT_SCORE)
    } else {
        (Severity::Low, LOW_IMPACT_SCORE)
    }
}

/// Up to three NGO names for `category`, in roster order.
pub fn select_ngos(roster: &NgoRoster, category: IssueCategory) -> Vec<String> {
    let mut matching = roster.find_by_category(category.as_str());
    if matching.is_empty() {
        matching = roster.find_general();
    }

    if matching.is_empty() {
        return DEFAULT_NGOS.iter().map(|name| name.to_string()).collect();
    }

    matching
        .into_iter()
        .take(MAX_SUGGESTED_NGOS)
        .map(|ngo| ngo.name.clone())
        .collect()
}

pub fn reasoning(category: IssueCategory, severity: Severity) -> String {
    format!(
        "Issue classified as {category} based on keyword analysis. \
         Severity assessed as {severity} based on urgency indicators in the description. \
         Recommended NGOs specialize in {category} and operate in the area."
    )
}

/// Rule-based classifier backed by the NGO roster.
#[derive(Debug, Clone)]
pub struct KeywordClassifier {
    roster: Arc<NgoRoster>,
}

impl KeywordClassifier {
    pub fn new(roster: Arc<NgoRoster>) -> Self {
        Self { roster }
    }

    pub fn classify(&self, issue_text: &str, location: &str) -> IssueResponse {
        let category = select_category(issue_text);
        let (severity, impact_score) = assess_severity(issue_text);
        let suggested_ngos = select_ngos(&self.roster, category);

        info!(
            location = %location,
            category = %category,
            severity = %severity,
            "Classified issue by keywords"
        );

        IssueResponse {
            category,
            severity,
            impact_score,
            suggested_ngos,
            reasoning: reasoning(category, severity),
        }
    }
}
