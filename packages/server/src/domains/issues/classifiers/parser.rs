//! Parsing and validation of language-model output.
//!
//! The model is asked for one JSON object; in practice it sometimes wraps
//! the object in a markdown code fence. Anything that does not satisfy the
//! full output contract is rejected as a whole.

use serde_json::{Map, Value};

use super::AnalysisError;
use crate::common::IssueCategory;
use crate::domains::issues::models::{
    impact_score_in_range, IssueResponse, Severity, MAX_SUGGESTED_NGOS,
};

pub const REQUIRED_FIELDS: [&str; 5] = [
    "category",
    "severity",
    "impact_score",
    "suggested_ngos",
    "reasoning",
];

/// Strip a leading "```json" / "```" marker and a trailing "```" marker.
///
/// The two ends are handled independently, so a fence that was opened but
/// never closed (or the reverse) is still removed.
pub fn strip_code_fences(response_text: &str) -> &str {
    let mut cleaned = response_text.trim();
    if let Some(rest) = cleaned.strip_prefix("```json") {
        cleaned = rest;
    }
    if let Some(rest) = cleaned.strip_prefix("```") {
        cleaned = rest;
    }
    if let Some(rest) = cleaned.strip_suffix("```") {
        cleaned = rest;
    }
    cleaned.trim()
}

/// Parse raw completion text into a validated [`IssueResponse`].
pub fn parse_ai_response(response_text: &str) -> Result<IssueResponse, AnalysisError> {
    let cleaned = strip_code_fences(response_text);
    let value: Value = serde_json::from_str(cleaned)?;
    let object = value.as_object().ok_or(AnalysisError::NotAnObject)?;

    for field in REQUIRED_FIELDS {
        if !object.contains_key(field) {
            return Err(AnalysisError::MissingField(field));
        }
    }

    let suggested_ngos = parse_ngos(&object["suggested_ngos"])?;
    let category = parse_category(&object["category"])?;
    let severity = parse_severity(&object["severity"])?;
    let impact_score = parse_impact_score(&object["impact_score"])?;
    let reasoning = parse_reasoning(object)?;

    Ok(IssueResponse {
        category,
        severity,
        impact_score,
        suggested_ngos,
        reasoning,
    })
}

/// Non-empty list of names; duplicates dropped, then cut to the first three.
fn parse_ngos(value: &Value) -> Result<Vec<String>, AnalysisError> {
    let items = value
        .as_array()
        .ok_or_else(|| AnalysisError::invalid("suggested_ngos", "expected a list"))?;

    if items.is_empty() {
        return Err(AnalysisError::invalid("suggested_ngos", "list is empty"));
    }

    let mut names: Vec<String> = Vec::with_capacity(MAX_SUGGESTED_NGOS);
    for item in items {
        let name = item.as_str().ok_or_else(|| {
            AnalysisError::invalid("suggested_ngos", "expected NGO names as strings")
        })?;
        if !names.iter().any(|existing| existing == name) {
            names.push(name.to_string());
        }
    }
    names.truncate(MAX_SUGGESTED_NGOS);

    Ok(names)
}

fn parse_category(value: &Value) -> Result<IssueCategory, AnalysisError> {
    let raw = value
        .as_str()
        .ok_or_else(|| AnalysisError::invalid("category", "expected a string"))?;
    raw.parse::<IssueCategory>()
        .map_err(|e| AnalysisError::invalid("category", e.to_string()))
}

fn parse_severity(value: &Value) -> Result<Severity, AnalysisError> {
    let raw = value
        .as_str()
        .ok_or_else(|| AnalysisError::invalid("severity", "expected a string"))?;
    raw.parse::<Severity>()
        .map_err(|e| AnalysisError::invalid("severity", e.to_string()))
}

fn parse_impact_score(value: &Value) -> Result<f64, AnalysisError> {
    // Numeric strings ("8.5") are accepted, matching lenient JSON producers
    let score = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .ok_or_else(|| AnalysisError::invalid("impact_score", "expected a number"))?;

    if !impact_score_in_range(score) {
        return Err(AnalysisError::invalid(
            "impact_score",
            format!("{} is outside 0.0..=10.0", score),
        ));
    }

    Ok(score)
}

fn parse_reasoning(object: &Map<String, Value>) -> Result<String, AnalysisError> {
    let reasoning = object["reasoning"]
        .as_str()
        .ok_or_else(|| AnalysisError::invalid("reasoning", "expected a string"))?;

    if reasoning.trim().is_empty() {
        return Err(AnalysisError::invalid("reasoning", "must not be empty"));
    }

    Ok(reasoning.to_string())
}
