//! The NGO roster: static reference data loaded once per process.
//!
//! Order matters only for presentation (prompt numbering, which entries come
//! first in a shortlist); lookups are order-independent.

use std::collections::HashSet;
use std::fmt::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::models::NgoEntry;
use crate::common::IssueCategory;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Failed to read roster file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid roster JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Roster contains no NGOs")]
    Empty,

    #[error("Duplicate NGO name in roster: {0}")]
    DuplicateName(String),
}

/// Ordered, immutable collection of NGOs.
#[derive(Debug, Clone)]
pub struct NgoRoster {
    entries: Vec<NgoEntry>,
}

impl Default for NgoRoster {
    fn default() -> Self {
        Self::builtin()
    }
}

impl NgoRoster {
    /// Build a roster, rejecting empty lists and duplicate names.
    pub fn new(entries: Vec<NgoEntry>) -> Result<Self, RosterError> {
        if entries.is_empty() {
            return Err(RosterError::Empty);
        }

        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.name.as_str()) {
                return Err(RosterError::DuplicateName(entry.name.clone()));
            }
        }

        Ok(Self { entries })
    }

    /// The roster shipped with the service.
    pub fn builtin() -> Self {
        use IssueCategory::*;

        let entries = vec![
            NgoEntry::new("CleanWater Foundation", Water, "Kothrud"),
            NgoEntry::new("GreenCity NGO", Waste, "All Pune"),
            NgoEntry::new("SafeWomen NGO", WomenSafety, "All Pune"),
            NgoEntry::new("AnimalCare", AnimalRescue, "Kothrud"),
            NgoEntry::new("Urban Relief NGO", Infrastructure, "All Pune"),
            NgoEntry::new("CommunityAid Trust", General, "All Pune"),
            NgoEntry::new("RoadSafety Initiative", Roads, "Pune Central"),
            NgoEntry::new("HealthFirst Foundation", Healthcare, "All Pune"),
            NgoEntry::new("EcoWarriors Pune", Environment, "All Pune"),
            NgoEntry::new("StreetLight Campaign", Electricity, "Kothrud"),
        ];

        Self { entries }
    }

    /// Load a roster from a JSON array of `{name, category, area}` objects.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, RosterError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| RosterError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, RosterError> {
        let entries: Vec<NgoEntry> = serde_json::from_str(raw)?;
        Self::new(entries)
    }

    pub fn list_all(&self) -> &[NgoEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Numbered listing used in LLM prompts:
    /// `"{index}. {name} — {category} — {area}"`, one entry per line.
    pub fn format_for_prompt(&self) -> String {
        let mut formatted = String::from("Available NGOs:\n\n");
        for (idx, ngo) in self.entries.iter().enumerate() {
            // Writing to a String cannot fail
            let _ = writeln!(
                formatted,
                "{}. {} — {} — {}",
                idx + 1,
                ngo.name,
                ngo.category,
                ngo.area
            );
        }
        formatted
    }

    /// Entries whose category matches `category`, ignoring case.
    pub fn find_by_category(&self, category: &str) -> Vec<&NgoEntry> {
        let category = category.trim();
        self.entries
            .iter()
            .filter(|ngo| ngo.category.as_str().eq_ignore_ascii_case(category))
            .collect()
    }

    /// Entries usable for any issue: General NGOs and those serving the whole region.
    pub fn find_general(&self) -> Vec<&NgoEntry> {
        self.entries
            .iter()
            .filter(|ngo| ngo.category == IssueCategory::General || ngo.serves_entire_region())
            .collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|ngo| ngo.name == name)
    }
}
