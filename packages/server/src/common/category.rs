// Issue category taxonomy
//
// One closed set shared by the roster and both classifiers, so that roster
// lookups never depend on how a classifier happened to spell a category.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueCategory {
    Water,
    Waste,
    Roads,
    Electricity,
    WomenSafety,
    AnimalRescue,
    Healthcare,
    Environment,
    Infrastructure,
    General,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown issue category: {0}")]
pub struct UnknownCategory(pub String);

impl IssueCategory {
    /// Every category, in taxonomy order.
    pub const ALL: [IssueCategory; 10] = [
        Self::Water,
        Self::Waste,
        Self::Roads,
        Self::Electricity,
        Self::WomenSafety,
        Self::AnimalRescue,
        Self::Healthcare,
        Self::Environment,
        Self::Infrastructure,
        Self::General,
    ];

    /// Canonical display name, as used in prompts, the roster and responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Water => "Water",
            Self::Waste => "Waste",
            Self::Roads => "Roads",
            Self::Electricity => "Electricity",
            Self::WomenSafety => "Women Safety",
            Self::AnimalRescue => "Animal Rescue",
            Self::Healthcare => "Healthcare",
            Self::Environment => "Environment",
            Self::Infrastructure => "Infrastructure",
            Self::General => "General",
        }
    }

    /// Comma-separated canonical names, e.g. for prompt instructions.
    pub fn listing() -> String {
        Self::ALL
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IssueCategory {
    type Err = UnknownCategory;

    /// Case-insensitive match against the canonical names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

impl Serialize for IssueCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for IssueCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
