use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_ISSUE_TEXT_CHARS: usize = 10;
pub const MIN_LOCATION_CHARS: usize = 2;

lazy_static! {
    // Indian postal code: exactly six digits
    static ref PINCODE_REGEX: Regex = Regex::new(r"^\d{6}$").unwrap();
}

/// A civic issue submitted for analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueRequest {
    /// Description of the civic issue
    pub issue_text: String,
    /// Area/locality name
    pub location: String,
    #[serde(default)]
    pub pincode: Option<String>,
    /// Accepted for forward compatibility; not analysed
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must be at least {min} characters long")]
    TooShort { field: &'static str, min: usize },

    #[error("pincode must be exactly 6 digits")]
    InvalidPincode,
}

impl IssueRequest {
    pub fn new(issue_text: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            issue_text: issue_text.into(),
            location: location.into(),
            pincode: None,
            image_url: None,
        }
    }

    pub fn with_pincode(mut self, pincode: impl Into<String>) -> Self {
        self.pincode = Some(pincode.into());
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Check field constraints. Runs before any classifier sees the request.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.issue_text.chars().count() < MIN_ISSUE_TEXT_CHARS {
            return Err(ValidationError::TooShort {
                field: "issue_text",
                min: MIN_ISSUE_TEXT_CHARS,
            });
        }

        if self.location.chars().count() < MIN_LOCATION_CHARS {
            return Err(ValidationError::TooShort {
                field: "location",
                min: MIN_LOCATION_CHARS,
            });
        }

        if let Some(pincode) = &self.pincode {
            if !PINCODE_REGEX.is_match(pincode) {
                return Err(ValidationError::InvalidPincode);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> IssueRequest {
        IssueRequest::new("Water pipe burst near school, urgent help needed", "Kothrud")
            .with_pincode("411038")
    }

    #[test]
    fn test_valid_request() {
        assert_eq!(valid().validate(), Ok(()));
        assert_eq!(
            IssueRequest::new("Garbage everywhere", "Aundh").validate(),
            Ok(())
        );
    }

    #[test]
    fn test_short_issue_text() {
        let request = IssueRequest::new("Too short", "Kothrud");
        assert_eq!(
            request.validate(),
            Err(ValidationError::TooShort {
                field: "issue_text",
                min: 10
            })
        );
    }

    #[test]
    fn test_short_location() {
        let request = IssueRequest::new("Broken streetlight on lane 4", "K");
        assert!(matches!(
            request.validate(),
            Err(ValidationError::TooShort { field: "location", .. })
        ));
    }

    #[test]
    fn test_pincode_pattern() {
        for bad in ["41103", "4110380", "41103a", "", " 411038"] {
            assert_eq!(
                valid().with_pincode(bad).validate(),
                Err(ValidationError::InvalidPincode),
                "pincode {:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_lengths_count_characters_not_bytes() {
        // 7 characters, 19 bytes
        let request = IssueRequest::new("पानी नह", "Kothrud");
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_deserialize_optional_fields() {
        let request: IssueRequest = serde_json::from_str(
            r#"{"issue_text": "Stray dog injured on the road", "location": "Baner"}"#,
        )
        .unwrap();
        assert_eq!(request.pincode, None);
        assert_eq!(request.image_url, None);
    }
}
