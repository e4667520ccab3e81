use super::IssueResponse;
use crate::domains::issues::classifiers::AnalysisError;

/// Which engine produced a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassificationSource {
    Ai,
    Keyword,
}

impl ClassificationSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ai => "ai",
            Self::Keyword => "keyword",
        }
    }
}

/// Outcome of analysing one issue.
///
/// Callers on the wire only ever see the [`IssueResponse`]; the variant
/// records whether the language model answered or the keyword engine stood in.
#[derive(Debug)]
pub enum Classification {
    Primary(IssueResponse),
    Fallback {
        response: IssueResponse,
        reason: AnalysisError,
    },
}

impl Classification {
    pub fn response(&self) -> &IssueResponse {
        match self {
            Self::Primary(response) => response,
            Self::Fallback { response, .. } => response,
        }
    }

    pub fn into_response(self) -> IssueResponse {
        match self {
            Self::Primary(response) => response,
            Self::Fallback { response, .. } => response,
        }
    }

    pub fn source(&self) -> ClassificationSource {
        match self {
            Self::Primary(_) => ClassificationSource::Ai,
            Self::Fallback { .. } => ClassificationSource::Keyword,
        }
    }

    pub fn fallback_used(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }

    pub fn fallback_reason(&self) -> Option<&AnalysisError> {
        match self {
            Self::Primary(_) => None,
            Self::Fallback { reason, .. } => Some(reason),
        }
    }
}
