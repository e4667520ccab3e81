//! Client-facing error envelope.

use std::any::Any;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::Environment;
use crate::domains::issues::{EngineError, ValidationError};

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub detail: Option<String>,
    /// Whether the keyword classifier produced a result before the failure.
    /// Errors are raised before classification or instead of it, so this is
    /// false for every error the server currently emits.
    pub fallback_used: bool,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Rejection(#[from] JsonRejection),

    #[error("Internal server error")]
    Internal { detail: Option<String> },
}

impl ApiError {
    /// An unexpected failure. The detail is only kept outside production.
    pub fn internal(detail: impl Into<String>, environment: Environment) -> Self {
        Self::Internal {
            detail: environment.is_development().then(|| detail.into()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Rejection(rejection) => rejection.status(),
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> ErrorResponse {
        let (error, detail) = match self {
            Self::Validation(e) => ("Invalid request".to_string(), Some(e.to_string())),
            Self::Rejection(rejection) => (
                "Invalid request body".to_string(),
                Some(rejection.body_text()),
            ),
            Self::Internal { detail } => (self.to_string(), detail.clone()),
        };

        ErrorResponse {
            error,
            detail,
            fallback_used: false,
        }
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Validation(e) => Self::Validation(e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal { detail } = &self {
            tracing::error!(detail = ?detail, "Request failed");
        }

        (self.status(), Json(self.body())).into_response()
    }
}

/// Turn a handler panic into the 500 envelope.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>, environment: Environment) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };

    ApiError::internal(detail, environment).into_response()
}
