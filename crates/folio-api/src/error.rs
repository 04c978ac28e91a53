//! # API Error Types
//!
//! Every error response is `{"error": "<message>"}`. Client mistakes carry
//! a message naming the problem; internal faults always carry
//! [`SAFE_ERROR_MESSAGE`] and the detail goes to the log only.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use folio_core::{ContactError, ContactField, SAFE_ERROR_MESSAGE};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// JSON error response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable error message.
    #[schema(example = "Missing required field: name")]
    pub error: String,
}

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum AppError {
    /// A required contact field was absent, not text, or empty (400).
    #[error("Missing required field: {0}")]
    MissingField(ContactField),

    /// Resource not found (404).
    #[error("{0} not found")]
    NotFound(String),

    /// Internal server error (500). Message is logged but not returned to client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            Self::MissingField(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the response body.
    fn public_message(&self) -> String {
        match self {
            Self::Internal(_) => SAFE_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Self::Internal(detail) = &self {
            tracing::error!(error = %detail, "internal server error");
        }

        let body = ErrorBody {
            error: self.public_message(),
        };
        (self.status(), Json(body)).into_response()
    }
}

impl From<ContactError> for AppError {
    fn from(err: ContactError) -> Self {
        match err {
            ContactError::MissingField(field) => Self::MissingField(field),
            other @ (ContactError::InvalidOptionalField { .. } | ContactError::NullPayload) => {
                Self::Internal(other.to_string())
            }
        }
    }
}
