//! Contact client error types.

use folio_core::form::REJECTED_MESSAGE;

/// Errors from contact endpoint calls.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport failure: connection refused, timeout, TLS.
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    /// The endpoint answered with a non-2xx status.
    #[error("{endpoint} returned {status}: {body}")]
    Rejected {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] super::config::ConfigError),
}

impl ClientError {
    /// Message safe to show in the form, if this failure has one.
    ///
    /// Transport and configuration detail stays out of the UI; the form
    /// substitutes its generic fallback.
    pub fn user_message(&self) -> Option<String> {
        match self {
            Self::Rejected { .. } => Some(REJECTED_MESSAGE.to_string()),
            Self::Http { .. } | Self::Config(_) => None,
        }
    }

    /// Whether the server answered at all.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}
