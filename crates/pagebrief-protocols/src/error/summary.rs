//! Summarization errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Normalized message for a rejected or malformed credential.
pub const INVALID_API_KEY_MESSAGE: &str = "Invalid API key. Please check your settings.";

/// Normalized message for an exhausted usage quota.
pub const QUOTA_EXCEEDED_MESSAGE: &str = "API quota exceeded. Please try again later.";

/// Message used when every candidate was exhausted without a recorded failure.
pub const CONNECTIVITY_MESSAGE: &str =
    "Failed to connect to Gemini API. Please check your API key and try again.";

/// Error classes of the summarization flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Request rejected locally before any network call.
    Validation,
    /// Remote service rejected the credential.
    Auth,
    /// Rate or usage limit reached.
    Quota,
    /// Candidate model unknown or unsupported; drives fallback.
    ModelUnavailable,
    /// Any other remote failure, passed through verbatim.
    UnknownApi,
    /// Successful response without summary text.
    NoSummary,
    /// Transport failure or exhaustion without a classified error.
    Connectivity,
}

impl ErrorKind {
    /// Whether the fallback loop moves on to the next candidate.
    pub fn continues_fallback(self) -> bool {
        matches!(self, Self::ModelUnavailable)
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SummaryError {
    #[error("No content to summarize")]
    EmptyText,

    #[error("Invalid API key. Please check your settings.")]
    InvalidCredential,

    #[error("Invalid API key. Please check your settings.")]
    AuthenticationFailed,

    #[error("API quota exceeded. Please try again later.")]
    QuotaExceeded,

    #[error("{0}")]
    ModelUnavailable(String),

    #[error("{0}")]
    Api(String),

    #[error("No summary generated. Please try again.")]
    NoSummary,

    #[error("{0}")]
    Connectivity(String),
}

impl SummaryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyText | Self::InvalidCredential => ErrorKind::Validation,
            Self::AuthenticationFailed => ErrorKind::Auth,
            Self::QuotaExceeded => ErrorKind::Quota,
            Self::ModelUnavailable(_) => ErrorKind::ModelUnavailable,
            Self::Api(_) => ErrorKind::UnknownApi,
            Self::NoSummary => ErrorKind::NoSummary,
            Self::Connectivity(_) => ErrorKind::Connectivity,
        }
    }

    /// Build the terminal error for a classified remote failure message.
    pub fn from_kind(kind: ErrorKind, message: impl Into<String>) -> Self {
        match kind {
            ErrorKind::Validation => Self::InvalidCredential,
            ErrorKind::Auth => Self::AuthenticationFailed,
            ErrorKind::Quota => Self::QuotaExceeded,
            ErrorKind::ModelUnavailable => Self::ModelUnavailable(message.into()),
            ErrorKind::UnknownApi => Self::Api(message.into()),
            ErrorKind::NoSummary => Self::NoSummary,
            ErrorKind::Connectivity => Self::Connectivity(message.into()),
        }
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
