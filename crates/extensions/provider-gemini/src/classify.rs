//! Remote failure classification.
//!
//! Rules are checked in order and the first match wins. Message matches are
//! case-sensitive substring checks against the error message the service
//! returned.

use pagebrief_protocols::ErrorKind;

/// Message used when a failed response carries no error message.
pub const DEFAULT_API_ERROR_MESSAGE: &str = "API request failed";

/// Non-2xx response from the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiFailure {
    pub http_status: u16,
    pub message: String,
    /// `error.status` from the body, e.g. `UNAUTHENTICATED`.
    pub status: Option<String>,
}

impl ApiFailure {
    pub fn new(http_status: u16, message: impl Into<String>) -> Self {
        Self {
            http_status,
            message: message.into(),
            status: None,
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Match {
    MessageContains(&'static str),
    Status(&'static str),
}

impl Match {
    fn matches(&self, failure: &ApiFailure) -> bool {
        match self {
            Self::MessageContains(needle) => failure.message.contains(needle),
            Self::Status(status) => failure.status.as_deref() == Some(*status),
        }
    }
}

/// Ordered classification table.
pub const RULES: &[(Match, ErrorKind)] = &[
    (Match::MessageContains("not found"), ErrorKind::ModelUnavailable),
    (Match::MessageContains("not supported"), ErrorKind::ModelUnavailable),
    (Match::MessageContains("is not found"), ErrorKind::ModelUnavailable),
    (Match::MessageContains("API key"), ErrorKind::Auth),
    (Match::MessageContains("authentication"), ErrorKind::Auth),
    (Match::MessageContains("quota"), ErrorKind::Quota),
    (Match::Status("UNAUTHENTICATED"), ErrorKind::Auth),
    (Match::Status("RESOURCE_EXHAUSTED"), ErrorKind::Quota),
];

/// Classify a failed response. Unmatched failures are [`ErrorKind::UnknownApi`].
pub fn classify(failure: &ApiFailure) -> ErrorKind {
    RULES
        .iter()
        .find(|(rule, _)| rule.matches(failure))
        .map(|(_, kind)| *kind)
        .unwrap_or(ErrorKind::UnknownApi)
}
