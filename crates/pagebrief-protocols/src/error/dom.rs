//! DOM access errors.

use thiserror::Error;

/// Failure raised while querying or mutating a page document.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomError {
    #[error("Invalid selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },

    #[error("Node is no longer attached to the document")]
    DetachedNode,

    /// Raw failure reported by the document backend. May carry an empty message.
    #[error("{0}")]
    Access(String),
}
