//! Content extraction errors.

use thiserror::Error;

use super::{ChannelError, DomError};

/// Message reported when a page yields too little text.
pub const INSUFFICIENT_CONTENT_MESSAGE: &str = "Not enough content found on this page";

/// Message reported when a DOM failure carries no message of its own.
pub const GENERIC_EXTRACTION_MESSAGE: &str = "Error extracting text";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("Not enough content found on this page")]
    InsufficientContent,

    #[error("{0}")]
    DomAccess(String),

    #[error("Could not access page content: {0}")]
    ChannelUnreachable(String),
}

impl From<DomError> for ExtractionError {
    fn from(err: DomError) -> Self {
        let message = err.to_string();
        if message.trim().is_empty() {
            Self::DomAccess(GENERIC_EXTRACTION_MESSAGE.to_string())
        } else {
            Self::DomAccess(message)
        }
    }
}

impl From<ChannelError> for ExtractionError {
    fn from(err: ChannelError) -> Self {
        Self::ChannelUnreachable(err.to_string())
    }
}
