//! Channel errors.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChannelError {
    #[error("Receiving end does not exist: {0}")]
    Unreachable(String),

    #[error("Invalid message: {0}")]
    InvalidMessage(String),
}
