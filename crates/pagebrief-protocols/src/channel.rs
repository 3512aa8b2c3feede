//! Channel into the page context.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ChannelError;
use crate::message::ExtractionResult;

/// Reliable request/response exchange with the page context.
///
/// `Ok(None)` means the message was delivered but the page context chose not
/// to answer it (for example an unknown message type).
#[async_trait]
pub trait ContentChannel: Send + Sync {
    async fn send_message(&self, message: Value) -> Result<Option<ExtractionResult>, ChannelError>;
}
