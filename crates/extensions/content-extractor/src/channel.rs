//! In-process channel between the host and a content script.

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use pagebrief_protocols::{ChannelError, ContentChannel, ExtractionResult};

use crate::content_script::ContentScript;

const CHANNEL_CAPACITY: usize = 16;

type Envelope = (Value, oneshot::Sender<Option<ExtractionResult>>);

/// Request/response channel backed by a spawned content script task.
///
/// Each message carries its own reply slot. The task stops when the channel
/// is dropped or [`shutdown`](Self::shutdown) is called, after which every
/// send reports [`ChannelError::Unreachable`].
pub struct InProcessChannel {
    sender: mpsc::Sender<Envelope>,
    task: JoinHandle<()>,
}

impl InProcessChannel {
    /// Spawn `script` on the current tokio runtime.
    pub fn spawn(script: ContentScript) -> Self {
        let (sender, mut receiver) = mpsc::channel::<Envelope>(CHANNEL_CAPACITY);

        let task = tokio::spawn(async move {
            while let Some((message, reply)) = receiver.recv().await {
                let response = script.handle_message(&message);
                if reply.send(response).is_err() {
                    trace!("Requester went away before the reply");
                }
            }
            debug!("Content script task finished");
        });

        Self { sender, task }
    }

    /// Stop the content script task.
    pub fn shutdown(&self) {
        self.task.abort();
    }
}

impl Drop for InProcessChannel {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[async_trait]
impl ContentChannel for InProcessChannel {
    async fn send_message(&self, message: Value) -> Result<Option<ExtractionResult>, ChannelError> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.sender
            .send((message, reply_tx))
            .await
            .map_err(|_| ChannelError::Unreachable("content script is not running".to_string()))?;

        reply_rx.await.map_err(|_| {
            ChannelError::Unreachable("content script closed without answering".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagebrief_protocols::ContentRequest;
    use serde_json::json;

    const PAGE: &str = "<body><main>The committee published its final report on Friday, recommending sweeping changes to how regional water rights are allocated.</main></body>";

    #[tokio::test]
    async fn test_request_response() {
        let channel = InProcessChannel::spawn(ContentScript::new(PAGE));
        let result = channel
            .send_message(ContentRequest::GetArticleText.to_message())
            .await
            .unwrap()
            .unwrap();
        assert!(result.is_success());
        assert!(result.text.starts_with("The committee published"));
    }

    #[tokio::test]
    async fn test_unknown_message_delivered_without_response() {
        let channel = InProcessChannel::spawn(ContentScript::new(PAGE));
        let result = channel.send_message(json!({ "type": "PING" })).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_sequential_requests() {
        let channel = InProcessChannel::spawn(ContentScript::new(PAGE));
        for _ in 0..3 {
            let result = channel
                .send_message(ContentRequest::GetArticleText.to_message())
                .await
                .unwrap();
            assert!(result.is_some());
        }
    }

    #[tokio::test]
    async fn test_unreachable_after_shutdown() {
        let channel = InProcessChannel::spawn(ContentScript::new(PAGE));
        channel.shutdown();

        let err = channel
            .send_message(ContentRequest::GetArticleText.to_message())
            .await
            .unwrap_err();
        assert!(matches!(err, ChannelError::Unreachable(_)));
    }
}
