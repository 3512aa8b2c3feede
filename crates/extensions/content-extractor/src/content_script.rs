//! Page-context message handler.

use serde_json::Value;
use tracing::debug;

use pagebrief_protocols::{ContentRequest, ExtractionResult};

use crate::extractor::get_article_text;
use crate::html::HtmlDocument;

/// Content script bound to one loaded page.
///
/// Holds the page source and parses it for every request, so the handler can
/// move freely between tasks.
#[derive(Debug, Clone)]
pub struct ContentScript {
    source: String,
}

impl ContentScript {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Answer one inbound message.
    ///
    /// Returns `None` for anything other than a `GET_ARTICLE_TEXT` request,
    /// which the channel delivers to the host as "no response".
    pub fn handle_message(&self, message: &Value) -> Option<ExtractionResult> {
        let Some(request) = ContentRequest::parse(message) else {
            debug!("Ignoring unrecognized message");
            return None;
        };

        match request {
            ContentRequest::GetArticleText => {
                let doc = HtmlDocument::parse(&self.source);
                Some(get_article_text(&doc))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagebrief_protocols::error::INSUFFICIENT_CONTENT_MESSAGE;
    use serde_json::json;

    const ARTICLE: &str = "<html><body><article><p>Rust gives systems programmers memory safety without a garbage collector, and its tooling has matured considerably over the last few years.</p></article></body></html>";

    #[test]
    fn test_get_article_text_request() {
        let script = ContentScript::new(ARTICLE);
        let result = script
            .handle_message(&json!({ "type": "GET_ARTICLE_TEXT" }))
            .unwrap();
        assert!(result.is_success());
        assert!(result.text.starts_with("Rust gives systems programmers"));
    }

    #[test]
    fn test_short_page_reports_insufficient_content() {
        let script = ContentScript::new("<body><p>Hi.</p></body>");
        let result = script
            .handle_message(&json!({ "type": "GET_ARTICLE_TEXT" }))
            .unwrap();
        assert!(result.text.is_empty());
        assert_eq!(result.error.as_deref(), Some(INSUFFICIENT_CONTENT_MESSAGE));
    }

    #[test]
    fn test_unknown_messages_get_no_response() {
        let script = ContentScript::new(ARTICLE);
        assert!(script.handle_message(&json!({ "type": "PING" })).is_none());
        assert!(script.handle_message(&json!({ "action": "x" })).is_none());
        assert!(script.handle_message(&json!(42)).is_none());
    }

    #[test]
    fn test_handler_is_repeatable() {
        let script = ContentScript::new(ARTICLE);
        let msg = ContentRequest::GetArticleText.to_message();
        let first = script.handle_message(&msg);
        let second = script.handle_message(&msg);
        assert_eq!(first, second);
    }
}
