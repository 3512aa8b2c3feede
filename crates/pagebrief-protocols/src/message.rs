//! Messages exchanged with the page context.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ExtractionError;

/// Wire name of the article text request.
pub const GET_ARTICLE_TEXT: &str = "GET_ARTICLE_TEXT";

/// Requests understood by the page context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ContentRequest {
    #[serde(rename = "GET_ARTICLE_TEXT")]
    GetArticleText,
}

impl ContentRequest {
    /// Parse a raw inbound message. Unknown or malformed messages yield `None`.
    pub fn parse(message: &Value) -> Option<Self> {
        serde_json::from_value(message.clone()).ok()
    }

    /// Encode as a raw message.
    pub fn to_message(self) -> Value {
        match self {
            Self::GetArticleText => serde_json::json!({ "type": GET_ARTICLE_TEXT }),
        }
    }
}

/// Response to [`ContentRequest::GetArticleText`].
///
/// Exactly one side is meaningful: either `text` holds usable article text
/// and `error` is `None`, or `text` is empty and `error` explains why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub text: String,
    pub error: Option<String>,
}

impl ExtractionResult {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            error: None,
        }
    }

    pub fn failure(error: &ExtractionError) -> Self {
        Self {
            text: String::new(),
            error: Some(error.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none() && !self.text.is_empty()
    }
}

impl From<Result<String, ExtractionError>> for ExtractionResult {
    fn from(result: Result<String, ExtractionError>) -> Self {
        match result {
            Ok(text) => Self::success(text),
            Err(e) => Self::failure(&e),
        }
    }
}
