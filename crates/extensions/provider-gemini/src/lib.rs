//! # pagebrief Provider - Gemini
//!
//! Article summarization through the Gemini `generateContent` API, with
//! fallback across a ranked list of model candidates.

mod classify;
mod client;
mod prompt;
mod summarizer;
mod types;

pub use classify::{classify, ApiFailure, Match, DEFAULT_API_ERROR_MESSAGE, RULES};
pub use client::{BackendError, GeminiClient, GenerationBackend};
pub use prompt::{build_prompt, truncate_text, TRUNCATION_MARKER};
pub use summarizer::SummaryClient;
pub use types::*;
