//! Gemini summarization configuration.

use serde::{Deserialize, Serialize};

use pagebrief_protocols::ModelCandidate;

/// Gemini endpoint and fallback configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// Service root; the API version is appended per candidate.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Fallback order, most preferred first.
    #[serde(default = "default_candidates")]
    pub candidates: Vec<ModelCandidate>,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,

    /// Character budget for the article text sent in the prompt.
    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,

    /// Per-request timeout. Unset means requests may wait indefinitely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,

    /// Harm categories sent with the safety threshold below.
    #[serde(default = "default_safety_categories")]
    pub safety_categories: Vec<String>,

    #[serde(default = "default_safety_threshold")]
    pub safety_threshold: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            candidates: default_candidates(),
            temperature: default_temperature(),
            max_output_tokens: default_max_output_tokens(),
            max_input_chars: default_max_input_chars(),
            request_timeout_secs: None,
            safety_categories: default_safety_categories(),
            safety_threshold: default_safety_threshold(),
        }
    }
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

/// Newest and most capable first, oldest stable last.
pub fn default_candidates() -> Vec<ModelCandidate> {
    vec![
        ModelCandidate::new("v1beta", "gemini-2.5-flash"),
        ModelCandidate::new("v1beta", "gemini-3-flash-preview"),
        ModelCandidate::new("v1beta", "gemini-2.5-flash-lite"),
        ModelCandidate::new("v1beta", "gemini-1.5-flash-001"),
        ModelCandidate::new("v1beta", "gemini-1.5-flash"),
    ]
}

fn default_temperature() -> f32 {
    0.2
}

fn default_max_output_tokens() -> u32 {
    2048
}

fn default_max_input_chars() -> usize {
    20_000
}

fn default_safety_categories() -> Vec<String> {
    [
        "HARM_CATEGORY_HATE_SPEECH",
        "HARM_CATEGORY_SEXUALLY_EXPLICIT",
        "HARM_CATEGORY_DANGEROUS_CONTENT",
        "HARM_CATEGORY_HARASSMENT",
        "HARM_CATEGORY_CIVIC_INTEGRITY",
    ]
    .iter()
    .map(|c| c.to_string())
    .collect()
}

fn default_safety_threshold() -> String {
    "BLOCK_NONE".to_string()
}
