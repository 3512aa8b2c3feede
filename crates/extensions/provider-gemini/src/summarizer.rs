//! Summarization with model fallback.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, info, warn};

use pagebrief_config::GeminiConfig;
use pagebrief_protocols::error::CONNECTIVITY_MESSAGE;
use pagebrief_protocols::{SummaryError, SummaryRequest};

use crate::classify::classify;
use crate::client::{BackendError, GeminiClient, GenerationBackend};
use crate::prompt::{build_prompt, truncate_text};
use crate::types::{GenerateContentRequest, GenerationConfig, SafetySetting};

/// Summarizes article text, trying each configured candidate in order.
///
/// Only a "model unavailable" failure moves on to the next candidate; every
/// other outcome ends the request.
pub struct SummaryClient {
    backend: Arc<dyn GenerationBackend>,
    config: GeminiConfig,
}

impl SummaryClient {
    pub fn new(backend: Arc<dyn GenerationBackend>, config: GeminiConfig) -> Self {
        Self { backend, config }
    }

    /// Client backed by [`GeminiClient`] at the configured base URL.
    pub fn from_config(config: GeminiConfig) -> Result<Self, reqwest::Error> {
        let timeout = config.request_timeout_secs.map(Duration::from_secs);
        let backend = GeminiClient::new(config.base_url.clone(), timeout)?;
        Ok(Self::new(Arc::new(backend), config))
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Request body for `prompt` with the configured safety and generation settings.
    pub fn build_request(&self, prompt: String) -> GenerateContentRequest {
        let mut request = GenerateContentRequest::from_prompt(prompt);
        request.safety_settings = self
            .config
            .safety_categories
            .iter()
            .map(|category| SafetySetting {
                category: category.clone(),
                threshold: self.config.safety_threshold.clone(),
            })
            .collect();
        request.generation_config = Some(GenerationConfig {
            temperature: Some(self.config.temperature),
            max_output_tokens: Some(self.config.max_output_tokens),
        });
        request
    }

    pub async fn summarize(&self, request: &SummaryRequest) -> Result<String, SummaryError> {
        if request.text.trim().is_empty() {
            return Err(SummaryError::EmptyText);
        }
        if !request.credential.is_well_formed() {
            return Err(SummaryError::InvalidCredential);
        }

        let text = truncate_text(&request.text, self.config.max_input_chars);
        let body = self.build_request(build_prompt(request.style, &text));

        let mut last_failure: Option<String> = None;

        for (index, candidate) in self.config.candidates.iter().enumerate() {
            debug!(
                %candidate,
                attempt = index + 1,
                style = %request.style,
                "Requesting summary"
            );

            let response = match self
                .backend
                .generate(candidate, &request.credential, &body)
                .await
            {
                Ok(response) => response,
                Err(BackendError::Api(failure)) => {
                    let kind = classify(&failure);
                    if kind.continues_fallback() {
                        warn!(
                            %candidate,
                            status = failure.http_status,
                            "Model unavailable, trying next: {}",
                            failure.message
                        );
                        last_failure = Some(failure.message);
                        continue;
                    }
                    error!(%candidate, ?kind, "Gemini request failed: {}", failure.message);
                    return Err(SummaryError::from_kind(kind, failure.message));
                }
                Err(BackendError::Transport(message)) => {
                    error!(%candidate, "Could not reach Gemini: {}", message);
                    return Err(SummaryError::Connectivity(message));
                }
                Err(e @ BackendError::Decode(_)) => {
                    error!(%candidate, "{}", e);
                    return Err(SummaryError::Api(e.to_string()));
                }
            };

            return match response.first_text() {
                Some(summary) => {
                    info!(%candidate, chars = summary.chars().count(), "Summary generated");
                    Ok(summary.to_string())
                }
                None => {
                    error!(%candidate, "Response contained no summary text");
                    Err(SummaryError::NoSummary)
                }
            };
        }

        error!("All model candidates failed");
        Err(match last_failure {
            Some(message) => SummaryError::ModelUnavailable(message),
            None => SummaryError::Connectivity(CONNECTIVITY_MESSAGE.to_string()),
        })
    }
}

#[cfg(test)]
#[path = "summarizer_tests.rs"]
mod tests;
