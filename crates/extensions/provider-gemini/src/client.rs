//! Gemini API client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use pagebrief_protocols::{ApiKey, ModelCandidate};

use crate::classify::{ApiFailure, DEFAULT_API_ERROR_MESSAGE};
use crate::types::*;

/// Failure of a single `generateContent` call.
#[derive(Debug, Clone, Error)]
pub enum BackendError {
    /// No response was received.
    #[error("{0}")]
    Transport(String),

    /// Non-2xx response.
    #[error("{}", .0.message)]
    Api(ApiFailure),

    /// 2xx response whose body is not JSON.
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// One `generateContent` call against one candidate.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    async fn generate(
        &self,
        candidate: &ModelCandidate,
        credential: &ApiKey,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, BackendError>;
}

/// Gemini API client.
pub struct GeminiClient {
    client: Client,
    base_url: String,
    timeout: Option<Duration>,
}

impl GeminiClient {
    /// Create a client for `base_url`, e.g. `https://generativelanguage.googleapis.com`.
    ///
    /// `timeout` bounds the whole request; `None` imposes no limit at all.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    fn endpoint(&self, candidate: &ModelCandidate) -> String {
        format!(
            "{}/{}/models/{}:generateContent",
            self.base_url, candidate.api_version, candidate.model
        )
    }
}

/// Extract the failure details from an error body.
fn parse_failure(http_status: u16, body: &str) -> ApiFailure {
    let detail = serde_json::from_str::<GeminiError>(body)
        .map(|e| e.error)
        .unwrap_or_default();

    let message = detail
        .message
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| DEFAULT_API_ERROR_MESSAGE.to_string());

    ApiFailure {
        http_status,
        message,
        status: detail.status,
    }
}

#[async_trait]
impl GenerationBackend for GeminiClient {
    async fn generate(
        &self,
        candidate: &ModelCandidate,
        credential: &ApiKey,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, BackendError> {
        debug!("Gemini generate_content: candidate={}", candidate);

        let response = self
            .client
            .post(self.endpoint(candidate))
            .query(&[("key", credential.expose())])
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(transport_error)?;

        if !status.is_success() {
            return Err(BackendError::Api(parse_failure(status.as_u16(), &body)));
        }

        serde_json::from_str(&body).map_err(|e| BackendError::Decode(e.to_string()))
    }
}

/// The request URL carries the credential in its query, so it is dropped.
fn transport_error(e: reqwest::Error) -> BackendError {
    BackendError::Transport(e.without_url().to_string())
}
