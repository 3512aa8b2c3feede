//! Host flows: the summarize trigger and its rendering.

use std::future::Future;
use std::process::ExitCode;

use thiserror::Error;
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use pagebrief_content_extractor::{
    load_page_source, ContentScript, FetchError, InProcessChannel, PageFetcher,
};
use pagebrief_protocols::{
    ApiKey, ContentChannel, ContentRequest, ExtractionResult, KeyValueStore, StoreError,
    SummaryError, SummaryRequest, SummaryStyle, API_KEY_STORAGE_KEY,
};
use pagebrief_provider_gemini::SummaryClient;

/// Shown when the page context yields no text and no reason.
pub const EXTRACTION_FAILED_MESSAGE: &str =
    "Could not extract article text from this page. Please ensure the page has sufficient content.";

/// Failure of a summarize flow. The display text is what the host shows.
#[derive(Debug, Error)]
pub enum FlowError {
    #[error("API key not found. Please set your API key with `pagebrief key set <KEY>`.")]
    MissingApiKey,

    #[error("Error: Could not access page content. This page may not be accessible by the extension.")]
    PageUnreachable,

    #[error("Error: {0}")]
    PageLoad(#[from] FetchError),

    /// Extraction produced no text; carries the reason shown to the user.
    #[error("{0}")]
    Extraction(String),

    #[error("Error: {0}")]
    Summary(#[from] SummaryError),

    #[error("Error: {0}")]
    Store(#[from] StoreError),
}

/// Read the stored credential. Missing and empty values are both absent.
pub fn read_api_key(store: &dyn KeyValueStore) -> Result<Option<ApiKey>, StoreError> {
    Ok(store
        .get(API_KEY_STORAGE_KEY)?
        .filter(|key| !key.is_empty())
        .map(ApiKey::new))
}

/// Ask the page context for its article text.
pub async fn request_article_text(channel: &dyn ContentChannel) -> Result<String, FlowError> {
    let response = channel
        .send_message(ContentRequest::GetArticleText.to_message())
        .await
        .map_err(|e| {
            warn!("Content channel failed: {}", e);
            FlowError::PageUnreachable
        })?;

    match response {
        Some(ExtractionResult { text, .. }) if !text.is_empty() => Ok(text),
        Some(ExtractionResult { error, .. }) => Err(FlowError::Extraction(
            error
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| EXTRACTION_FAILED_MESSAGE.to_string()),
        )),
        None => Err(FlowError::Extraction(EXTRACTION_FAILED_MESSAGE.to_string())),
    }
}

/// Load `source` and attach a content script to it.
pub async fn open_page(fetcher: &PageFetcher, source: &str) -> Result<InProcessChannel, FlowError> {
    let html = load_page_source(fetcher, source).await?;
    info!(source, bytes = html.len(), "Page loaded");
    Ok(InProcessChannel::spawn(ContentScript::new(html)))
}

/// Credential, page, extraction, summary; in that order, stopping at the
/// first failure. `page` is not polled until a credential is present.
pub async fn summarize_page<C, P>(
    store: &dyn KeyValueStore,
    page: P,
    summarizer: &SummaryClient,
    style: SummaryStyle,
) -> Result<String, FlowError>
where
    C: ContentChannel,
    P: Future<Output = Result<C, FlowError>>,
{
    let span = info_span!("summarize", flow_id = %Uuid::new_v4(), %style);
    run_summarize(store, page, summarizer, style)
        .instrument(span)
        .await
}

async fn run_summarize<C, P>(
    store: &dyn KeyValueStore,
    page: P,
    summarizer: &SummaryClient,
    style: SummaryStyle,
) -> Result<String, FlowError>
where
    C: ContentChannel,
    P: Future<Output = Result<C, FlowError>>,
{
    let credential = read_api_key(store)?.ok_or(FlowError::MissingApiKey)?;
    let channel = page.await?;
    let text = request_article_text(&channel).await?;
    info!(chars = text.chars().count(), "Article text extracted");

    let request = SummaryRequest::new(text, style, credential);
    Ok(summarizer.summarize(&request).await?)
}

/// Text the host displays for a finished flow.
pub fn render_outcome(outcome: &Result<String, FlowError>) -> String {
    match outcome {
        Ok(summary) => summary.clone(),
        Err(e) => e.to_string(),
    }
}

/// Process status for a finished flow: failure iff the flow failed.
pub fn exit_code(outcome: &Result<String, FlowError>) -> ExitCode {
    match outcome {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

/// Whether displayed text is a real summary worth copying.
pub fn is_copyable_summary(text: &str) -> bool {
    !(text.trim().is_empty() || text.contains("Select a summary type") || text.contains("Error:"))
}

#[cfg(test)]
#[path = "flow_tests.rs"]
mod tests;
