//! Main-content heuristic.
//!
//! Three passes, first match wins:
//!
//! 1. well-known content containers, most semantic first;
//! 2. every paragraph of a noise-stripped copy of the page;
//! 3. the whole body text, which always produces something.

use std::fmt;

use tracing::{debug, warn};

use pagebrief_protocols::{DomError, ExtractionError, ExtractionResult, PageDocument};

/// Content containers tried in order by the selector pass.
pub const CONTENT_SELECTORS: &[&str] = &[
    "article",
    "[role='main']",
    "main",
    ".article-content",
    ".post-content",
    ".entry-content",
    "[itemtype*='Article']",
];

/// Subtrees stripped before the paragraph pass.
pub const NOISE_SELECTOR: &str = "script, style, nav, footer, .sidebar, .navigation";

/// A selector or paragraph pass result must be strictly longer than this.
pub const MIN_PASS_CHARS: usize = 100;

/// Results shorter than this are reported as insufficient content.
pub const MIN_USABLE_CHARS: usize = 50;

/// Terminal fallback when the page has no body text at all.
pub const NO_CONTENT_FOUND: &str = "No content found";

/// Which pass produced the extracted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionPass {
    Selector(&'static str),
    Paragraphs,
    Body,
}

impl fmt::Display for ExtractionPass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Selector(selector) => write!(f, "selector {}", selector),
            Self::Paragraphs => f.write_str("paragraphs"),
            Self::Body => f.write_str("body"),
        }
    }
}

/// Best available main-content text of `doc`, with the pass that produced it.
pub fn extract_with_pass<D: PageDocument>(doc: &D) -> Result<(ExtractionPass, String), DomError> {
    for &selector in CONTENT_SELECTORS {
        let Some(node) = doc.query(selector)? else {
            continue;
        };
        let text = doc.text_of(&node)?;
        let text = text.trim();
        if char_len(text) > MIN_PASS_CHARS {
            return Ok((ExtractionPass::Selector(selector), text.to_string()));
        }
        debug!(selector, chars = char_len(text), "Content container too short");
    }

    let mut cleaned = doc.duplicate()?;
    let removed = cleaned.remove_all(NOISE_SELECTOR)?;
    let mut paragraphs = Vec::new();
    for node in cleaned.query_all("p")? {
        let text = cleaned.text_of(&node)?;
        let text = text.trim();
        if !text.is_empty() {
            paragraphs.push(text.to_string());
        }
    }
    let joined = paragraphs.join("\n");
    if char_len(&joined) > MIN_PASS_CHARS {
        debug!(removed, paragraphs = paragraphs.len(), "Using paragraph pass");
        return Ok((ExtractionPass::Paragraphs, joined));
    }

    let body = doc
        .body_text()?
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| NO_CONTENT_FOUND.to_string());
    Ok((ExtractionPass::Body, body))
}

/// Best available main-content text of `doc`.
pub fn extract_article_text<D: PageDocument>(doc: &D) -> Result<String, DomError> {
    extract_with_pass(doc).map(|(_, text)| text)
}

/// Extraction with the usability check applied, as answered to the host.
///
/// Never fails: DOM errors and short results become an [`ExtractionResult`]
/// carrying an error message.
pub fn get_article_text<D: PageDocument>(doc: &D) -> ExtractionResult {
    match extract_with_pass(doc) {
        Ok((pass, text)) if char_len(&text) < MIN_USABLE_CHARS => {
            debug!(%pass, chars = char_len(&text), "Extracted text is too short");
            ExtractionResult::failure(&ExtractionError::InsufficientContent)
        }
        Ok((pass, text)) => {
            debug!(%pass, chars = char_len(&text), "Extracted article text");
            ExtractionResult::success(text)
        }
        Err(e) => {
            warn!("Article extraction failed: {}", e);
            ExtractionResult::failure(&ExtractionError::from(e))
        }
    }
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
#[path = "extractor_tests.rs"]
mod tests;
