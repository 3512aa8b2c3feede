//! Page-context content extraction for pagebrief.
//!
//! Provides the article text heuristic, a `scraper`-backed [`HtmlDocument`],
//! the message handler that answers `GET_ARTICLE_TEXT`, and the in-process
//! channel the host uses to reach it.

mod channel;
mod content_script;
mod extractor;
mod fetch;
mod html;

pub use channel::InProcessChannel;
pub use content_script::ContentScript;
pub use extractor::{
    extract_article_text, extract_with_pass, get_article_text, ExtractionPass,
    CONTENT_SELECTORS, MIN_PASS_CHARS, MIN_USABLE_CHARS, NOISE_SELECTOR, NO_CONTENT_FOUND,
};
pub use fetch::{load_page_source, FetchError, PageFetcher};
pub use html::HtmlDocument;
