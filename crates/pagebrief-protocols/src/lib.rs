//! # pagebrief Protocols
//!
//! Protocol definitions (traits) and shared types for pagebrief.
//! Contains only interface definitions - no implementations.
//!
//! ## Core Traits
//!
//! - [`PageDocument`] - Query/mutation capability over a parsed page
//! - [`ContentChannel`] - Request/response channel into the page context
//! - [`KeyValueStore`] - Persistent settings storage

pub mod channel;
pub mod document;
pub mod error;
pub mod message;
pub mod store;
pub mod summary;

pub use channel::ContentChannel;
pub use document::PageDocument;
pub use error::{
    ChannelError, DomError, ErrorKind, ExtractionError, StoreError, SummaryError,
};
pub use message::{ContentRequest, ExtractionResult, GET_ARTICLE_TEXT};
pub use store::{KeyValueStore, API_KEY_STORAGE_KEY};
pub use summary::{ApiKey, ModelCandidate, SummaryRequest, SummaryStyle};
