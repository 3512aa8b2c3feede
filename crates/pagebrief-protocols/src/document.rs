//! Page document capability.
//!
//! The extractor never walks a concrete DOM. It asks a [`PageDocument`] to
//! resolve selectors, render text and drop subtrees, so any backend (a parsed
//! HTML tree, a live browser page, a synthetic test fixture) can be plugged in.

use crate::error::DomError;

/// Query and mutation capability over a parsed page.
///
/// Implementations must tolerate malformed trees: a selector that matches
/// nothing is `Ok(None)` / `Ok(vec![])`, never an error.
pub trait PageDocument: Sized {
    /// Handle to an element inside this document.
    type Node<'a>
    where
        Self: 'a;

    /// First element matching `selector` in document order.
    fn query(&self, selector: &str) -> Result<Option<Self::Node<'_>>, DomError>;

    /// Every element matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Result<Vec<Self::Node<'_>>, DomError>;

    /// Rendered (visible) text of `node`, untrimmed.
    fn text_of(&self, node: &Self::Node<'_>) -> Result<String, DomError>;

    /// Rendered text of the document body, `None` when there is no body.
    fn body_text(&self) -> Result<Option<String>, DomError>;

    /// Deep copy of the whole document. Mutating the copy never touches `self`.
    fn duplicate(&self) -> Result<Self, DomError>;

    /// Detach every element matching `selector`. Returns how many were removed.
    fn remove_all(&mut self, selector: &str) -> Result<usize, DomError>;
}
