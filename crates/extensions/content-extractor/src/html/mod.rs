//! [`PageDocument`] backed by a `scraper` HTML tree.

mod text;

use scraper::{ElementRef, Html, Selector};

use pagebrief_protocols::{DomError, PageDocument};

pub use text::render_visible_text;

/// Parsed HTML page.
#[derive(Debug, Clone)]
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parse a full HTML document. Malformed markup is repaired, never rejected.
    pub fn parse(source: &str) -> Self {
        Self {
            html: Html::parse_document(source),
        }
    }

    fn root(&self) -> ElementRef<'_> {
        self.html.root_element()
    }
}

fn parse_selector(selector: &str) -> Result<Selector, DomError> {
    Selector::parse(selector).map_err(|e| DomError::InvalidSelector {
        selector: selector.to_string(),
        message: format!("{:?}", e),
    })
}

impl PageDocument for HtmlDocument {
    type Node<'a> = ElementRef<'a>;

    fn query(&self, selector: &str) -> Result<Option<ElementRef<'_>>, DomError> {
        let selector = parse_selector(selector)?;
        Ok(self.root().select(&selector).next())
    }

    fn query_all(&self, selector: &str) -> Result<Vec<ElementRef<'_>>, DomError> {
        let selector = parse_selector(selector)?;
        Ok(self.root().select(&selector).collect())
    }

    fn text_of(&self, node: &ElementRef<'_>) -> Result<String, DomError> {
        Ok(render_visible_text(*node))
    }

    fn body_text(&self) -> Result<Option<String>, DomError> {
        let body = self.query("body")?;
        Ok(body.map(render_visible_text))
    }

    fn duplicate(&self) -> Result<Self, DomError> {
        Ok(self.clone())
    }

    fn remove_all(&mut self, selector: &str) -> Result<usize, DomError> {
        let selector = parse_selector(selector)?;
        let ids: Vec<_> = self.root().select(&selector).map(|el| el.id()).collect();

        let mut removed = 0;
        for id in ids {
            if let Some(mut node) = self.html.tree.get_mut(id) {
                node.detach();
                removed += 1;
            }
        }
        Ok(removed)
    }
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod tests;
