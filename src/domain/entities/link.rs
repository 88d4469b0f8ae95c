//! Link entity representing one outbound profile link.

use serde::Serialize;

/// An outbound link on a profile.
///
/// Links rendered on the page carry a title. Links revealed by the gate
/// confirmation endpoint never do, because the endpoint only returns URLs.
/// A link without a URL is never constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub url: String,
    pub title: Option<String>,
}

impl Link {
    /// Creates a link that was visible on the page.
    pub fn visible(url: String, title: Option<String>) -> Self {
        Self { url, title }
    }

    /// Creates a link revealed through the gate confirmation endpoint.
    pub fn revealed(url: String) -> Self {
        Self { url, title: None }
    }

    /// Returns the title, or a placeholder when the link has none.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("(untitled)")
    }
}
