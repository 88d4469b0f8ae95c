//! Contact entity representing a social-platform reference.

use serde::Serialize;

/// A social-platform reference such as `INSTAGRAM` or `EMAIL_ADDRESS`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub url: Option<String>,
    /// Platform type as reported by the service.
    pub title: String,
}

impl Contact {
    pub fn new(url: Option<String>, title: String) -> Self {
        Self { url, title }
    }
}
