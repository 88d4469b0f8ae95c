//! Gateway trait for outbound HTTP requests.

use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// HTTP method of a [`FetchRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// A single outbound request.
///
/// Each call builds its own request; headers and body are never shared
/// between calls.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
    pub url: String,
    pub method: HttpMethod,
    pub headers: Vec<(String, String)>,
    /// JSON body, sent with `content-type: application/json` when present.
    pub body: Option<Value>,
}

impl FetchRequest {
    /// Creates a `GET` request without extra headers.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: HttpMethod::Get,
            headers: Vec::new(),
            body: None,
        }
    }

    /// Creates a `POST` request carrying a JSON body.
    pub fn post_json(url: impl Into<String>, body: Value) -> Self {
        Self {
            url: url.into(),
            method: HttpMethod::Post,
            headers: Vec::new(),
            body: Some(body),
        }
    }

    /// Adds a header to the request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Looks up a header value by case-insensitive name.
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Issues HTTP requests and returns the response body as text.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::ReqwestFetcher`] - reqwest-backed transport
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Sends the request and reads the full body.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Transport`] on connection failure, timeout or a
    /// non-success status. Nothing is retried.
    async fn fetch(&self, request: FetchRequest) -> Result<String, AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_request_defaults() {
        let request = FetchRequest::get("https://linktr.ee/cktc");

        assert_eq!(request.method, HttpMethod::Get);
        assert!(request.headers.is_empty());
        assert!(request.body.is_none());
    }

    #[test]
    fn test_post_json_with_headers() {
        let request = FetchRequest::post_json("https://linktr.ee/api", json!({ "a": 1 }))
            .header("origin", "https://linktr.ee")
            .header("User-Agent", "test-agent");

        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.body, Some(json!({ "a": 1 })));
        assert_eq!(request.header_value("ORIGIN"), Some("https://linktr.ee"));
        assert_eq!(request.header_value("user-agent"), Some("test-agent"));
        assert_eq!(request.header_value("referer"), None);
    }

    #[test]
    fn test_requests_do_not_share_headers() {
        let first = FetchRequest::get("https://a").header("x-test", "1");
        let second = FetchRequest::get("https://b");

        assert_eq!(first.headers.len(), 1);
        assert!(second.headers.is_empty());
    }
}
