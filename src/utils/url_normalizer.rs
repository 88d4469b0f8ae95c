//! Profile URL normalization.
//!
//! Command-line input such as `linktr.ee/Someone#top` is turned into a
//! canonical `https://linktr.ee/Someone` before it is requested.

use url::Url;

/// Errors that can occur during URL normalization.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL has no host")]
    MissingHost,
}

/// Normalizes a profile URL.
///
/// # Normalization Rules
///
/// 1. **Scheme**: `https://` is assumed when missing; only HTTP and HTTPS are allowed
/// 2. **Hostname**: lowercased by the URL parser
/// 3. **Default ports**: removed
/// 4. **Fragments**: removed
/// 5. **Path**: trailing slash removed, case preserved
///
/// # Errors
///
/// Returns [`UrlNormalizationError::InvalidFormat`] for unparseable input,
/// [`UrlNormalizationError::UnsupportedProtocol`] for non-HTTP(S) schemes and
/// [`UrlNormalizationError::MissingHost`] when there is no host.
pub fn normalize_profile_url(input: &str) -> Result<String, UrlNormalizationError> {
    let input = input.trim();
    let with_scheme = if input.contains("://") {
        input.to_string()
    } else {
        format!("https://{input}")
    };

    let mut url =
        Url::parse(&with_scheme).map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlNormalizationError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlNormalizationError::MissingHost);
    }

    url.set_fragment(None);

    let trimmed = url.path().trim_end_matches('/').to_string();
    url.set_path(&trimmed);

    let mut normalized = url.to_string();
    if url.query().is_none() && normalized.ends_with('/') {
        normalized.pop();
    }

    Ok(normalized)
}
