//! Interpretation of the command-line profile argument.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::AppError;
use crate::utils::url_normalizer::normalize_profile_url;

/// Characters the service allows in a username.
static USERNAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._-]+$").unwrap());

/// What the user asked to snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileTarget {
    /// A normalized profile URL.
    Url(String),
    /// A bare username.
    Username(String),
}

impl ProfileTarget {
    /// Parses a URL or username.
    ///
    /// Input containing `host` (case-insensitive) is treated as a URL; anything
    /// else is a username, with an optional leading `@` stripped.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] for empty input, an unusable URL, or
    /// a username with characters outside `[A-Za-z0-9._-]`.
    pub fn parse(input: &str, host: &str) -> Result<Self, AppError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(AppError::invalid_input("profile URL or username is empty"));
        }

        if input
            .to_ascii_lowercase()
            .contains(&host.to_ascii_lowercase())
        {
            let url = normalize_profile_url(input)
                .map_err(|e| AppError::invalid_input(format!("'{input}': {e}")))?;
            return Ok(Self::Url(url));
        }

        let username = input.strip_prefix('@').unwrap_or(input);
        if !USERNAME_REGEX.is_match(username) {
            return Err(AppError::invalid_input(format!(
                "'{input}' is neither a {host} URL nor a valid username"
            )));
        }

        Ok(Self::Username(username.to_string()))
    }

    pub fn supplied_url(&self) -> Option<&str> {
        match self {
            Self::Url(url) => Some(url),
            Self::Username(_) => None,
        }
    }

    pub fn supplied_username(&self) -> Option<&str> {
        match self {
            Self::Url(_) => None,
            Self::Username(username) => Some(username),
        }
    }
}
