//! Error taxonomy shared by every pipeline stage.
//!
//! Each variant maps to one failure class of a profile snapshot run. None of
//! them is recovered locally: an error aborts the run and surfaces to the CLI.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Neither a profile URL nor a username was supplied, or the value is unusable.
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// Connection failure, timeout or non-success HTTP status.
    #[error("transport error for {url}: {message}")]
    Transport { url: String, message: String },

    /// The hydration script is missing or ambiguous.
    #[error("extraction error: {message}")]
    Extraction { message: String },

    /// The hydration script (or an API response) is not valid JSON.
    #[error("malformed payload: {message}")]
    MalformedPayload { message: String },

    /// An expected field is absent from an otherwise valid document.
    #[error("schema error at `{path}`: {message}")]
    Schema { path: String, message: String },

    /// Writing the output artifact failed.
    #[error("i/o error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl AppError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
    pub fn transport(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transport {
            url: url.into(),
            message: message.into(),
        }
    }
    pub fn extraction(message: impl Into<String>) -> Self {
        Self::Extraction {
            message: message.into(),
        }
    }
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedPayload {
            message: message.into(),
        }
    }
    pub fn schema(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Schema {
            path: path.into(),
            message: message.into(),
        }
    }
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Short machine-readable code, logged as the `code` field on pipeline failures.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidInput { .. } => "invalid_input",
            AppError::Transport { .. } => "transport_error",
            AppError::Extraction { .. } => "extraction_error",
            AppError::MalformedPayload { .. } => "malformed_payload",
            AppError::Schema { .. } => "schema_error",
            AppError::Io { .. } => "io_error",
        }
    }
}

/// Converts a reqwest failure into [`AppError::Transport`].
///
/// Timeouts and status errors keep their reqwest wording so the console
/// message says what actually happened.
pub fn map_reqwest_error(url: &str, e: reqwest::Error) -> AppError {
    let message = if e.is_timeout() {
        format!("request timed out: {e}")
    } else if let Some(status) = e.status() {
        format!("unexpected status {status}")
    } else if e.is_connect() {
        format!("connection failed: {e}")
    } else {
        e.to_string()
    };

    AppError::transport(url, message)
}

/// Converts a serde_json deserialization failure into [`AppError::Schema`].
///
/// Syntax errors are not schema errors; callers parse raw text into
/// `serde_json::Value` first and map that failure with [`AppError::malformed`].
pub fn map_schema_error(root: &str, e: serde_json::Error) -> AppError {
    AppError::schema(root, e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::invalid_input("x").code(), "invalid_input");
        assert_eq!(AppError::transport("u", "x").code(), "transport_error");
        assert_eq!(AppError::extraction("x").code(), "extraction_error");
        assert_eq!(AppError::malformed("x").code(), "malformed_payload");
        assert_eq!(AppError::schema("a.b", "x").code(), "schema_error");
    }

    #[test]
    fn test_schema_error_display_names_path() {
        let err = AppError::schema("account", "missing field `id`");
        assert_eq!(
            err.to_string(),
            "schema error at `account`: missing field `id`"
        );
    }

    #[test]
    fn test_map_schema_error() {
        let e = serde_json::from_str::<std::collections::HashMap<String, i64>>(r#"{"a": "b"}"#)
            .unwrap_err();
        let err = map_schema_error("props.pageProps", e);
        assert!(matches!(err, AppError::Schema { ref path, .. } if path == "props.pageProps"));
    }
}
