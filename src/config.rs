//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before any request
//! is issued. Command-line flags override individual values afterwards.
//!
//! ## Optional Variables
//!
//! - `LINKTREE_BASE_URL` - Service origin (default: `https://linktr.ee`)
//! - `LINKTREE_HOST` - Host substring that marks input as a URL (default: host of the base URL)
//! - `GATES_PATH` - Gate confirmation endpoint path (default: `/api/profiles/validation/gates`)
//! - `REQUEST_TIMEOUT_SECS` - Per-request timeout (default: 30, range: 1-300)
//! - `USER_AGENT` - Browser user agent sent with every request
//! - `OUTPUT_DIR` - Directory for JSON snapshots (default: `./output`)
//! - `GATE_FAILURE_POLICY` - `abort` or `degrade` (default: `abort`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use crate::application::services::GateFailurePolicy;
use anyhow::{Context, Result};
use std::env;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://linktr.ee";
pub const DEFAULT_GATES_PATH: &str = "/api/profiles/validation/gates";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36";

/// Snapshot configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Service origin without a trailing slash, e.g. `https://linktr.ee`.
    pub base_url: String,
    /// Substring that identifies a profile URL on the command line.
    pub profile_host: String,
    pub gates_path: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub output_dir: String,
    pub gate_failure_policy: GateFailurePolicy,
    pub log_level: String,
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            profile_host: "linktr.ee".to_string(),
            gates_path: DEFAULT_GATES_PATH.to_string(),
            request_timeout_secs: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            output_dir: "./output".to_string(),
            gate_failure_policy: GateFailurePolicy::Abort,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `GATE_FAILURE_POLICY` holds an unknown value or the
    /// base URL has no host.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let base_url = env::var("LINKTREE_BASE_URL")
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or(defaults.base_url);

        let profile_host = match env::var("LINKTREE_HOST") {
            Ok(host) => host,
            Err(_) => Self::host_of(&base_url)?,
        };

        let gates_path = env::var("GATES_PATH").unwrap_or(defaults.gates_path);

        let request_timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.request_timeout_secs);

        let user_agent = env::var("USER_AGENT").unwrap_or(defaults.user_agent);
        let output_dir = env::var("OUTPUT_DIR").unwrap_or(defaults.output_dir);

        let gate_failure_policy = match env::var("GATE_FAILURE_POLICY") {
            Ok(v) => v
                .parse()
                .map_err(anyhow::Error::msg)
                .context("Failed to parse GATE_FAILURE_POLICY")?,
            Err(_) => defaults.gate_failure_policy,
        };

        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        Ok(Self {
            base_url,
            profile_host,
            gates_path,
            request_timeout_secs,
            user_agent,
            output_dir,
            gate_failure_policy,
            log_level,
            log_format,
        })
    }

    fn host_of(base_url: &str) -> Result<String> {
        let url = Url::parse(base_url)
            .with_context(|| format!("LINKTREE_BASE_URL is not a valid URL: '{base_url}'"))?;
        url.host_str()
            .map(str::to_string)
            .with_context(|| format!("LINKTREE_BASE_URL has no host: '{base_url}'"))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `base_url` is not an http(s) URL
    /// - `profile_host` is empty
    /// - `gates_path` does not start with `/`
    /// - `request_timeout_secs` is outside 1-300
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "LINKTREE_BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if self.profile_host.trim().is_empty() {
            anyhow::bail!("LINKTREE_HOST must not be empty");
        }

        if !self.gates_path.starts_with('/') {
            anyhow::bail!("GATES_PATH must start with '/', got '{}'", self.gates_path);
        }

        if self.request_timeout_secs == 0 || self.request_timeout_secs > 300 {
            anyhow::bail!(
                "REQUEST_TIMEOUT_SECS must be between 1 and 300, got {}",
                self.request_timeout_secs
            );
        }

        if self.user_agent.trim().is_empty() {
            anyhow::bail!("USER_AGENT must not be empty");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Full URL of the gate confirmation endpoint.
    pub fn gates_url(&self) -> String {
        format!("{}{}", self.base_url, self.gates_path)
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::debug!("Configuration loaded:");
        tracing::debug!("  Base URL: {}", self.base_url);
        tracing::debug!("  Profile host: {}", self.profile_host);
        tracing::debug!("  Gates endpoint: {}", self.gates_url());
        tracing::debug!("  Request timeout: {}s", self.request_timeout_secs);
        tracing::debug!("  Output dir: {}", self.output_dir);
        tracing::debug!("  Gate failure policy: {}", self.gate_failure_policy);
        tracing::debug!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
