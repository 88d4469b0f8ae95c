//! # Linktree Snapshot
//!
//! Fetches a public Linktree profile page, extracts its embedded
//! `__NEXT_DATA__` hydration payload and normalizes it into a structured
//! record of profile metadata, outbound links and social contacts.
//!
//! ## Architecture
//!
//! The crate keeps a clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Payload and profile entities, gateway traits
//! - **Application Layer** ([`application`]) - Link reconciliation and profile assembly
//! - **Infrastructure Layer** ([`infrastructure`]) - reqwest transport, HTML extraction
//! - **Report Layer** ([`report`]) - JSON artifact and console output
//!
//! ## Pipeline
//!
//! fetch page → extract hydration document → reconcile links (at most one
//! gate confirmation request) → extract contacts → assemble → report.
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run -- cktc
//! cargo run -- https://linktr.ee/cktc --output-dir ./output
//! ```
//!
//! ## Configuration
//!
//! Runtime options are loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod report;
pub mod utils;

pub mod config;
pub mod runner;

pub use error::AppError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{GateFailurePolicy, LinkReconciler, ProfileService};
    pub use crate::config::Config;
    pub use crate::domain::entities::{Contact, GateResolution, Link, ProfileRecord};
    pub use crate::domain::gateways::{FetchRequest, HttpMethod, PageFetcher};
    pub use crate::error::AppError;
    pub use crate::infrastructure::http::ReqwestFetcher;
    pub use crate::utils::profile_target::ProfileTarget;
}
