//! Infrastructure layer for external integrations.
//!
//! This layer implements the gateway traits defined by the domain layer and
//! wraps the third-party parsers.
//!
//! # Modules
//!
//! - [`http`] - reqwest-backed [`crate::domain::gateways::PageFetcher`]
//! - [`html`] - `__NEXT_DATA__` hydration payload extraction

pub mod html;
pub mod http;
