//! Application layer services implementing the snapshot pipeline.
//!
//! Services consume the [`crate::domain::gateways::PageFetcher`] trait, so every
//! stage can be exercised with a mocked transport.
//!
//! # Available Services
//!
//! - [`services::profile_service::ProfileService`] - Fetch, extract and assemble a profile
//! - [`services::link_reconciler::LinkReconciler`] - Visible and gated link reconciliation
//! - [`services::contacts::extract_contacts`] - Social contact mapping

pub mod services;
