//! Pipeline services for the application layer.

pub mod contacts;
pub mod link_reconciler;
pub mod profile_service;

pub use contacts::extract_contacts;
pub use link_reconciler::{GateFailurePolicy, LinkReconciler, ReconciledLinks, classify_links};
pub use profile_service::ProfileService;
