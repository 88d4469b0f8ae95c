//! Domain layer containing the snapshot data model and gateway contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Raw payload types and normalized profile data
//! - [`gateways`] - Outbound I/O trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Gateway traits define contracts implemented by the infrastructure layer
//! - Pipeline logic lives in services (see [`crate::application::services`])

pub mod entities;
pub mod gateways;
