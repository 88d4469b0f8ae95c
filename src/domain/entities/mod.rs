//! Core domain entities of a profile snapshot.
//!
//! Entities are plain data structures. Raw payload types mirror the service's
//! JSON and are deserialized once; output types carry the normalized data.
//!
//! # Entity Types
//!
//! - [`HydrationDocument`] - The typed `props.pageProps` payload
//! - [`Link`] - An outbound link with a guaranteed URL
//! - [`Contact`] - A social-platform reference
//! - [`GatedLinkId`], [`GateRequest`], [`GateResponse`] - Sensitive-content gate exchange
//! - [`ProfileRecord`] - The assembled snapshot

pub mod contact;
pub mod gate;
pub mod hydration;
pub mod link;
pub mod profile;

pub use contact::Contact;
pub use gate::{GateRequest, GateResolution, GateResponse, GatedLinkId, RevealedLink};
pub use hydration::{AccountPayload, HydrationDocument, RawLink, RawSocialLink};
pub use link::Link;
pub use profile::ProfileRecord;
