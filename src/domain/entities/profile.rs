//! Assembled profile record.

use super::{Contact, GateResolution, Link};

/// A normalized snapshot of one public profile.
///
/// Built once by [`crate::application::services::ProfileService`] and never
/// mutated afterwards. Owns its links and contacts.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileRecord {
    pub username: String,
    /// Canonical profile URL: the one supplied by the caller, or derived from the username.
    pub url: String,
    pub avatar_image: Option<String>,
    pub id: i64,
    pub is_active: bool,
    pub description: Option<String>,
    /// Milliseconds since the Unix epoch.
    pub created_at: i64,
    /// Milliseconds since the Unix epoch.
    pub updated_at: i64,
    pub links: Vec<Link>,
    pub contacts: Vec<Contact>,
    pub gates: GateResolution,
}

impl ProfileRecord {
    /// Returns true if some gated links could not be revealed.
    pub fn has_hidden_links(&self) -> bool {
        !self.gates.is_complete()
    }
}
