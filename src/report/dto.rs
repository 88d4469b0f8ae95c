//! Serializable snapshot written to the output artifact.

use serde::Serialize;

use crate::domain::entities::{Contact, GateResolution, Link, ProfileRecord};
use crate::utils::timestamp::format_epoch_millis;

/// JSON document written to `linktree_<username>.json`.
///
/// Links and contacts are lists of `{title, url}` objects, so untitled or
/// identically titled entries are kept.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSnapshot {
    pub username: String,
    pub url: String,
    pub id: i64,
    pub avatar: Option<String>,
    pub is_active: bool,
    pub description: Option<String>,
    pub created_at_unix: i64,
    pub updated_at_unix: i64,
    /// RFC 3339 UTC rendering of `created_at_unix`.
    pub created_at: Option<String>,
    /// RFC 3339 UTC rendering of `updated_at_unix`.
    pub updated_at: Option<String>,
    pub links: Vec<LinkItem>,
    pub contacts: Vec<ContactItem>,
    pub gates: GateResolution,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkItem {
    pub title: Option<String>,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactItem {
    pub title: String,
    pub url: Option<String>,
}

impl From<&Link> for LinkItem {
    fn from(link: &Link) -> Self {
        Self {
            title: link.title.clone(),
            url: link.url.clone(),
        }
    }
}

impl From<&Contact> for ContactItem {
    fn from(contact: &Contact) -> Self {
        Self {
            title: contact.title.clone(),
            url: contact.url.clone(),
        }
    }
}

impl From<&ProfileRecord> for ProfileSnapshot {
    fn from(record: &ProfileRecord) -> Self {
        Self {
            username: record.username.clone(),
            url: record.url.clone(),
            id: record.id,
            avatar: record.avatar_image.clone(),
            is_active: record.is_active,
            description: record.description.clone(),
            created_at_unix: record.created_at,
            updated_at_unix: record.updated_at,
            created_at: format_epoch_millis(record.created_at),
            updated_at: format_epoch_millis(record.updated_at),
            links: record.links.iter().map(LinkItem::from).collect(),
            contacts: record.contacts.iter().map(ContactItem::from).collect(),
            gates: record.gates.clone(),
        }
    }
}
