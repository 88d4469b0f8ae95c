//! Typed view of the `props.pageProps` hydration document.
//!
//! Only the fields the snapshot reads are modelled; everything else in the
//! payload is ignored by serde.

use serde::Deserialize;
use serde_with::{DisplayFromStr, PickFirst, serde_as};

/// Link type the service uses for payment widgets.
pub const LINK_TYPE_COMMERCE_PAY: &str = "COMMERCE_PAY";
/// Link type the service uses for section headers.
pub const LINK_TYPE_HEADER: &str = "HEADER";

/// The `props.pageProps` sub-document embedded in a profile page.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HydrationDocument {
    pub account: AccountPayload,
    pub links: Vec<RawLink>,
    pub social_links: Vec<RawSocialLink>,
}

/// Account metadata as rendered by the service.
///
/// Nullable fields still have to be present; a missing key fails
/// deserialization instead of silently becoming `None`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountPayload {
    pub username: String,
    #[serde(deserialize_with = "Option::deserialize")]
    pub profile_picture_url: Option<String>,
    pub id: i64,
    pub is_active: bool,
    #[serde(deserialize_with = "Option::deserialize")]
    pub description: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// One entry of the raw `links` array.
///
/// The service emits `id` as a numeric string; plain integers are accepted too.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
pub struct RawLink {
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub id: i64,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub locked: Option<bool>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
}

impl RawLink {
    /// Returns false for payment widgets and section headers.
    pub fn is_navigable(&self) -> bool {
        !matches!(self.kind.as_str(), LINK_TYPE_COMMERCE_PAY | LINK_TYPE_HEADER)
    }

    /// Returns true if the URL is withheld behind a sensitive-content gate.
    pub fn is_gated(&self) -> bool {
        self.url.is_none() && self.locked == Some(true)
    }
}

/// One entry of the raw `socialLinks` array.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSocialLink {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(deserialize_with = "Option::deserialize")]
    pub url: Option<String>,
}
