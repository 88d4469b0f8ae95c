//! Sensitive-content gate: request/response bodies and resolution outcome.

use serde::{Deserialize, Serialize};

/// Identifier of a link whose URL is withheld until the gate is confirmed.
///
/// Scoped to a single reconciliation; never part of the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct GatedLinkId(pub i64);

/// Body of the gate confirmation request.
///
/// Serializes to `{"accountId", "validationInput": {"acceptedSensitiveContent"},
/// "requestSource": {"referrer": null}}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GateRequest {
    pub account_id: i64,
    pub validation_input: ValidationInput,
    pub request_source: RequestSource,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationInput {
    pub accepted_sensitive_content: Vec<GatedLinkId>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RequestSource {
    pub referrer: Option<String>,
}

impl GateRequest {
    pub fn new(account_id: i64, ids: Vec<GatedLinkId>) -> Self {
        Self {
            account_id,
            validation_input: ValidationInput {
                accepted_sensitive_content: ids,
            },
            request_source: RequestSource::default(),
        }
    }
}

/// Response of the gate confirmation endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct GateResponse {
    pub links: Vec<RevealedLink>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RevealedLink {
    #[serde(default)]
    pub url: Option<String>,
}

/// Outcome of the gate step of link reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GateResolution {
    /// The profile has no gated links; no confirmation request was issued.
    NotRequired,
    /// Every gated link was revealed.
    Resolved { revealed: usize },
    /// The service revealed fewer URLs than were requested.
    Partial { revealed: usize, pending: usize },
    /// The confirmation request failed and the caller chose to keep going.
    Failed { pending: usize, reason: String },
}

impl GateResolution {
    /// Number of gated links that are still hidden.
    pub fn pending(&self) -> usize {
        match self {
            GateResolution::NotRequired | GateResolution::Resolved { .. } => 0,
            GateResolution::Partial { pending, .. } | GateResolution::Failed { pending, .. } => {
                *pending
            }
        }
    }

    /// Returns true if no gated link is left hidden.
    pub fn is_complete(&self) -> bool {
        self.pending() == 0
    }
}
