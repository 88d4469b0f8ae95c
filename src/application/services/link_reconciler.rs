//! Link reconciliation: visible links plus links revealed through the gate.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::domain::entities::{
    GateRequest, GateResolution, GateResponse, GatedLinkId, HydrationDocument, Link, RawLink,
};
use crate::domain::gateways::{FetchRequest, PageFetcher};
use crate::error::{AppError, map_schema_error};

/// What to do when the gate confirmation request fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GateFailurePolicy {
    /// Propagate the error and abort the snapshot.
    #[default]
    Abort,
    /// Keep the visible links and report the gated ones as still pending.
    Degrade,
}

impl FromStr for GateFailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "abort" => Ok(Self::Abort),
            "degrade" => Ok(Self::Degrade),
            other => Err(format!(
                "unknown gate failure policy '{other}', expected 'abort' or 'degrade'"
            )),
        }
    }
}

impl fmt::Display for GateFailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Abort => write!(f, "abort"),
            Self::Degrade => write!(f, "degrade"),
        }
    }
}

/// Reconciled link collection with the outcome of the gate step.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconciledLinks {
    /// Visible links in document order, followed by revealed links in response order.
    pub links: Vec<Link>,
    pub resolution: GateResolution,
}

/// Splits raw links into visible links and gated ids, in document order.
///
/// Payment widgets and headers are discarded. Links with no URL that are not
/// gated cannot be recovered and are dropped. Repeated gated ids are sent once.
pub fn classify_links(raw_links: &[RawLink]) -> (Vec<Link>, Vec<GatedLinkId>) {
    let mut links = Vec::new();
    let mut pending = Vec::new();
    let mut seen = HashSet::new();

    for raw in raw_links {
        if !raw.is_navigable() {
            continue;
        }

        if raw.is_gated() {
            if seen.insert(raw.id) {
                pending.push(GatedLinkId(raw.id));
            }
            continue;
        }

        match &raw.url {
            Some(url) => links.push(Link::visible(url.clone(), raw.title.clone())),
            None => debug!(link_id = raw.id, "Dropping link without URL or gate"),
        }
    }

    (links, pending)
}

/// Merges visible links with links hidden behind the sensitive-content gate.
///
/// At most one confirmation request is issued per call, carrying every gated
/// id at once.
pub struct LinkReconciler<F: PageFetcher> {
    fetcher: Arc<F>,
    gates_url: String,
    origin: String,
    user_agent: String,
    failure_policy: GateFailurePolicy,
}

impl<F: PageFetcher> LinkReconciler<F> {
    /// Creates a reconciler that aborts on gate failures.
    ///
    /// `origin` is sent as both the `origin` and `referer` header.
    pub fn new(
        fetcher: Arc<F>,
        gates_url: impl Into<String>,
        origin: impl Into<String>,
        user_agent: impl Into<String>,
    ) -> Self {
        Self {
            fetcher,
            gates_url: gates_url.into(),
            origin: origin.into(),
            user_agent: user_agent.into(),
            failure_policy: GateFailurePolicy::Abort,
        }
    }

    /// Creates a reconciler from the snapshot configuration.
    pub fn from_config(fetcher: Arc<F>, config: &Config) -> Self {
        Self::new(
            fetcher,
            config.gates_url(),
            config.base_url.clone(),
            config.user_agent.clone(),
        )
        .with_failure_policy(config.gate_failure_policy)
    }

    pub fn with_failure_policy(mut self, policy: GateFailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Reconciles the document's links.
    ///
    /// # Errors
    ///
    /// With [`GateFailurePolicy::Abort`], returns the [`AppError::Transport`],
    /// [`AppError::MalformedPayload`] or [`AppError::Schema`] of a failed
    /// confirmation request. With [`GateFailurePolicy::Degrade`] the failure is
    /// reported as [`GateResolution::Failed`] instead.
    pub async fn reconcile(&self, doc: &HydrationDocument) -> Result<ReconciledLinks, AppError> {
        let (mut links, pending) = classify_links(&doc.links);

        if pending.is_empty() {
            return Ok(ReconciledLinks {
                links,
                resolution: GateResolution::NotRequired,
            });
        }

        let requested = pending.len();
        info!(
            account_id = doc.account.id,
            gated = requested,
            "Confirming sensitive-content gate"
        );

        let resolution = match self.reveal(doc.account.id, pending).await {
            Ok(revealed) => {
                let count = revealed.len();
                links.extend(revealed);

                if count < requested {
                    warn!(requested, revealed = count, "Gate revealed fewer links than requested");
                    GateResolution::Partial {
                        revealed: count,
                        pending: requested - count,
                    }
                } else {
                    GateResolution::Resolved { revealed: count }
                }
            }
            Err(e) => match self.failure_policy {
                GateFailurePolicy::Abort => return Err(e),
                GateFailurePolicy::Degrade => {
                    warn!(
                        error = %e,
                        pending = requested,
                        "Gate confirmation failed, keeping visible links"
                    );
                    GateResolution::Failed {
                        pending: requested,
                        reason: e.to_string(),
                    }
                }
            },
        };

        Ok(ReconciledLinks { links, resolution })
    }

    async fn reveal(&self, account_id: i64, ids: Vec<GatedLinkId>) -> Result<Vec<Link>, AppError> {
        let body = serde_json::to_value(GateRequest::new(account_id, ids))
            .map_err(|e| AppError::malformed(format!("failed to encode gate request: {e}")))?;

        let request = FetchRequest::post_json(&self.gates_url, body)
            .header("origin", &self.origin)
            .header("referer", &self.origin)
            .header("user-agent", &self.user_agent);

        let text = self.fetcher.fetch(request).await?;

        let value: Value = serde_json::from_str(&text)
            .map_err(|e| AppError::malformed(format!("gate response is not valid JSON: {e}")))?;
        let response: GateResponse =
            serde_json::from_value(value).map_err(|e| map_schema_error("gate response", e))?;

        Ok(response
            .links
            .into_iter()
            .filter_map(|revealed| match revealed.url {
                Some(url) => Some(Link::revealed(url)),
                None => {
                    debug!("Gate response entry has no URL");
                    None
                }
            })
            .collect())
    }
}
