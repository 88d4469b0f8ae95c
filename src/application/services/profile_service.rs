//! Profile snapshot assembly.

use std::sync::Arc;

use tracing::info;

use crate::application::services::contacts::extract_contacts;
use crate::application::services::link_reconciler::LinkReconciler;
use crate::config::Config;
use crate::domain::entities::{HydrationDocument, ProfileRecord};
use crate::domain::gateways::{FetchRequest, PageFetcher};
use crate::error::AppError;
use crate::infrastructure::html::extract_hydration;
use crate::utils::profile_target::ProfileTarget;

/// Service that turns a profile URL or username into a [`ProfileRecord`].
///
/// Runs the pipeline strictly in sequence: fetch page, extract the hydration
/// document, reconcile links (at most one more request), extract contacts.
/// Any stage failure aborts the whole assembly.
pub struct ProfileService<F: PageFetcher> {
    fetcher: Arc<F>,
    reconciler: LinkReconciler<F>,
    base_url: String,
}

impl<F: PageFetcher> ProfileService<F> {
    /// Creates a new profile service.
    pub fn new(
        fetcher: Arc<F>,
        reconciler: LinkReconciler<F>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            fetcher,
            reconciler,
            base_url: base_url.into(),
        }
    }

    /// Creates a profile service whose reconciler shares the same fetcher.
    pub fn from_config(fetcher: Arc<F>, config: &Config) -> Self {
        let reconciler = LinkReconciler::from_config(fetcher.clone(), config);
        Self::new(fetcher, reconciler, config.base_url.clone())
    }

    /// Fetches and assembles the profile named by a parsed CLI target.
    pub async fn fetch_target(&self, target: &ProfileTarget) -> Result<ProfileRecord, AppError> {
        self.fetch_profile(target.supplied_url(), target.supplied_username())
            .await
    }

    /// Fetches and assembles a profile from a URL or a username.
    ///
    /// The URL wins when both are given.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] before any request if both are absent
    /// or blank. Otherwise propagates the first failing stage's error.
    pub async fn fetch_profile(
        &self,
        url: Option<&str>,
        username: Option<&str>,
    ) -> Result<ProfileRecord, AppError> {
        let (url, username) = require_identity(url, username)?;
        let page_url = match (url, username) {
            (Some(url), _) => url.to_string(),
            (None, Some(username)) => self.profile_url(username),
            (None, None) => return Err(missing_identity()),
        };

        info!(url = %page_url, "Fetching profile page");
        let html = self.fetcher.fetch(FetchRequest::get(&page_url)).await?;
        let doc = extract_hydration(&html)?;

        self.assemble(doc, url, username).await
    }

    /// Composes a [`ProfileRecord`] from an already extracted document.
    ///
    /// The canonical URL is the supplied URL, or is derived from the account's
    /// username.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] if neither a URL nor a username was
    /// supplied, and propagates link reconciliation errors.
    pub async fn assemble(
        &self,
        doc: HydrationDocument,
        supplied_url: Option<&str>,
        supplied_username: Option<&str>,
    ) -> Result<ProfileRecord, AppError> {
        let (supplied_url, _) = require_identity(supplied_url, supplied_username)?;

        let reconciled = self.reconciler.reconcile(&doc).await?;
        let contacts = extract_contacts(&doc);

        let account = doc.account;
        let url = supplied_url
            .map(str::to_string)
            .unwrap_or_else(|| self.profile_url(&account.username));

        info!(
            username = %account.username,
            links = reconciled.links.len(),
            contacts = contacts.len(),
            "Profile assembled"
        );

        Ok(ProfileRecord {
            username: account.username,
            url,
            avatar_image: account.profile_picture_url,
            id: account.id,
            is_active: account.is_active,
            description: account.description,
            created_at: account.created_at,
            updated_at: account.updated_at,
            links: reconciled.links,
            contacts,
            gates: reconciled.resolution,
        })
    }

    fn profile_url(&self, username: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), username)
    }
}

type Identity<'a> = (Option<&'a str>, Option<&'a str>);

fn require_identity<'a>(
    url: Option<&'a str>,
    username: Option<&'a str>,
) -> Result<Identity<'a>, AppError> {
    let url = url.map(str::trim).filter(|s| !s.is_empty());
    let username = username.map(str::trim).filter(|s| !s.is_empty());

    if url.is_none() && username.is_none() {
        return Err(missing_identity());
    }
    Ok((url, username))
}

fn missing_identity() -> AppError {
    AppError::invalid_input("a profile URL or username is required")
}
