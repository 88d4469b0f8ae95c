//! Snapshot run wiring.
//!
//! Builds the reqwest transport and services from [`Config`], runs the
//! pipeline for one target and emits the report.

use crate::application::services::ProfileService;
use crate::config::Config;
use crate::infrastructure::http::ReqwestFetcher;
use crate::report::{ProfileSnapshot, console, write_snapshot};
use crate::utils::profile_target::ProfileTarget;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Output switches for a run.
#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    pub write_artifact: bool,
    pub print_console: bool,
}

/// Result of a successful run.
#[derive(Debug)]
pub struct RunOutcome {
    pub snapshot: ProfileSnapshot,
    /// Path of the written artifact, when writing was enabled.
    pub artifact: Option<PathBuf>,
}

/// Runs one snapshot.
///
/// # Errors
///
/// Returns an error if the transport cannot be built, any pipeline stage
/// fails, or the artifact cannot be written.
pub async fn run(config: Config, target: ProfileTarget, options: RunOptions) -> Result<RunOutcome> {
    config.print_summary();

    let fetcher = Arc::new(
        ReqwestFetcher::from_config(&config).context("Failed to initialise HTTP client")?,
    );
    let service = ProfileService::from_config(fetcher, &config);

    let record = service
        .fetch_target(&target)
        .await
        .inspect_err(|e| tracing::warn!(code = e.code(), error = %e, "Pipeline stage failed"))
        .with_context(|| format!("Failed to snapshot {target:?}"))?;

    if record.has_hidden_links() {
        tracing::warn!(
            pending = record.gates.pending(),
            "Snapshot is incomplete: some gated links are still hidden"
        );
    }

    let snapshot = ProfileSnapshot::from(&record);

    if options.print_console {
        console::print(&snapshot);
    }

    let artifact = if options.write_artifact {
        let path = write_snapshot(Path::new(&config.output_dir), &snapshot)
            .context("Failed to write snapshot")?;
        Some(path)
    } else {
        None
    };

    Ok(RunOutcome { snapshot, artifact })
}
