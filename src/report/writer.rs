//! JSON artifact writer.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use super::dto::ProfileSnapshot;
use crate::error::AppError;

/// Returns the artifact file name for a username, e.g. `linktree_cktc.json`.
///
/// Characters outside `[A-Za-z0-9._-]` are replaced with `_` so the name
/// cannot escape the output directory.
pub fn snapshot_file_name(username: &str) -> String {
    let safe: String = username
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("linktree_{safe}.json")
}

/// Writes the snapshot as pretty-printed JSON into `dir`, creating it if needed.
///
/// # Errors
///
/// Returns [`AppError::Io`] if the directory or file cannot be written.
pub fn write_snapshot(dir: &Path, snapshot: &ProfileSnapshot) -> Result<PathBuf, AppError> {
    fs::create_dir_all(dir).map_err(|e| AppError::io(dir.display().to_string(), e))?;

    let path = dir.join(snapshot_file_name(&snapshot.username));
    let mut json = serde_json::to_string_pretty(snapshot)
        .map_err(|e| AppError::malformed(format!("failed to encode snapshot: {e}")))?;
    json.push('\n');

    fs::write(&path, json).map_err(|e| AppError::io(path.display().to_string(), e))?;

    info!(path = %path.display(), "Snapshot written");
    Ok(path)
}
