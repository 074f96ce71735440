use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::models::common::MergedLogEntry;
use crate::models::errors::WriteError;

/// Writes the merged logs as 2-space pretty-printed JSON, replacing `path`.
///
/// Content goes to a sibling temporary file first and is renamed over the
/// target, so an interrupted write never leaves a truncated artifact behind.
pub async fn write_merged_logs(path: &Path, entries: &[MergedLogEntry]) -> Result<(), WriteError> {
    let json = serde_json::to_string_pretty(entries)?;

    let tmp_path = temp_path_for(path);
    if let Err(e) = write_then_rename(&tmp_path, path, json.as_bytes()).await {
        let _ = tokio::fs::remove_file(&tmp_path).await;
        return Err(e);
    }

    debug!("Wrote {} bytes to {}", json.len(), path.display());
    Ok(())
}

async fn write_then_rename(tmp_path: &Path, path: &Path, contents: &[u8]) -> Result<(), WriteError> {
    tokio::fs::write(tmp_path, contents)
        .await
        .map_err(|source| WriteError::Write {
            path: tmp_path.to_path_buf(),
            source,
        })?;

    tokio::fs::rename(tmp_path, path)
        .await
        .map_err(|source| WriteError::Write {
            path: path.to_path_buf(),
            source,
        })
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut file_name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("merged"));
    file_name.push(".tmp");
    path.with_file_name(file_name)
}
