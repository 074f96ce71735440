use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::loader::{load_confirmation_text, load_tx_logs};
use crate::merger::{apply, correlate};
use crate::models::common::{Config, MergeOutcome};
use crate::storage::write_merged_logs;

/// Runs one merge: read both inputs, correlate, then write the merged artifact.
///
/// Both inputs are fully read and merged before anything is written, so any
/// error leaves the output path untouched.
pub async fn run(config: &Config) -> Result<MergeOutcome> {
    // Load inputs
    let tx_logs = load_tx_logs(&config.tx_logs_path).await?;
    let confirmation_text = load_confirmation_text(&config.tx_hashes_path).await?;

    // Correlate, reporting a count mismatch before any entry is decoded
    let correlation = correlate(&tx_logs, &confirmation_text, &config.marker)
        .with_context(|| format!("failed to parse {}", config.tx_logs_path.display()))?;

    if let Some(mismatch) = &correlation.mismatch {
        warn!("⚠️ Warning: {}", mismatch);
    }

    // Merge
    let outcome = apply(correlation)
        .with_context(|| format!("failed to merge {}", config.tx_logs_path.display()))?;

    // Persist
    write_merged_logs(&config.output_path, &outcome.entries).await?;

    info!(
        "✅ Merged {} tx logs written to {}",
        outcome.entries.len(),
        config.output_path.display()
    );

    Ok(outcome)
}
