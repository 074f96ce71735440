use serde_json::{Map, Value};

use crate::correlator::{check_counts, extract_tx_hashes};
use crate::loader::{parse_tx_logs, split_lines};
use crate::models::common::{CountMismatch, MergeOutcome, MergedLogEntry, RawEntry, json_kind};
use crate::models::errors::ParseError;

pub trait EntryTransformer {
    fn transform_entries(
        entries: Vec<RawEntry>,
        tx_hashes: &[String],
    ) -> Result<Vec<MergedLogEntry>, ParseError>;
}

impl EntryTransformer for RawEntry {
    fn transform_entries(
        entries: Vec<RawEntry>,
        tx_hashes: &[String],
    ) -> Result<Vec<MergedLogEntry>, ParseError> {
        entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                let fields = entry.into_fields(index)?;
                // Positional pairing: missing hashes become null, extras are dropped
                let tx_hash = tx_hashes.get(index).map(String::as_str);
                Ok(MergedLogEntry::new(fields, tx_hash))
            })
            .collect::<Result<Vec<_>, _>>()
    }
}

impl RawEntry {
    /// Normalizes the entry to an object, decoding a JSON-encoded string once.
    pub fn into_fields(self, index: usize) -> Result<Map<String, Value>, ParseError> {
        match self {
            Self::Object(fields) => Ok(fields),
            Self::EncodedString(encoded) => {
                let decoded: Value = serde_json::from_str(&encoded)
                    .map_err(|source| ParseError::EncodedEntry { index, source })?;
                match decoded {
                    Value::Object(fields) => Ok(fields),
                    other => Err(ParseError::UnsupportedEntry {
                        index,
                        kind: json_kind(&other),
                    }),
                }
            }
        }
    }
}

/// Structured entries paired with the hashes extracted for them.
#[derive(Debug, Clone)]
pub struct Correlation {
    pub entries: Vec<RawEntry>,
    pub tx_hashes: Vec<String>,
    pub mismatch: Option<CountMismatch>,
}

/// Parses the structured log and extracts the confirmation hashes.
///
/// Entries are not decoded yet, so a count mismatch is known before any
/// double-encoded entry can fail.
pub fn correlate(
    structured_log: &str,
    confirmation_text: &str,
    marker: &str,
) -> Result<Correlation, ParseError> {
    let entries = parse_tx_logs(structured_log)?;
    let tx_hashes = extract_tx_hashes(split_lines(confirmation_text), marker);
    let mismatch = check_counts(tx_hashes.len(), entries.len());

    Ok(Correlation {
        entries,
        tx_hashes,
        mismatch,
    })
}

/// Decodes every entry and attaches its hash by position.
pub fn apply(correlation: Correlation) -> Result<MergeOutcome, ParseError> {
    let Correlation {
        entries,
        tx_hashes,
        mismatch,
    } = correlation;
    let entries = RawEntry::transform_entries(entries, &tx_hashes)?;

    Ok(MergeOutcome { entries, mismatch })
}

/// Correlates the structured log with the confirmation log by position.
///
/// Performs no I/O. A count mismatch is returned in the outcome rather than
/// treated as an error; every structured entry is still emitted, in order.
pub fn merge(
    structured_log: &str,
    confirmation_text: &str,
    marker: &str,
) -> Result<MergeOutcome, ParseError> {
    apply(correlate(structured_log, confirmation_text, marker)?)
}
