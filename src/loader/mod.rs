use serde_json::Value;
use std::path::Path;
use tracing::debug;

use crate::models::common::{RawEntry, json_kind};
use crate::models::errors::{LoadError, ParseError};

pub async fn load_tx_logs(path: &Path) -> Result<String, LoadError> {
    read_input(path).await
}

pub async fn load_confirmation_text(path: &Path) -> Result<String, LoadError> {
    read_input(path).await
}

async fn read_input(path: &Path) -> Result<String, LoadError> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    debug!("Read {} bytes from {}", contents.len(), path.display());
    Ok(contents)
}

/// Parses the structured log into its raw, order-preserving entries.
///
/// Elements must be objects or JSON-encoded strings; encoded strings are left
/// as-is and decoded during merging.
pub fn parse_tx_logs(contents: &str) -> Result<Vec<RawEntry>, ParseError> {
    let document: Value =
        serde_json::from_str(contents).map_err(|source| ParseError::Malformed { source })?;

    let elements = match document {
        Value::Array(elements) => elements,
        other => {
            return Err(ParseError::NotAnArray {
                got: json_kind(&other),
            });
        }
    };

    elements
        .into_iter()
        .enumerate()
        .map(|(index, element)| match element {
            Value::Object(fields) => Ok(RawEntry::Object(fields)),
            Value::String(encoded) => Ok(RawEntry::EncodedString(encoded)),
            other => Err(ParseError::UnsupportedEntry {
                index,
                kind: json_kind(&other),
            }),
        })
        .collect::<Result<Vec<_>, _>>()
}

/// Splits the confirmation log into raw lines. Never fails.
pub fn split_lines(contents: &str) -> Vec<&str> {
    contents.split('\n').collect()
}
