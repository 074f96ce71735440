use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_MARKER: &str = "Transaction sent:";
pub const TX_HASH_FIELD: &str = "txHash";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tx_logs_path: PathBuf,
    pub tx_hashes_path: PathBuf,
    pub output_path: PathBuf,
    pub marker: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tx_logs_path: PathBuf::from("txLogs.json"),
            tx_hashes_path: PathBuf::from("tx-hashes.txt"),
            output_path: PathBuf::from("txLogsWithRealHashes.json"),
            marker: DEFAULT_MARKER.to_string(),
        }
    }
}

/// One element of the structured log as it appears on disk.
///
/// Some upstream tools serialize each event twice, so an element is either the
/// event object itself or a JSON string holding it.
#[derive(Debug, Clone, PartialEq)]
pub enum RawEntry {
    Object(Map<String, Value>),
    EncodedString(String),
}

/// A structured log entry with its correlated transaction hash.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MergedLogEntry(Map<String, Value>);

impl MergedLogEntry {
    pub fn new(mut fields: Map<String, Value>, tx_hash: Option<&str>) -> Self {
        let hash = match tx_hash {
            Some(h) => Value::String(h.to_string()),
            None => Value::Null,
        };
        fields.insert(TX_HASH_FIELD.to_string(), hash);
        Self(fields)
    }

    pub fn tx_hash(&self) -> Option<&str> {
        self.0.get(TX_HASH_FIELD).and_then(Value::as_str)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// Hash and log counts disagree; pairing degrades to best effort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountMismatch {
    pub hashes: usize,
    pub logs: usize,
}

impl fmt::Display for CountMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "txHashes count does not match txLogs count! txHashes: {} txLogs: {}",
            self.hashes, self.logs
        )
    }
}

#[derive(Debug, Clone)]
pub struct MergeOutcome {
    pub entries: Vec<MergedLogEntry>,
    pub mismatch: Option<CountMismatch>,
}

/// Human readable name of a JSON value's type, for error messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
