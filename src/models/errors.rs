use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Malformed tx log JSON")]
    Malformed {
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid tx log format: expected a JSON array, got {got}")]
    NotAnArray { got: &'static str },
    #[error("Malformed JSON-encoded tx log entry at index {index}")]
    EncodedEntry {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("Unsupported tx log entry at index {index}: expected an object, got {kind}")]
    UnsupportedEntry { index: usize, kind: &'static str },
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config")]
    Config(#[from] config::ConfigError),
}

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("Failed to serialize merged tx logs")]
    Serialize(#[from] serde_json::Error),
    #[error("Failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
