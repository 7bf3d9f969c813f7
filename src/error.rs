//! Error types for the gridpilot crate

use thiserror::Error;

/// Main error type for the gridpilot crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("state '{input}' is missing the ':' separator")]
    MissingSeparator { input: String },

    #[error("state '{input}' has a non-integer coordinate '{part}'")]
    InvalidCoordinate { input: String, part: String },

    #[error("state '{input}' lies outside the {dim}x{dim} grid")]
    OutOfBounds { input: String, dim: usize },

    #[error("action index {index} is out of range (must be 0-3)")]
    InvalidActionIndex { index: usize },

    #[error("saved table has {rows} rows (expected {expected})")]
    TableShape { rows: usize, expected: usize },

    #[error("unsupported table format version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to {operation}: {message}")]
    Serialization { operation: String, message: String },

    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected response from {endpoint}: {message}")]
    Protocol { endpoint: String, message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
