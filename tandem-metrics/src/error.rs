//! Error types for aggregation and export

use thiserror::Error;

/// Errors related to result aggregation
#[derive(Debug, Error, PartialEq)]
pub enum AggregateError {
    #[error("No replications to aggregate")]
    Empty,

    #[error("Replication {index} has {actual} columns, expected at least {expected}")]
    ShortRow {
        index: usize,
        expected: usize,
        actual: usize,
    },
}

/// Errors related to writing results
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
