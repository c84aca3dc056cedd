//! Error types for dataset loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading a dataset.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IngestError {
    /// Failed to read or parse a CSV file (covers io failures as well).
    #[error("failed to read CSV {path}: {source}")]
    CsvRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Header row is malformed (empty or duplicate column names).
    #[error("invalid header in {path}: {reason}")]
    InvalidHeader { path: PathBuf, reason: String },

    /// File holds no header row at all.
    #[error("{path} contains no header row")]
    Empty { path: PathBuf },
}
