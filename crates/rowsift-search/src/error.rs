//! Error types for search operations.

use thiserror::Error;

/// Validation failures for a search request.
///
/// These are raised before any row is scanned; a malformed query never
/// silently returns zero matches.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("search keyword is empty")]
    EmptyKeyword,
    #[error("column not found: {column}")]
    UnknownColumn { column: String },
    #[error("fuzzy threshold {value} is out of range (0-100)")]
    InvalidThreshold { value: u8 },
}
