//! Matching and ranking engine.
//!
//! [`similarity`] holds the pure scoring functions; [`engine`] runs one
//! query against a column of candidates and produces a ranked result set.

pub mod engine;
pub mod error;
pub mod similarity;

pub use engine::{ColumnHit, ColumnScan, run_search, scan_column};
pub use error::SearchError;
pub use similarity::{composite_score, normalize, sequence_ratio, token_overlap};
