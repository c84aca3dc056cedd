//! Search results.

use crate::cell::CellValue;

/// One matched row, copied out of the dataset.
///
/// `score` is populated only for fuzzy queries; exact and partial matches
/// carry `None` rather than a zero score.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MatchResult {
    /// 1-based row index in the source dataset.
    pub index: usize,
    pub cells: Vec<CellValue>,
    pub score: Option<u8>,
}

/// Ordered result of one search.
///
/// An empty set is a valid "no matches" outcome, distinct from a validation
/// error. `skipped_cells` counts candidate cells that had no comparable text
/// and were treated as non-matching.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ResultSet {
    pub hits: Vec<MatchResult>,
    pub skipped_cells: usize,
}

impl ResultSet {
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MatchResult> {
        self.hits.iter()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a MatchResult;
    type IntoIter = std::slice::Iter<'a, MatchResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.hits.iter()
    }
}
