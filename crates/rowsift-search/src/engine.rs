//! Search orchestrator: runs one query over one column and ranks the hits.

use tracing::{debug, info};

use rowsift_model::{CellValue, Dataset, MatchMode, MatchResult, ResultSet, SearchQuery};

use crate::error::SearchError;
use crate::similarity::{normalize, sequence_ratio};

/// One matching row from a column scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnHit {
    /// 1-based row index in the source dataset.
    pub index: usize,
    /// Similarity score; `Some` only for fuzzy queries.
    pub score: Option<u8>,
}

/// Outcome of scanning a single column, already in ranking order.
#[derive(Debug, Clone, Default)]
pub struct ColumnScan {
    pub hits: Vec<ColumnHit>,
    /// Candidate cells with no comparable text, treated as non-matching.
    pub skipped_cells: usize,
}

/// Runs `query` against `dataset` and returns matched rows in ranking order.
///
/// Exact and partial hits keep the original dataset order; fuzzy hits are
/// sorted by descending score with a stable sort, so equal scores keep their
/// ascending-index order. The dataset is never mutated.
///
/// # Errors
///
/// Fails fast with a [`SearchError`] for an empty keyword, an unknown
/// column, or an out-of-range fuzzy threshold; no rows are scanned in that
/// case. An empty dataset is not an error and yields an empty result set.
pub fn run_search(dataset: &Dataset, query: &SearchQuery) -> Result<ResultSet, SearchError> {
    let Some(column) = dataset.column_index(&query.column) else {
        return Err(SearchError::UnknownColumn {
            column: query.column.clone(),
        });
    };
    static MISSING_CELL: CellValue = CellValue::Missing;
    let candidates: Vec<(usize, &CellValue)> = dataset
        .rows
        .iter()
        .map(|row| (row.index, row.cells.get(column).unwrap_or(&MISSING_CELL)))
        .collect();
    let scan = scan_column(&candidates, query)?;
    let records: std::collections::BTreeMap<usize, &rowsift_model::Record> =
        dataset.rows.iter().map(|row| (row.index, row)).collect();
    let hits = scan
        .hits
        .iter()
        .filter_map(|hit| {
            records.get(&hit.index).map(|row| MatchResult {
                index: hit.index,
                cells: row.cells.clone(),
                score: hit.score,
            })
        })
        .collect();
    info!(
        mode = %query.mode,
        rows = dataset.len(),
        hits = scan.hits.len(),
        skipped = scan.skipped_cells,
        "search complete"
    );
    Ok(ResultSet {
        hits,
        skipped_cells: scan.skipped_cells,
    })
}

/// Scans an ordered list of `(original_index, value)` candidates.
///
/// This is the engine's narrow view of a dataset: one column's values plus
/// each row's original index. See [`run_search`] for the ranking and error
/// contract.
pub fn scan_column(
    candidates: &[(usize, &CellValue)],
    query: &SearchQuery,
) -> Result<ColumnScan, SearchError> {
    let keyword = query.keyword.trim();
    if keyword.is_empty() {
        return Err(SearchError::EmptyKeyword);
    }
    if query.mode == MatchMode::Fuzzy && query.fuzzy_threshold > 100 {
        return Err(SearchError::InvalidThreshold {
            value: query.fuzzy_threshold,
        });
    }

    let needle = normalize(keyword, query.case_sensitive);
    let mut scan = ColumnScan::default();
    for &(index, cell) in candidates {
        let Some(text) = cell.as_comparable_text() else {
            scan.skipped_cells += 1;
            debug!(row = index, "cell has no comparable text; skipped");
            continue;
        };
        let haystack = normalize(&text, query.case_sensitive);
        match query.mode {
            MatchMode::Exact => {
                if haystack == needle {
                    scan.hits.push(ColumnHit { index, score: None });
                }
            }
            MatchMode::Partial => {
                if haystack.contains(&needle) {
                    scan.hits.push(ColumnHit { index, score: None });
                }
            }
            MatchMode::Fuzzy => {
                let score = sequence_ratio(&needle, &haystack);
                if score >= query.fuzzy_threshold {
                    scan.hits.push(ColumnHit {
                        index,
                        score: Some(score),
                    });
                }
            }
        }
    }
    if query.mode == MatchMode::Fuzzy {
        // Stable: equal scores keep ascending-index order.
        scan.hits.sort_by(|a, b| b.score.cmp(&a.score));
    }
    Ok(scan)
}
