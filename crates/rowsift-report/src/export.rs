//! Writes a result set to durable storage.
//!
//! Two artifacts per export: the results CSV itself and a small JSON
//! provenance sidecar recording the query that produced it. Scores and
//! field values are written as-is, with no semantic transformation.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

use rowsift_model::{MatchMode, ResultSet, SearchQuery};

/// Files written by one export.
#[derive(Debug, Clone)]
pub struct ExportPaths {
    pub results: PathBuf,
    pub provenance: PathBuf,
}

#[derive(Serialize)]
struct Provenance<'a> {
    query: &'a SearchQuery,
    exported_at: DateTime<Utc>,
    hit_count: usize,
    skipped_cells: usize,
}

/// Writes `results` to `path` as CSV, plus a `.query.json` sidecar.
///
/// The header is the original column list; fuzzy exports append a trailing
/// `similarity` column. Rows appear in ranking order and missing cells
/// become empty fields.
pub fn export_results(
    path: &Path,
    columns: &[String],
    query: &SearchQuery,
    results: &ResultSet,
) -> Result<ExportPaths> {
    let with_score = query.mode == MatchMode::Fuzzy;

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("create results file: {}", path.display()))?;
    let mut header: Vec<&str> = columns.iter().map(String::as_str).collect();
    if with_score {
        header.push("similarity");
    }
    writer
        .write_record(&header)
        .context("write results header")?;
    for hit in results {
        let mut record: Vec<String> = hit.cells.iter().map(|cell| cell.display_text()).collect();
        if with_score {
            record.push(hit.score.unwrap_or_default().to_string());
        }
        writer
            .write_record(&record)
            .with_context(|| format!("write result row {}", hit.index))?;
    }
    writer.flush().context("flush results file")?;

    let provenance_path = path.with_extension("query.json");
    let provenance = Provenance {
        query,
        exported_at: Utc::now(),
        hit_count: results.len(),
        skipped_cells: results.skipped_cells,
    };
    let json = serde_json::to_string_pretty(&provenance).context("serialize provenance")?;
    std::fs::write(&provenance_path, json)
        .with_context(|| format!("write provenance: {}", provenance_path.display()))?;

    Ok(ExportPaths {
        results: path.to_path_buf(),
        provenance: provenance_path,
    })
}
