//! CSV loading into a typed [`Dataset`].

use std::path::Path;

use chrono::NaiveDate;
use csv::ReaderBuilder;
use tracing::info;

use rowsift_model::{CellValue, Dataset};

use crate::error::IngestError;

/// Reads a CSV file into a dataset.
///
/// The first record is the header; header cells are trimmed, stripped of a
/// UTF-8 BOM, and must be non-empty and unique. Data cells are typed by
/// inference: empty becomes [`CellValue::Missing`], values parsing as `f64`
/// become numbers, `YYYY-MM-DD` values become dates, everything else stays
/// text. Short records are padded with missing cells.
///
/// A header-only file yields an empty dataset; a file with no records at all
/// is an error.
pub fn read_dataset(path: &Path) -> Result<Dataset, IngestError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| map_csv_error(path, source))?;

    let mut records = reader.records();
    let header = loop {
        match records.next() {
            Some(record) => {
                let record = record.map_err(|source| map_csv_error(path, source))?;
                if record.iter().any(|cell| !cell.trim().is_empty()) {
                    break record;
                }
                // Blank leading lines carry no header information.
            }
            None => {
                return Err(IngestError::Empty {
                    path: path.to_path_buf(),
                });
            }
        }
    };

    let columns: Vec<String> = header.iter().map(normalize_header).collect();
    validate_columns(path, &columns)?;

    let mut dataset = Dataset::new(columns);
    for record in records {
        let record = record.map_err(|source| map_csv_error(path, source))?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        let mut cells = Vec::with_capacity(dataset.columns.len());
        for position in 0..dataset.columns.len() {
            let raw = record.get(position).unwrap_or("");
            cells.push(infer_cell(raw));
        }
        dataset.push_cells(cells);
    }

    info!(
        path = %path.display(),
        rows = dataset.len(),
        columns = dataset.columns.len(),
        "dataset loaded"
    );
    Ok(dataset)
}

fn map_csv_error(path: &Path, source: csv::Error) -> IngestError {
    IngestError::CsvRead {
        path: path.to_path_buf(),
        source,
    }
}

fn validate_columns(path: &Path, columns: &[String]) -> Result<(), IngestError> {
    for (position, column) in columns.iter().enumerate() {
        if column.is_empty() {
            return Err(IngestError::InvalidHeader {
                path: path.to_path_buf(),
                reason: format!("column {} has an empty name", position + 1),
            });
        }
        if columns[..position].contains(column) {
            return Err(IngestError::InvalidHeader {
                path: path.to_path_buf(),
                reason: format!("duplicate column name '{column}'"),
            });
        }
    }
    Ok(())
}

/// Trims a header cell, drops a UTF-8 BOM, and collapses interior runs of
/// whitespace to single spaces.
fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn infer_cell(raw: &str) -> CellValue {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    if trimmed.is_empty() {
        return CellValue::Missing;
    }
    if let Ok(number) = trimmed.parse::<f64>() {
        return CellValue::Number(number);
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return CellValue::Date(date);
    }
    CellValue::Text(trimmed.to_string())
}
