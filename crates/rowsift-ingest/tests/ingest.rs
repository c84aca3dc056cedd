//! CSV loading tests.

use std::fs;

use chrono::NaiveDate;
use rowsift_ingest::{IngestError, read_dataset, write_sample_dataset};
use rowsift_model::CellValue;

fn write_csv(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write csv fixture");
    path
}

#[test]
fn loads_typed_cells() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        &dir,
        "companies.csv",
        "Company,Employees,Founded\nApple Japan,500,1983-06-01\nOrange Co,,\n",
    );
    let dataset = read_dataset(&path).unwrap();
    assert_eq!(dataset.columns, vec!["Company", "Employees", "Founded"]);
    assert_eq!(dataset.len(), 2);
    assert_eq!(
        dataset.rows[0].cells,
        vec![
            CellValue::Text("Apple Japan".to_string()),
            CellValue::Number(500.0),
            CellValue::Date(NaiveDate::from_ymd_opt(1983, 6, 1).unwrap()),
        ]
    );
    assert_eq!(dataset.rows[1].cells[1], CellValue::Missing);
    assert_eq!(dataset.rows[1].cells[2], CellValue::Missing);
}

#[test]
fn row_indices_are_one_based_in_file_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "rows.csv", "Name\na\nb\nc\n");
    let dataset = read_dataset(&path).unwrap();
    let indices: Vec<usize> = dataset.rows.iter().map(|row| row.index).collect();
    assert_eq!(indices, vec![1, 2, 3]);
}

#[test]
fn short_records_are_padded_with_missing() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "short.csv", "Name,City\nApple Japan\n");
    let dataset = read_dataset(&path).unwrap();
    assert_eq!(dataset.rows[0].cells.len(), 2);
    assert_eq!(dataset.rows[0].cells[1], CellValue::Missing);
}

#[test]
fn bom_header_is_stripped() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "bom.csv", "\u{feff}Name\nApple Japan\n");
    let dataset = read_dataset(&path).unwrap();
    assert_eq!(dataset.columns, vec!["Name"]);
}

#[test]
fn header_only_file_is_an_empty_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "header.csv", "Name,City\n");
    let dataset = read_dataset(&path).unwrap();
    assert!(dataset.is_empty());
    assert_eq!(dataset.columns.len(), 2);
}

#[test]
fn empty_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "empty.csv", "");
    let error = read_dataset(&path).unwrap_err();
    assert!(matches!(error, IngestError::Empty { .. }));
}

#[test]
fn duplicate_header_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "dup.csv", "Name,Name\na,b\n");
    let error = read_dataset(&path).unwrap_err();
    assert!(matches!(error, IngestError::InvalidHeader { .. }));
}

#[test]
fn sample_dataset_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sample.csv");
    write_sample_dataset(&path).unwrap();
    let dataset = read_dataset(&path).unwrap();
    assert_eq!(dataset.len(), 15);
    assert_eq!(dataset.columns[0], "Company");
    let company = dataset.column_index("Company").unwrap();
    assert!(
        dataset
            .rows
            .iter()
            .any(|row| row.cells[company] == CellValue::Text("Apple Japan Inc".to_string()))
    );
}
