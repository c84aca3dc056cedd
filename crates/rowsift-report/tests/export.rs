//! Export file content checks.

use std::fs;

use rowsift_model::{CellValue, Dataset, MatchMode, SearchQuery};
use rowsift_report::export_results;
use rowsift_search::run_search;

fn company_dataset() -> Dataset {
    let mut dataset = Dataset::new(vec!["Company".to_string(), "Employees".to_string()]);
    dataset.push_cells(vec![
        CellValue::Text("Apple Japan".to_string()),
        CellValue::Number(500.0),
    ]);
    dataset.push_cells(vec![
        CellValue::Text("apple japan".to_string()),
        CellValue::Missing,
    ]);
    dataset.push_cells(vec![
        CellValue::Text("Orange Co".to_string()),
        CellValue::Number(30.0),
    ]);
    dataset
}

#[test]
fn fuzzy_export_appends_similarity_column() {
    let dataset = company_dataset();
    let query = SearchQuery::new("aple jpan", "Company", MatchMode::Fuzzy).with_threshold(60);
    let results = run_search(&dataset, &query).unwrap();
    assert_eq!(results.len(), 2);

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("results.csv");
    let paths = export_results(&out, &dataset.columns, &query, &results).unwrap();

    let content = fs::read_to_string(&paths.results).unwrap();
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("Company,Employees,similarity"));
    let first = lines.next().unwrap();
    assert!(first.starts_with("Apple Japan,500,"));
    let second = lines.next().unwrap();
    // Missing cell exports as an empty field.
    assert!(second.starts_with("apple japan,,"));
}

#[test]
fn exact_export_has_no_similarity_column() {
    let dataset = company_dataset();
    let query = SearchQuery::new("orange co", "Company", MatchMode::Exact);
    let results = run_search(&dataset, &query).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("results.csv");
    let paths = export_results(&out, &dataset.columns, &query, &results).unwrap();

    let content = fs::read_to_string(&paths.results).unwrap();
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("Company,Employees"));
    assert_eq!(lines.next(), Some("Orange Co,30"));
    assert_eq!(lines.next(), None);
}

#[test]
fn provenance_sidecar_records_the_query() {
    let dataset = company_dataset();
    let query = SearchQuery::new("apple", "Company", MatchMode::Partial);
    let results = run_search(&dataset, &query).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("results.csv");
    let paths = export_results(&out, &dataset.columns, &query, &results).unwrap();
    assert_eq!(paths.provenance, dir.path().join("results.query.json"));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&paths.provenance).unwrap()).unwrap();
    assert_eq!(json["query"]["keyword"], "apple");
    assert_eq!(json["query"]["mode"], "partial");
    assert_eq!(json["hit_count"], 2);
    assert!(json["exported_at"].is_string());
}
