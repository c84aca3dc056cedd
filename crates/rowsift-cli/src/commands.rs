//! Subcommand implementations.

use anyhow::{Context, Result};
use tracing::info;

use rowsift_ingest::{read_dataset, write_sample_dataset};
use rowsift_model::{ResultSet, SearchQuery};
use rowsift_report::{ExportPaths, export_results};
use rowsift_search::{composite_score, run_search};

use crate::cli::{ColumnsArgs, SampleArgs, ScoreArgs, SearchArgs};

/// Everything the search subcommand produced, for rendering.
#[derive(Debug)]
pub struct SearchOutcome {
    pub query: SearchQuery,
    pub columns: Vec<String>,
    pub total_rows: usize,
    pub results: ResultSet,
    pub export: Option<ExportPaths>,
    pub preview_limit: usize,
}

pub fn run_search_command(args: &SearchArgs) -> Result<SearchOutcome> {
    let dataset = read_dataset(&args.file)
        .with_context(|| format!("load dataset: {}", args.file.display()))?;
    let query = SearchQuery::new(args.keyword.clone(), args.column.clone(), args.mode.into())
        .case_sensitive(args.case_sensitive)
        .with_threshold(args.threshold);
    let results = run_search(&dataset, &query)?;

    let export = match &args.output {
        Some(path) => {
            let paths = export_results(path, &dataset.columns, &query, &results)
                .with_context(|| format!("export results: {}", path.display()))?;
            info!(
                results = %paths.results.display(),
                provenance = %paths.provenance.display(),
                "results exported"
            );
            Some(paths)
        }
        None => None,
    };

    Ok(SearchOutcome {
        query,
        columns: dataset.columns,
        total_rows: dataset.rows.len(),
        results,
        export,
        preview_limit: args.limit,
    })
}

pub fn run_columns(args: &ColumnsArgs) -> Result<()> {
    let dataset = read_dataset(&args.file)
        .with_context(|| format!("load dataset: {}", args.file.display()))?;
    for (position, column) in dataset.columns.iter().enumerate() {
        println!("{:>3}  {column}", position + 1);
    }
    Ok(())
}

pub fn run_score(args: &ScoreArgs) -> Result<()> {
    let score = composite_score(&args.keyword, &args.value, args.case_sensitive);
    println!("{score}");
    Ok(())
}

pub fn run_sample(args: &SampleArgs) -> Result<()> {
    write_sample_dataset(&args.path)
        .with_context(|| format!("write sample dataset: {}", args.path.display()))?;
    println!("Sample dataset written to {}", args.path.display());
    println!("Try:");
    println!("  rowsift search {} -c Company -k 'Apple Japan Inc'", args.path.display());
    println!(
        "  rowsift search {} -c Company -k Sample -m partial",
        args.path.display()
    );
    println!(
        "  rowsift search {} -c Company -k 'Mikrosoft Japn' -m fuzzy --threshold 70",
        args.path.display()
    );
    Ok(())
}
