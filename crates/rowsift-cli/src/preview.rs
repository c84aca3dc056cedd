//! Result preview rendering.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use rowsift_model::{MatchMode, MatchResult};

use crate::commands::SearchOutcome;

pub fn print_search_outcome(outcome: &SearchOutcome) {
    println!(
        "Searched {} rows in column '{}' ({} mode{})",
        outcome.total_rows,
        outcome.query.column,
        outcome.query.mode,
        if outcome.query.mode == MatchMode::Fuzzy {
            format!(", threshold {}", outcome.query.fuzzy_threshold)
        } else {
            String::new()
        }
    );

    if outcome.results.is_empty() {
        println!("No matches found.");
        print_hints();
    } else {
        print_result_table(outcome);
        let shown = outcome.results.len().min(outcome.preview_limit);
        if shown < outcome.results.len() {
            println!(
                "... {} more row(s) not previewed (exports always contain the full set)",
                outcome.results.len() - shown
            );
        }
        println!("{} match(es)", outcome.results.len());
    }
    if outcome.results.skipped_cells > 0 {
        println!(
            "{} cell(s) had no comparable value and were skipped",
            outcome.results.skipped_cells
        );
    }
    if let Some(export) = &outcome.export {
        println!("Results: {}", export.results.display());
        println!("Provenance: {}", export.provenance.display());
    }
}

fn print_result_table(outcome: &SearchOutcome) {
    let with_score = outcome.query.mode == MatchMode::Fuzzy;
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![header_cell("Row")];
    header.extend(outcome.columns.iter().map(|column| header_cell(column)));
    if with_score {
        header.push(header_cell("Score"));
    }
    table.set_header(header);

    for hit in outcome.results.iter().take(outcome.preview_limit) {
        table.add_row(result_row(hit, with_score));
    }

    if let Some(column) = table.column_mut(0) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    println!("{table}");
}

fn result_row(hit: &MatchResult, with_score: bool) -> Vec<Cell> {
    let mut row = vec![Cell::new(hit.index).add_attribute(Attribute::Dim)];
    for cell in &hit.cells {
        if cell.is_missing() {
            row.push(Cell::new("-").add_attribute(Attribute::Dim));
        } else {
            row.push(Cell::new(cell.display_text()));
        }
    }
    if with_score {
        let score = hit.score.unwrap_or_default();
        row.push(score_cell(score));
    }
    row
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn score_cell(score: u8) -> Cell {
    let color = if score >= 85 {
        Color::Green
    } else if score >= 60 {
        Color::Yellow
    } else {
        Color::Red
    };
    Cell::new(score)
        .fg(color)
        .set_alignment(CellAlignment::Right)
}

fn print_hints() {
    println!();
    println!("Hints:");
    println!("  exact    matches only when the whole value equals the keyword");
    println!("  partial  matches when the value contains the keyword");
    println!("  fuzzy    also finds near-duplicates and typos (lower --threshold to widen)");
    println!("  add --case-sensitive to distinguish upper and lower case");
}
