use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use survey_model::SOURCE_COLUMNS;

use crate::commands::NormalizeResult;

pub fn print_summary(result: &NormalizeResult) {
    println!("Input: {}", result.input.display());
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run)"),
    }
    if let Some(path) = &result.report_path {
        println!("Report: {}", path.display());
    }
    println!("{}", summary_table(result));
}

/// Build the counts table printed after a run.
pub fn summary_table(result: &NormalizeResult) -> Table {
    let report = &result.report;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Measure"), header_cell("Respondents")]);
    apply_summary_table_style(&mut table);

    table.add_row(vec![Cell::new("Rows"), Cell::new(report.rows)]);
    table.add_row(vec![
        Cell::new("Diagnosed with LER"),
        Cell::new(report.diagnosed_with_ler),
    ]);
    table.add_row(vec![
        Cell::new("Already graduated"),
        Cell::new(report.already_graduated),
    ]);
    table.add_row(vec![
        Cell::new("Any disease"),
        Cell::new(report.with_any_disease),
    ]);
    table.add_row(vec![
        Cell::new("Unrecognized disease answers"),
        gap_cell(report.unrecognized_diseases),
    ]);
    table.add_row(vec![
        Cell::new("Unmatched hours answers"),
        gap_cell(report.unmatched_hours),
    ]);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table
}

/// Table of question headers and the identifiers they are renamed to.
pub fn columns_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Identifier"), header_cell("Question")]);
    apply_table_style(&mut table);
    for mapping in &SOURCE_COLUMNS {
        table.add_row(vec![
            Cell::new(mapping.target)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(mapping.source),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn gap_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
