use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use obstetra_model::IssueSeverity;

use crate::types::BatchResult;

/// Print a per-record summary table for a validated batch, followed by
/// the individual issues.
pub fn print_summary(result: &BatchResult) {
    println!("Source: {}", result.source.display());
    if let Some(path) = &result.report_path {
        println!("Validation report: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Record"),
        header_cell("Errors"),
        header_cell("Warnings"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);

    let mut total_errors = 0usize;
    let mut total_warnings = 0usize;
    for (idx, report) in result.reports.iter().enumerate() {
        total_errors += report.error_count();
        total_warnings += report.warning_count();
        table.add_row(vec![
            Cell::new(idx + 1),
            record_cell(&report.record_id),
            count_cell(report.error_count(), Color::Red),
            count_cell(report.warning_count(), Color::Yellow),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} record(s)", result.reports.len())).add_attribute(Attribute::Bold),
        count_cell(total_errors, Color::Red),
        count_cell(total_warnings, Color::Yellow),
    ]);
    println!("{table}");

    for (idx, report) in result.reports.iter().enumerate() {
        for issue in &report.issues {
            let severity = match issue.severity {
                IssueSeverity::Error => "error",
                IssueSeverity::Warning => "warning",
            };
            println!(
                "row {}: [{severity}] {}: {}",
                idx + 1,
                issue.field,
                issue.message
            );
        }
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn record_cell(record_id: &str) -> Cell {
    if record_id.is_empty() {
        Cell::new("-").fg(Color::DarkGrey)
    } else {
        Cell::new(record_id)
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
