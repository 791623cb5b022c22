//! Plain-text rendering of an import for the terminal.

use importer_lib::utils::value_to_cell_string;
use importer_lib::{
    EMAIL_COLUMN, GENDER_COLUMN, NAME_COLUMN, PHONE_COLUMN, Summary, ValidationVerdict,
};

const TABLE_COLUMNS: [&str; 4] = [NAME_COLUMN, EMAIL_COLUMN, PHONE_COLUMN, GENDER_COLUMN];

pub fn render_summary(summary: &Summary) -> String {
    format!(
        "Import Summary\n\
         Total Rows: {}\n\
         Successfully Validated: {}\n\
         Failed Validation: {}\n",
        summary.total, summary.valid, summary.invalid
    )
}

/// Table of the valid rows: row number followed by the four contact columns
pub fn render_valid_rows(verdicts: &[ValidationVerdict]) -> String {
    let mut header = vec!["Row".to_string()];
    header.extend(TABLE_COLUMNS.iter().map(|c| c.to_string()));

    let body: Vec<Vec<String>> = verdicts
        .iter()
        .map(|verdict| {
            let mut cells = vec![verdict.row_index.to_string()];
            cells.extend(TABLE_COLUMNS.iter().map(|column| {
                verdict
                    .row
                    .get(column)
                    .map(value_to_cell_string)
                    .unwrap_or_default()
            }));
            cells
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for cells in &body {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::from("Successfully Validated Rows\n");
    out.push_str(&format_line(&header, &widths));
    out.push_str(&format_line(
        &widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>(),
        &widths,
    ));
    for cells in &body {
        out.push_str(&format_line(cells, &widths));
    }
    out
}

/// Each failed row with its list of errors
pub fn render_failed_rows(verdicts: &[ValidationVerdict]) -> String {
    let mut out = String::from("Validation Errors\n");
    for verdict in verdicts {
        out.push_str(&format!("Row {}:\n", verdict.row_index));
        for error in &verdict.errors {
            out.push_str(&format!("  • {}\n", error));
        }
    }
    out
}

fn format_line(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let padding = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(padding))
        })
        .collect();
    format!("| {} |\n", padded.join(" | "))
}
