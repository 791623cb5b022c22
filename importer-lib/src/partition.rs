use serde::Serialize;

use crate::row::Row;
use crate::row_validator::{ValidationVerdict, validate_row};

/// Aggregate counts for one import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
}

/// Verdicts split into passing and failing rows, both in source order
#[derive(Debug, Clone, Default)]
pub struct ImportReport {
    pub valid: Vec<ValidationVerdict>,
    pub invalid: Vec<ValidationVerdict>,
    pub summary: Summary,
}

impl ImportReport {
    pub fn has_failures(&self) -> bool {
        !self.invalid.is_empty()
    }

    /// Format the failing rows into a structured string for the error log
    pub fn format_validation_report(&self) -> String {
        let mut report = String::new();

        report.push_str("=============================\n");

        let now = chrono::Utc::now().to_rfc3339();
        report.push_str(&format!("Generated at: {}\n\n", now));

        report.push_str(&format!(
            "Total rows: {}, valid: {}, with errors: {}\n\n",
            self.summary.total, self.summary.valid, self.summary.invalid
        ));

        for verdict in &self.invalid {
            report.push_str(&format!(
                "Row {}: {} error(s)\n",
                verdict.row_index,
                verdict.errors.len()
            ));

            match serde_json::to_string_pretty(&verdict.row.values) {
                Ok(json_data) => {
                    report.push_str(&format!("Row data: {}\n", json_data));
                }
                Err(_) => {
                    report.push_str("Row data: [Error serializing data]\n");
                }
            }

            report.push_str("Errors:\n");
            for error in &verdict.errors {
                report.push_str(&format!("  - {}\n", error));
            }
            report.push('\n');
        }

        report
    }
}

/// Validate every row and split the verdicts into valid and invalid sets
pub fn partition(rows: Vec<Row>) -> ImportReport {
    let total = rows.len();

    let (valid, invalid): (Vec<_>, Vec<_>) = rows
        .into_iter()
        .enumerate()
        .map(|(index, row)| validate_row(row, index))
        .partition(|verdict| verdict.is_valid);

    let summary = Summary {
        total,
        valid: valid.len(),
        invalid: invalid.len(),
    };

    ImportReport {
        valid,
        invalid,
        summary,
    }
}
