//! Output sheets for the valid and failed rows.

mod delimited;
mod xlsx;

use std::collections::HashSet;
use std::path::Path;

use serde_json::Value;

use crate::error::Result;
use crate::row::ERRORS_COLUMN;
use crate::row_validator::ValidationVerdict;

pub use self::delimited::{to_csv_bytes, write_csv};
pub use self::xlsx::{to_xlsx_bytes, write_xlsx};

pub const VALID_ROWS_SHEET: &str = "Valid Rows";
pub const FAILED_ROWS_SHEET: &str = "Failed Rows";
pub const VALID_ROWS_FILE_STEM: &str = "valid_rows";
pub const FAILED_ROWS_FILE_STEM: &str = "failed_rows";

/// Container used when saving an output sheet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Xlsx,
    Csv,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Xlsx => "xlsx",
            OutputFormat::Csv => "csv",
        }
    }
}

/// A single named sheet ready to be written: a header row plus value rows
#[derive(Debug, Clone, PartialEq)]
pub struct SheetTable {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl SheetTable {
    pub fn new(name: &str, headers: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        SheetTable {
            name: name.to_string(),
            headers,
            rows,
        }
    }

    /// Sheet of the passing rows with their original fields only
    pub fn valid_rows(verdicts: &[ValidationVerdict]) -> Self {
        let headers = collect_columns(verdicts);
        let rows = verdicts
            .iter()
            .map(|verdict| {
                headers
                    .iter()
                    .map(|header| verdict.row.get(header).cloned().unwrap_or(Value::Null))
                    .collect()
            })
            .collect();

        SheetTable::new(VALID_ROWS_SHEET, headers, rows)
    }

    /// Sheet of the failing rows with a trailing `Errors` column
    pub fn failed_rows(verdicts: &[ValidationVerdict]) -> Self {
        let mut headers = collect_columns(verdicts);
        headers.retain(|header| header != ERRORS_COLUMN);

        let rows = verdicts
            .iter()
            .map(|verdict| {
                let mut cells: Vec<Value> = headers
                    .iter()
                    .map(|header| verdict.row.get(header).cloned().unwrap_or(Value::Null))
                    .collect();
                cells.push(Value::String(verdict.joined_messages()));
                cells
            })
            .collect();

        headers.push(ERRORS_COLUMN.to_string());
        SheetTable::new(FAILED_ROWS_SHEET, headers, rows)
    }

    /// Save the sheet to `path` in the requested container
    pub fn write_to_path(&self, path: impl AsRef<Path>, format: OutputFormat) -> Result<()> {
        match format {
            OutputFormat::Xlsx => write_xlsx(self, path),
            OutputFormat::Csv => write_csv(self, path),
        }
    }

    /// Encode the sheet in memory in the requested container
    pub fn to_bytes(&self, format: OutputFormat) -> Result<Vec<u8>> {
        match format {
            OutputFormat::Xlsx => to_xlsx_bytes(self),
            OutputFormat::Csv => to_csv_bytes(self),
        }
    }
}

/// Union of the rows' columns in first-seen order
fn collect_columns(verdicts: &[ValidationVerdict]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut columns = Vec::new();

    for verdict in verdicts {
        for column in verdict.row.columns() {
            if seen.insert(column.as_str()) {
                columns.push(column.clone());
            }
        }
    }

    columns
}
