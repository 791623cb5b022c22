use std::path::PathBuf;

use crate::error::Result;
use crate::partition::{ImportReport, partition};
use crate::reader::{ParsedSheet, read_sheet_from_bytes, read_sheet_from_path};
use crate::row::Row;
use crate::utils::write_error_to_log;

enum Source {
    Path(PathBuf),
    Bytes {
        bytes: Vec<u8>,
        file_name: Option<String>,
    },
}

pub struct ContactImporterBuilder {
    source: Source,
    sheet_name: Option<String>,
}

impl ContactImporterBuilder {
    /// Create a builder for a spreadsheet on disk
    ///
    /// # Arguments
    /// * `excel_path` - Path to the `.xlsx` or `.xls` file
    pub fn new(excel_path: impl Into<PathBuf>) -> Self {
        ContactImporterBuilder {
            source: Source::Path(excel_path.into()),
            sheet_name: None,
        }
    }

    /// Create a builder for a spreadsheet already loaded into memory
    ///
    /// # Arguments
    /// * `bytes` - The complete file contents
    /// * `file_name` - Original file name, used as a format hint
    pub fn from_bytes(bytes: Vec<u8>, file_name: Option<&str>) -> Self {
        ContactImporterBuilder {
            source: Source::Bytes {
                bytes,
                file_name: file_name.map(str::to_string),
            },
            sheet_name: None,
        }
    }

    /// Read a specific sheet instead of the first one
    pub fn sheet_name(mut self, sheet_name: impl Into<String>) -> Self {
        self.sheet_name = Some(sheet_name.into());
        self
    }

    /// Build the ContactImporter, reading and parsing the spreadsheet once
    pub fn build(self) -> Result<ContactImporter> {
        let sheet_name = self.sheet_name.as_deref();

        let parsed = match self.source {
            Source::Path(path) => read_sheet_from_path(&path, sheet_name),
            Source::Bytes { bytes, file_name } => {
                read_sheet_from_bytes(bytes, file_name.as_deref(), sheet_name)
            }
        };

        match parsed {
            Ok(sheet) => Ok(ContactImporter { sheet }),
            Err(e) => {
                write_error_to_log("Spreadsheet Import Error", &e.to_string());
                Err(e)
            }
        }
    }
}

/// A parsed spreadsheet ready to be validated
pub struct ContactImporter {
    sheet: ParsedSheet,
}

impl ContactImporter {
    pub fn sheet_name(&self) -> &str {
        &self.sheet.sheet_name
    }

    /// Get the normalized headers from the spreadsheet
    pub fn headers(&self) -> &[String] {
        &self.sheet.headers
    }

    /// Get the parsed data rows from the spreadsheet
    pub fn rows(&self) -> &[Row] {
        &self.sheet.rows
    }

    /// Validate every row and split them into valid and failed sets
    ///
    /// Failed rows are also appended to the error log.
    pub fn validate(&self) -> ImportReport {
        let report = partition(self.sheet.rows.clone());

        if report.has_failures() {
            write_error_to_log(
                "Contact Validation Error Report",
                &report.format_validation_report(),
            );
        }

        report
    }
}
