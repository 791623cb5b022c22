use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ImportError>;

/// Errors raised while reading or writing a spreadsheet.
///
/// Row-level validation problems are not errors; they are reported through
/// [`crate::FieldError`] inside each verdict.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Unsupported file format: {0}. Expected an .xlsx or .xls spreadsheet")]
    UnsupportedFormat(String),

    #[error("Could not read spreadsheet: {0}")]
    Spreadsheet(String),

    #[error("Sheet '{0}' was not found in the workbook")]
    SheetNotFound(String),

    #[error("The workbook does not contain any sheets")]
    EmptyWorkbook,

    #[error("ZIP archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl From<calamine::XlsxError> for ImportError {
    fn from(err: calamine::XlsxError) -> Self {
        ImportError::Spreadsheet(err.to_string())
    }
}

impl From<calamine::XlsError> for ImportError {
    fn from(err: calamine::XlsError) -> Self {
        ImportError::Spreadsheet(err.to_string())
    }
}
