use serde::Serialize;
use thiserror::Error;

use crate::row::{EMAIL_COLUMN, GENDER_COLUMN, HEADER_ROW_OFFSET, NAME_COLUMN, PHONE_COLUMN, Row};
use crate::validators::{validate_email, validate_gender, validate_name, validate_phone};

/// A single failed field rule. The display text is what ends up in the `Errors` column.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldError {
    #[error("Name is required and must be a valid string")]
    InvalidName,

    #[error("Email is invalid or missing")]
    InvalidEmail,

    #[error("Phone number is invalid or missing")]
    InvalidPhone,

    #[error("Gender must be either 'M' or 'F'")]
    InvalidGender,
}

/// Outcome of validating one row
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationVerdict {
    pub is_valid: bool,
    pub errors: Vec<FieldError>,
    pub row: Row,
    pub row_index: usize,
}

impl ValidationVerdict {
    /// Error messages in the order the rules were checked
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }

    /// Messages joined the way the failed-rows sheet stores them
    pub fn joined_messages(&self) -> String {
        self.messages().join("; ")
    }
}

/// Validate one row against the four contact rules.
///
/// Every rule is checked; a row can collect up to four errors. `index` is the
/// zero-based position among data rows and is reported back as a spreadsheet
/// row number.
pub fn validate_row(row: Row, index: usize) -> ValidationVerdict {
    let mut errors = Vec::new();

    if !validate_name(row.get(NAME_COLUMN)) {
        errors.push(FieldError::InvalidName);
    }

    if !validate_email(row.get(EMAIL_COLUMN)) {
        errors.push(FieldError::InvalidEmail);
    }

    if !validate_phone(row.get(PHONE_COLUMN)) {
        errors.push(FieldError::InvalidPhone);
    }

    if !validate_gender(row.get(GENDER_COLUMN)) {
        errors.push(FieldError::InvalidGender);
    }

    ValidationVerdict {
        is_valid: errors.is_empty(),
        errors,
        row,
        row_index: index + HEADER_ROW_OFFSET,
    }
}
