#![allow(clippy::needless_return)]

mod error;
mod importer;
mod partition;
pub mod reader;
mod row;
mod row_validator;
pub mod utils;
pub mod validators;
pub mod writer;

// Test utilities - only compiled when testing or with test feature
// #[cfg(test)] alone doesn't work for integration tests (they're external crates)
// The feature flag makes it available to integration tests via dev-dependencies
#[cfg(any(test, feature = "test"))]
pub mod test_utils;

pub use error::{ImportError, Result};
pub use importer::{ContactImporter, ContactImporterBuilder};
pub use partition::{ImportReport, Summary, partition};
pub use reader::{InputFormat, ParsedSheet};
pub use row::{
    EMAIL_COLUMN, ERRORS_COLUMN, GENDER_COLUMN, HEADER_ROW_OFFSET, NAME_COLUMN, PHONE_COLUMN, Row,
};
pub use row_validator::{FieldError, ValidationVerdict, validate_row};
pub use writer::{OutputFormat, SheetTable};

pub const ERRORS_LOG_FILE: &str = "errors.log";
