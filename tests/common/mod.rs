//! Common test utilities for the contact-importer binary crate

use importer_lib::{ImportReport, partition};

pub use importer_lib::test_utils::{contact_row, create_sample_rows, row_from_json};

/// Validate the five sample contacts
#[allow(dead_code)]
pub fn create_sample_report() -> ImportReport {
    partition(create_sample_rows())
}
