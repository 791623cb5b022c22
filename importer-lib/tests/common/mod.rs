use importer_lib::{ContactImporter, ContactImporterBuilder, SheetTable};
use serde_json::{Value, json};

// Re-export shared test utilities from src/test_utils.rs
pub use importer_lib::test_utils::{contact_row, create_sample_rows, create_sample_table};

/// Encode headers and rows as an in-memory `.xlsx` workbook
#[allow(dead_code)]
pub fn create_workbook_bytes(sheet_name: &str, headers: &[&str], rows: Vec<Vec<Value>>) -> Vec<u8> {
    let headers = headers.iter().map(|h| h.to_string()).collect();
    SheetTable::new(sheet_name, headers, rows)
        .to_bytes(importer_lib::OutputFormat::Xlsx)
        .unwrap()
}

/// Workbook holding the five sample contacts on a sheet named "Contacts"
#[allow(dead_code)]
pub fn create_sample_workbook_bytes() -> Vec<u8> {
    let (headers, rows) = create_sample_table();
    SheetTable::new("Contacts", headers, rows)
        .to_bytes(importer_lib::OutputFormat::Xlsx)
        .unwrap()
}

/// Import an in-memory workbook, panicking on failure
#[allow(dead_code)]
pub fn import_bytes(bytes: Vec<u8>) -> ContactImporter {
    ContactImporterBuilder::from_bytes(bytes, Some("contacts.xlsx"))
        .build()
        .unwrap()
}

/// A row of the four contact columns as raw cells
#[allow(dead_code)]
pub fn contact_cells(name: &str, email: &str, phone: Value, gender: &str) -> Vec<Value> {
    vec![json!(name), json!(email), phone, json!(gender)]
}
