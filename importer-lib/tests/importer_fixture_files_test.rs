//! Workbooks laid out the way desktop spreadsheet applications save them:
//! shared string tables, styled date cells, and the legacy BIFF8 container.

use std::path::PathBuf;

use importer_lib::{ContactImporter, ContactImporterBuilder, FieldError, Summary};
use serde_json::json;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

fn import_fixture(name: &str) -> ContactImporter {
    ContactImporterBuilder::new(fixture(name)).build().unwrap()
}

/// Both fixtures hold the same sheet, so every format is checked against one expectation
fn assert_contacts_sheet(importer: &ContactImporter) {
    assert_eq!(importer.sheet_name(), "Contacts");
    assert_eq!(
        importer.headers(),
        ["Name", "Email", "Phone", "Gender", "Joined"]
    );

    let rows = importer.rows();
    // Sheet row 5 is empty and is skipped
    assert_eq!(rows.len(), 5);

    assert_eq!(rows[0].get("Name"), Some(&json!("Ada Lovelace")));
    assert_eq!(rows[0].get("Phone"), Some(&json!(1234567890)));
    assert_eq!(rows[0].get("Joined"), Some(&json!("2023-03-15 12:00:00")));

    assert_eq!(rows[1].get("Phone"), Some(&json!(9876543210_i64)));
    assert_eq!(rows[1].get("Joined"), Some(&json!("2023-03-16 00:00:00")));

    assert_eq!(rows[2].get("Phone"), Some(&json!("12345")));
    assert_eq!(rows[2].get("Joined"), None);

    assert_eq!(rows[3].get("Phone"), Some(&json!("+14155550123")));
    assert_eq!(rows[3].get("Joined"), Some(&json!("2023-03-17 06:00:00")));

    assert_eq!(rows[4].get("Name"), Some(&json!("   ")));
    assert_eq!(rows[4].values.len(), 1);

    let report = importer.validate();
    assert_eq!(
        report.summary,
        Summary {
            total: 5,
            valid: 2,
            invalid: 3
        }
    );

    let valid_names: Vec<_> = report
        .valid
        .iter()
        .map(|v| v.row.get("Name").cloned())
        .collect();
    assert_eq!(
        valid_names,
        [Some(json!("Ada Lovelace")), Some(json!("Katherine Johnson"))]
    );

    let failed_positions: Vec<_> = report.invalid.iter().map(|v| v.row_index).collect();
    assert_eq!(failed_positions, [3, 4, 6]);

    assert_eq!(report.invalid[0].errors, [FieldError::InvalidEmail]);
    assert_eq!(
        report.invalid[1].errors,
        [FieldError::InvalidPhone, FieldError::InvalidGender]
    );
    assert_eq!(report.invalid[2].errors.len(), 4);
}

#[test]
fn test_xlsx_with_shared_strings_and_dates() {
    assert_contacts_sheet(&import_fixture("contacts.xlsx"));
}

#[test]
fn test_legacy_xls_workbook() {
    assert_contacts_sheet(&import_fixture("contacts.xls"));
}

#[test]
fn test_xls_detected_from_contents_despite_extension() {
    let bytes = std::fs::read(fixture("contacts.xls")).unwrap();
    let importer = ContactImporterBuilder::from_bytes(bytes, Some("contacts.xlsx"))
        .build()
        .unwrap();

    assert_contacts_sheet(&importer);
}

#[test]
fn test_second_sheet_with_headers_only() {
    for name in ["contacts.xlsx", "contacts.xls"] {
        let importer = ContactImporterBuilder::new(fixture(name))
            .sheet_name("Archive")
            .build()
            .unwrap();

        assert_eq!(importer.headers(), ["Name", "Email", "Phone", "Gender"]);
        assert!(importer.rows().is_empty());
        assert_eq!(importer.validate().summary, Summary::default());
    }
}
