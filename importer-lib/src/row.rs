use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Offset between a data row's zero-based index and its spreadsheet row number
/// (rows are 1-based and the header occupies row 1)
pub const HEADER_ROW_OFFSET: usize = 2;

pub const NAME_COLUMN: &str = "Name";
pub const EMAIL_COLUMN: &str = "Email";
pub const PHONE_COLUMN: &str = "Phone";
pub const GENDER_COLUMN: &str = "Gender";
pub const ERRORS_COLUMN: &str = "Errors";

/// One record from the imported sheet, keyed by header in column order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub position: usize,
    pub values: Map<String, Value>,
}

impl Row {
    /// Build a row from its zero-based index among the sheet's data rows
    pub fn new(index: usize, values: Map<String, Value>) -> Self {
        Row {
            position: index + HEADER_ROW_OFFSET,
            values,
        }
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.values.get(column)
    }

    pub fn columns(&self) -> impl Iterator<Item = &String> {
        self.values.keys()
    }
}
