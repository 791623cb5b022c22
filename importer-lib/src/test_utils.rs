// Test utilities available to both unit and integration tests
// Only compiled when testing

use serde_json::{Map, Value, json};

use crate::row::Row;

/// Build a row from a JSON object literal, keeping key order
#[allow(dead_code)]
pub fn row_from_json(index: usize, values: Value) -> Row {
    let values = match values {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    Row::new(index, values)
}

/// Build a row with the four contact columns
#[allow(dead_code)]
pub fn contact_row(index: usize, name: &str, email: &str, phone: Value, gender: &str) -> Row {
    row_from_json(
        index,
        json!({
            "Name": name,
            "Email": email,
            "Phone": phone,
            "Gender": gender
        }),
    )
}

/// Five rows: indices 0, 2, 4 are valid; 1 has a bad email; 3 has a short phone and bad gender
#[allow(dead_code)]
pub fn create_sample_rows() -> Vec<Row> {
    vec![
        contact_row(0, "Ada Lovelace", "ada@example.com", json!(1234567890), "F"),
        contact_row(1, "Alan Turing", "alan.example.com", json!("4412345678"), "M"),
        contact_row(2, "Grace Hopper", "grace@navy.mil", json!("2025550143"), "f"),
        contact_row(3, "Linus", "linus@kernel.org", json!(12345), "X"),
        contact_row(4, "Barbara Liskov", "liskov@mit.edu", json!(6172530000_i64), "f"),
    ]
}

/// Header row plus data rows as raw cells, used to build workbooks in tests
#[allow(dead_code)]
pub fn create_sample_table() -> (Vec<String>, Vec<Vec<Value>>) {
    let headers = ["Name", "Email", "Phone", "Gender"]
        .iter()
        .map(|h| h.to_string())
        .collect();

    let rows = create_sample_rows()
        .into_iter()
        .map(|row| row.values.into_iter().map(|(_, v)| v).collect())
        .collect();

    (headers, rows)
}
