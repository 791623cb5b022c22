use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::utils::value_to_cell_string;
use crate::writer::SheetTable;

/// Save the sheet as CSV, quoting fields only when necessary (e.g. when they contain commas)
pub fn write_csv(table: &SheetTable, path: impl AsRef<Path>) -> Result<()> {
    let wtr = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Necessary)
        .from_path(path)?;
    write_records(table, wtr)
}

/// Encode the sheet as CSV in memory
pub fn to_csv_bytes(table: &SheetTable) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    {
        let wtr = csv::WriterBuilder::new()
            .quote_style(csv::QuoteStyle::Necessary)
            .from_writer(&mut buffer);
        write_records(table, wtr)?;
    }
    Ok(buffer)
}

fn write_records<W: Write>(table: &SheetTable, mut wtr: csv::Writer<W>) -> Result<()> {
    wtr.write_record(&table.headers)?;

    for row in &table.rows {
        let record: Vec<String> = row.iter().map(value_to_cell_string).collect();
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn test_csv_quotes_only_when_needed() {
        let table = SheetTable::new(
            "Failed Rows",
            vec!["Name".to_string(), "Phone".to_string(), "Errors".to_string()],
            vec![vec![
                json!("Doe, Jane"),
                json!(1234567890),
                json!("Email is invalid or missing; Gender must be either 'M' or 'F'"),
            ]],
        );

        let bytes = to_csv_bytes(&table).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert_eq!(
            text,
            "Name,Phone,Errors\n\"Doe, Jane\",1234567890,Email is invalid or missing; Gender must be either 'M' or 'F'\n"
        );
    }

    #[test]
    fn test_csv_blank_cells_are_empty_fields() {
        let table = SheetTable::new(
            "Valid Rows",
            vec!["Name".to_string(), "Email".to_string()],
            vec![vec![json!("Ada"), Value::Null]],
        );

        let text = String::from_utf8(to_csv_bytes(&table).unwrap()).unwrap();
        assert_eq!(text, "Name,Email\nAda,\n");
    }
}
