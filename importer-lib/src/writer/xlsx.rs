//! Minimal single-sheet OOXML workbook writer.
//!
//! Strings are written as inline strings so no shared-string table is needed.

use std::fs;
use std::io::{Cursor, Write};
use std::path::Path;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use serde_json::Value;
use zip::CompressionMethod;
use zip::write::SimpleFileOptions;

use crate::error::Result;
use crate::utils::value_to_cell_string;
use crate::writer::SheetTable;

const SPREADSHEET_NS: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
const RELATIONSHIPS_NS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/><Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/></Types>"#;

const ROOT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#;

const WORKBOOK_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/></Relationships>"#;

/// Save the sheet as an `.xlsx` workbook
pub fn write_xlsx(table: &SheetTable, path: impl AsRef<Path>) -> Result<()> {
    let bytes = to_xlsx_bytes(table)?;
    fs::write(path, bytes)?;
    Ok(())
}

/// Encode the sheet as an `.xlsx` workbook in memory
pub fn to_xlsx_bytes(table: &SheetTable) -> Result<Vec<u8>> {
    let workbook_xml = workbook_xml(&table.name)?;
    let sheet_xml = worksheet_xml(table)?;

    let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let parts: [(&str, &[u8]); 5] = [
        ("[Content_Types].xml", CONTENT_TYPES_XML.as_bytes()),
        ("_rels/.rels", ROOT_RELS_XML.as_bytes()),
        ("xl/workbook.xml", &workbook_xml),
        ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS_XML.as_bytes()),
        ("xl/worksheets/sheet1.xml", &sheet_xml),
    ];

    for (name, content) in parts {
        zip.start_file(name, options)?;
        zip.write_all(content)?;
    }

    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}

fn workbook_xml(sheet_name: &str) -> Result<Vec<u8>> {
    let mut writer = Writer::new(Vec::new());
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
    writer.write_event(Event::Start(BytesStart::new("workbook").with_attributes([
        ("xmlns", SPREADSHEET_NS),
        ("xmlns:r", RELATIONSHIPS_NS),
    ])))?;
    writer.write_event(Event::Start(BytesStart::new("sheets")))?;
    writer.write_event(Event::Empty(BytesStart::new("sheet").with_attributes([
        ("name", sheet_name),
        ("sheetId", "1"),
        ("r:id", "rId1"),
    ])))?;
    writer.write_event(Event::End(BytesEnd::new("sheets")))?;
    writer.write_event(Event::End(BytesEnd::new("workbook")))?;
    Ok(writer.into_inner())
}

fn worksheet_xml(table: &SheetTable) -> Result<Vec<u8>> {
    let mut writer = Writer::new(Vec::new());
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
    writer.write_event(Event::Start(
        BytesStart::new("worksheet").with_attributes([("xmlns", SPREADSHEET_NS)]),
    ))?;
    writer.write_event(Event::Start(BytesStart::new("sheetData")))?;

    if !table.headers.is_empty() {
        let header_cells: Vec<Value> = table
            .headers
            .iter()
            .map(|h| Value::String(h.clone()))
            .collect();
        write_row(&mut writer, 1, &header_cells)?;
    }

    for (index, row) in table.rows.iter().enumerate() {
        write_row(&mut writer, index + 2, row)?;
    }

    writer.write_event(Event::End(BytesEnd::new("sheetData")))?;
    writer.write_event(Event::End(BytesEnd::new("worksheet")))?;
    Ok(writer.into_inner())
}

fn write_row(writer: &mut Writer<Vec<u8>>, row_number: usize, cells: &[Value]) -> Result<()> {
    let row_ref = row_number.to_string();
    writer.write_event(Event::Start(
        BytesStart::new("row").with_attributes([("r", row_ref.as_str())]),
    ))?;

    for (col_index, value) in cells.iter().enumerate() {
        let cell_ref = format!("{}{}", column_name(col_index), row_number);
        write_cell(writer, &cell_ref, value)?;
    }

    writer.write_event(Event::End(BytesEnd::new("row")))?;
    Ok(())
}

fn write_cell(writer: &mut Writer<Vec<u8>>, cell_ref: &str, value: &Value) -> Result<()> {
    match value {
        // Blank cells are simply left out
        Value::Null => {}
        Value::Number(_) => {
            writer.write_event(Event::Start(
                BytesStart::new("c").with_attributes([("r", cell_ref)]),
            ))?;
            write_text_element(writer, "v", &value_to_cell_string(value))?;
            writer.write_event(Event::End(BytesEnd::new("c")))?;
        }
        Value::Bool(b) => {
            writer.write_event(Event::Start(
                BytesStart::new("c").with_attributes([("r", cell_ref), ("t", "b")]),
            ))?;
            write_text_element(writer, "v", if *b { "1" } else { "0" })?;
            writer.write_event(Event::End(BytesEnd::new("c")))?;
        }
        Value::String(_) | Value::Array(_) | Value::Object(_) => {
            writer.write_event(Event::Start(
                BytesStart::new("c").with_attributes([("r", cell_ref), ("t", "inlineStr")]),
            ))?;
            writer.write_event(Event::Start(BytesStart::new("is")))?;
            writer.write_event(Event::Start(
                BytesStart::new("t").with_attributes([("xml:space", "preserve")]),
            ))?;
            writer.write_event(Event::Text(BytesText::new(&value_to_cell_string(value))))?;
            writer.write_event(Event::End(BytesEnd::new("t")))?;
            writer.write_event(Event::End(BytesEnd::new("is")))?;
            writer.write_event(Event::End(BytesEnd::new("c")))?;
        }
    }
    Ok(())
}

fn write_text_element(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Zero-based column index to its letter name: 0 -> A, 25 -> Z, 26 -> AA
fn column_name(mut index: usize) -> String {
    let mut name = Vec::new();
    loop {
        name.push(b'A' + (index % 26) as u8);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    name.reverse();
    String::from_utf8(name).unwrap_or_default()
}
