use std::collections::HashMap;
use std::fs;
use std::io::{Cursor, Read, Seek};
use std::path::Path;

use calamine::{Data, Range, Reader, Xls, Xlsx};
use chrono::{NaiveDate, TimeDelta};
use serde_json::{Map, Value, json};

use crate::error::{ImportError, Result};
use crate::row::Row;
use crate::utils::normalize_string;

/// ZIP file magic bytes: PK\x03\x04
const ZIP_MAGIC: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];

/// OLE2 compound document magic bytes used by legacy .xls files
const OLE_MAGIC: [u8; 8] = [0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];

const SECONDS_PER_DAY: f64 = 86400.0;

/// Key given to columns whose header cell is blank
const BLANK_HEADER: &str = "__EMPTY";

/// Spreadsheet containers accepted as input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Office Open XML workbook (.xlsx, .xlsm)
    Xlsx,
    /// Legacy binary workbook (.xls)
    Xls,
}

impl InputFormat {
    /// Detect the container from its leading bytes, falling back to the file extension
    pub fn detect(bytes: &[u8], file_name: Option<&str>) -> Result<Self> {
        if bytes.starts_with(&ZIP_MAGIC) {
            return Ok(InputFormat::Xlsx);
        }
        if bytes.starts_with(&OLE_MAGIC) {
            return Ok(InputFormat::Xls);
        }

        let extension = file_name
            .and_then(|name| Path::new(name).extension())
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase());

        match extension.as_deref() {
            Some("xlsx") | Some("xlsm") => Ok(InputFormat::Xlsx),
            Some("xls") => Ok(InputFormat::Xls),
            Some(other) => Err(ImportError::UnsupportedFormat(format!(".{}", other))),
            None => Err(ImportError::UnsupportedFormat(
                "unrecognized file contents".to_string(),
            )),
        }
    }
}

/// Headers and data rows of one sheet
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedSheet {
    pub sheet_name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

/// Read a spreadsheet file fully into memory and parse the requested sheet
pub fn read_sheet_from_path(path: impl AsRef<Path>, sheet_name: Option<&str>) -> Result<ParsedSheet> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let file_name = path.file_name().and_then(|name| name.to_str());
    read_sheet_from_bytes(bytes, file_name, sheet_name)
}

/// Parse a spreadsheet already held in memory
///
/// `file_name` is only used to guess the format when the leading bytes are not conclusive.
/// When `sheet_name` is `None` the first sheet is used.
pub fn read_sheet_from_bytes(
    bytes: Vec<u8>,
    file_name: Option<&str>,
    sheet_name: Option<&str>,
) -> Result<ParsedSheet> {
    let format = InputFormat::detect(&bytes, file_name)?;
    let cursor = Cursor::new(bytes);

    let (sheet_name, range) = match format {
        InputFormat::Xlsx => {
            let mut workbook: Xlsx<_> = Xlsx::new(cursor)?;
            select_range(&mut workbook, sheet_name)?
        }
        InputFormat::Xls => {
            let mut workbook: Xls<_> = Xls::new(cursor)?;
            select_range(&mut workbook, sheet_name)?
        }
    };

    let (headers, rows) = parse_range(&range)?;

    Ok(ParsedSheet {
        sheet_name,
        headers,
        rows,
    })
}

fn select_range<RS, R>(workbook: &mut R, sheet_name: Option<&str>) -> Result<(String, Range<Data>)>
where
    RS: Read + Seek,
    R: Reader<RS>,
    ImportError: From<R::Error>,
{
    let sheet_names = workbook.sheet_names();

    let name = match sheet_name {
        Some(requested) => sheet_names
            .iter()
            .find(|name| name.as_str() == requested)
            .cloned()
            .ok_or_else(|| ImportError::SheetNotFound(requested.to_string()))?,
        None => sheet_names
            .first()
            .cloned()
            .ok_or(ImportError::EmptyWorkbook)?,
    };

    let range = workbook.worksheet_range(&name)?;
    Ok((name, range))
}

/// Split a sheet range into normalized headers and keyed data rows
fn parse_range(range: &Range<Data>) -> Result<(Vec<String>, Vec<Row>)> {
    let mut rows_iter = range.rows();

    let Some(header_row) = rows_iter.next() else {
        return Ok((Vec::new(), Vec::new()));
    };

    let headers = disambiguate_headers(
        header_row
            .iter()
            .map(|cell| normalize_string(&cell.to_string())),
    );

    let mut rows = Vec::new();
    for row in rows_iter {
        if is_empty_row(row) {
            continue;
        }

        let mut values = Map::new();
        for (header, cell) in headers.iter().zip(row.iter()) {
            if let Some(value) = convert_cell(cell) {
                values.insert(header.clone(), value);
            }
        }

        rows.push(Row::new(rows.len(), values));
    }

    Ok((headers, rows))
}

/// Give every column a unique key
///
/// Blank headers become `__EMPTY`. A repeated name gets the first free `_<n>` suffix,
/// so `Email, Email` reads as `Email, Email_1`.
fn disambiguate_headers(headers: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut unique = Vec::new();

    for header in headers {
        let base = if header.is_empty() {
            BLANK_HEADER.to_string()
        } else {
            header
        };

        let name = match seen.get(&base).copied() {
            None => {
                seen.insert(base.clone(), 1);
                base
            }
            Some(mut counter) => {
                let mut candidate = format!("{}_{}", base, counter);
                counter += 1;
                while seen.contains_key(&candidate) {
                    candidate = format!("{}_{}", base, counter);
                    counter += 1;
                }
                seen.insert(base, counter);
                seen.insert(candidate.clone(), 1);
                candidate
            }
        };
        unique.push(name);
    }

    unique
}

/// Only truly empty cells make a blank row; whitespace text still counts as content
fn is_empty_row(row: &[Data]) -> bool {
    row.iter()
        .all(|cell| matches!(cell, Data::Empty | Data::Error(_)))
}

/// Convert a cell to a row value; `None` means the cell is left out of the row
fn convert_cell(cell: &Data) -> Option<Value> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) => Some(Value::String(s.clone())),
        Data::Float(f) => convert_float(*f),
        Data::Int(i) => Some(json!(*i)),
        Data::Bool(b) => Some(Value::Bool(*b)),
        Data::DateTime(dt) => {
            let serial = dt.as_f64();
            Some(match excel_serial_to_string(serial) {
                Some(formatted) => Value::String(formatted),
                None => json!(serial),
            })
        }
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(Value::String(s.clone())),
    }
}

fn convert_float(f: f64) -> Option<Value> {
    if f.is_nan() || f.is_infinite() {
        return None;
    }

    // Spreadsheets store every number as a float; keep whole numbers integral
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        Some(json!(f as i64))
    } else {
        Some(json!(f))
    }
}

/// Excel serial date (days since 1899-12-30) as `YYYY-MM-DD HH:MM:SS`
fn excel_serial_to_string(serial: f64) -> Option<String> {
    let base = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;
    let seconds = (serial * SECONDS_PER_DAY).round();
    if !seconds.is_finite() || seconds.abs() > i64::MAX as f64 {
        return None;
    }
    let offset = TimeDelta::try_seconds(seconds as i64)?;
    base.checked_add_signed(offset)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_detect_by_magic_bytes() {
        let xlsx = [0x50, 0x4B, 0x03, 0x04, 0x00];
        assert_eq!(InputFormat::detect(&xlsx, None).unwrap(), InputFormat::Xlsx);

        let xls = [0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1, 0x00];
        assert_eq!(
            InputFormat::detect(&xls, Some("renamed.xlsx")).unwrap(),
            InputFormat::Xls
        );
    }

    #[test]
    fn test_detect_falls_back_to_extension() {
        assert_eq!(
            InputFormat::detect(b"garbage", Some("Contacts.XLSX")).unwrap(),
            InputFormat::Xlsx
        );
        assert_eq!(
            InputFormat::detect(b"garbage", Some("contacts.xls")).unwrap(),
            InputFormat::Xls
        );
    }

    #[test]
    fn test_detect_rejects_unknown_files() {
        let err = InputFormat::detect(b"name,email\n", Some("contacts.csv")).unwrap_err();
        assert!(matches!(err, ImportError::UnsupportedFormat(ref ext) if ext == ".csv"));

        let err = InputFormat::detect(b"", None).unwrap_err();
        assert!(matches!(err, ImportError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_convert_cell() {
        assert_eq!(convert_cell(&Data::Empty), None);
        assert_eq!(convert_cell(&Data::Float(1234567890.0)), Some(json!(1234567890)));
        assert_eq!(convert_cell(&Data::Float(2.5)), Some(json!(2.5)));
        assert_eq!(convert_cell(&Data::Float(f64::NAN)), None);
        assert_eq!(convert_cell(&Data::Int(7)), Some(json!(7)));
        assert_eq!(convert_cell(&Data::Bool(true)), Some(json!(true)));
        assert_eq!(
            convert_cell(&Data::String(" M ".to_string())),
            Some(json!(" M "))
        );
    }

    #[test]
    fn test_excel_serial_to_string() {
        assert_eq!(
            excel_serial_to_string(45000.5).as_deref(),
            Some("2023-03-15 12:00:00")
        );
        assert_eq!(excel_serial_to_string(f64::INFINITY), None);
    }

    #[test]
    fn test_unique_headers_are_unchanged() {
        let headers = disambiguate_headers(strings(&["Name", "Email", "Phone", "Gender"]));
        assert_eq!(headers, strings(&["Name", "Email", "Phone", "Gender"]));
    }

    #[test]
    fn test_duplicate_headers_get_suffixes() {
        let headers = disambiguate_headers(strings(&["Name", "Email", "Phone", "Email", "Email"]));
        assert_eq!(headers, strings(&["Name", "Email", "Phone", "Email_1", "Email_2"]));
    }

    #[test]
    fn test_suffix_skips_names_already_taken() {
        let headers = disambiguate_headers(strings(&["Email", "Email_1", "Email"]));
        assert_eq!(headers, strings(&["Email", "Email_1", "Email_2"]));
    }

    #[test]
    fn test_blank_headers_are_named() {
        let headers = disambiguate_headers(strings(&["Name", "", "Email", ""]));
        assert_eq!(headers, strings(&["Name", "__EMPTY", "Email", "__EMPTY_1"]));
    }

    #[test]
    fn test_headers_are_case_sensitive() {
        let headers = disambiguate_headers(strings(&["Email", "email"]));
        assert_eq!(headers, strings(&["Email", "email"]));
    }

    #[test]
    fn test_parse_range_skips_blank_rows_and_cells() {
        let mut range: Range<Data> = Range::new((0, 0), (4, 2));
        range.set_value((0, 0), Data::String("Name".to_string()));
        range.set_value((0, 1), Data::String(" Email\n".to_string()));
        range.set_value((0, 2), Data::String("Phone".to_string()));
        range.set_value((1, 0), Data::String("Ada".to_string()));
        range.set_value((1, 2), Data::Float(1234567890.0));
        // Row 3 is left completely empty
        range.set_value((3, 0), Data::String("   ".to_string()));
        range.set_value((4, 1), Data::String("grace@navy.mil".to_string()));

        let (headers, rows) = parse_range(&range).unwrap();

        assert_eq!(headers, strings(&["Name", "Email", "Phone"]));
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].position, 2);
        assert_eq!(rows[0].get("Name"), Some(&json!("Ada")));
        assert_eq!(rows[0].get("Email"), None);
        assert_eq!(rows[0].get("Phone"), Some(&json!(1234567890)));
        assert_eq!(rows[1].position, 3);
        assert_eq!(rows[1].get("Name"), Some(&json!("   ")));
        assert_eq!(rows[2].position, 4);
        assert_eq!(rows[2].get("Email"), Some(&json!("grace@navy.mil")));
    }

    #[test]
    fn test_parse_range_keeps_cells_under_blank_and_repeated_headers() {
        let mut range: Range<Data> = Range::new((0, 0), (1, 3));
        range.set_value((0, 0), Data::String("Email".to_string()));
        range.set_value((0, 2), Data::String("Email".to_string()));
        range.set_value((0, 3), Data::String("  ".to_string()));
        range.set_value((1, 0), Data::String("ada@example.com".to_string()));
        range.set_value((1, 1), Data::String("note".to_string()));
        range.set_value((1, 2), Data::String("ada@example.org".to_string()));
        range.set_value((1, 3), Data::Int(7));

        let (headers, rows) = parse_range(&range).unwrap();

        assert_eq!(headers, strings(&["Email", "__EMPTY", "Email_1", "__EMPTY_1"]));
        assert_eq!(rows[0].get("Email"), Some(&json!("ada@example.com")));
        assert_eq!(rows[0].get("__EMPTY"), Some(&json!("note")));
        assert_eq!(rows[0].get("Email_1"), Some(&json!("ada@example.org")));
        assert_eq!(rows[0].get("__EMPTY_1"), Some(&json!(7)));
    }

    #[test]
    fn test_error_cells_alone_make_a_blank_row() {
        let mut range: Range<Data> = Range::new((0, 0), (1, 1));
        range.set_value((0, 0), Data::String("Name".to_string()));
        range.set_value((0, 1), Data::String("Email".to_string()));
        range.set_value((1, 0), Data::Error(calamine::CellErrorType::NA));

        let (_, rows) = parse_range(&range).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_parse_empty_range() {
        let range: Range<Data> = Range::empty();
        let (headers, rows) = parse_range(&range).unwrap();
        assert!(headers.is_empty());
        assert!(rows.is_empty());
    }
}
