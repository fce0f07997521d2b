//! Read the first worksheet of an RVTools export into rows

use std::collections::HashMap;
use std::io::Cursor;
use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto_from_rs};

use crate::ingest::{CellValue, Row};

/// File extensions calamine can open
const EXCEL_EXTENSIONS: &[&str] = &["xls", "xlsx", "xlsm", "xlsb"];

/// Name given to columns with a blank header cell
const EMPTY_HEADER: &str = "__EMPTY";

/// Error decoding a workbook
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// File is not an Excel workbook
    UnsupportedFile { path: String },
    /// File could not be read
    Io { path: String, message: String },
    /// Workbook bytes could not be parsed
    Workbook(String),
    /// Workbook has no worksheets
    NoSheets,
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::UnsupportedFile { path } => write!(
                f,
                "Please select a valid Excel file (.xls or .xlsx): '{}'",
                path
            ),
            DecodeError::Io { path, message } => {
                write!(f, "Error reading the file '{}': {}", path, message)
            }
            DecodeError::Workbook(message) => write!(
                f,
                "Failed to parse Excel file. Please make sure it is a valid RVTools export. ({})",
                message
            ),
            DecodeError::NoSheets => write!(f, "Excel file has no sheets"),
        }
    }
}

impl std::error::Error for DecodeError {}

/// Check that a path looks like an Excel workbook
pub fn validate_extension(path: &Path) -> Result<(), DecodeError> {
    let supported = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            EXCEL_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false);

    if supported {
        Ok(())
    } else {
        Err(DecodeError::UnsupportedFile {
            path: path.display().to_string(),
        })
    }
}

/// Read the workbook at `path` fully into memory and decode its first sheet
pub fn read_rows_from_path(path: &Path) -> Result<Vec<Row>, DecodeError> {
    validate_extension(path)?;

    let bytes = std::fs::read(path).map_err(|e| DecodeError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    log::debug!("Read {} bytes from {}", bytes.len(), path.display());
    read_rows_from_bytes(bytes)
}

/// Decode the first sheet of an in-memory workbook (.xls or .xlsx)
///
/// The first used row is the header row; every following non-blank row becomes
/// a [`Row`] keyed by header text. Empty and error cells are left out of the row.
pub fn read_rows_from_bytes(bytes: Vec<u8>) -> Result<Vec<Row>, DecodeError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| DecodeError::Workbook(e.to_string()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(DecodeError::NoSheets)?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| DecodeError::Workbook(format!("sheet '{}': {}", sheet_name, e)))?;

    let mut rows_iter = range.rows();
    let Some(header_row) = rows_iter.next() else {
        log::debug!("Sheet '{}' is empty", sheet_name);
        return Ok(Vec::new());
    };

    let headers = header_names(header_row);
    log::debug!("Sheet '{}' headers: {:?}", sheet_name, headers);

    let rows: Vec<Row> = rows_iter
        .filter_map(|cells| record(&headers, cells))
        .collect();

    log::info!("Decoded {} rows from sheet '{}'", rows.len(), sheet_name);
    Ok(rows)
}

/// Build the row for one data line, or `None` when every cell is blank
fn record(headers: &[String], cells: &[Data]) -> Option<Row> {
    if cells.iter().all(is_blank) {
        return None;
    }

    let row = headers
        .iter()
        .zip(cells)
        .filter(|(_, cell)| !is_blank(cell))
        .map(|(header, cell)| (header.clone(), cell_value(cell)))
        .collect();
    Some(row)
}

/// Empty cells and error values (`#N/A`, `#REF!`, ...) carry no data
fn is_blank(cell: &Data) -> bool {
    matches!(cell, Data::Empty | Data::Error(_))
}

/// Derive distinct column keys from the header row.
///
/// Blank headers become `__EMPTY`; repeated names get `_1`, `_2`, ... suffixes.
fn header_names(cells: &[Data]) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut names = Vec::with_capacity(cells.len());

    for cell in cells {
        let mut base = cell_text(cell);
        if base.is_empty() {
            base = EMPTY_HEADER.to_string();
        }

        let name = match seen.get(&base).copied() {
            None => {
                seen.insert(base.clone(), 1);
                base
            }
            Some(mut count) => {
                let mut candidate = format!("{}_{}", base, count);
                while seen.contains_key(&candidate) {
                    count += 1;
                    candidate = format!("{}_{}", base, count);
                }
                seen.insert(base, count + 1);
                seen.insert(candidate.clone(), 1);
                candidate
            }
        };
        names.push(name);
    }

    names
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::Error(e) => e.to_string(),
        other => cell_value(other).to_string(),
    }
}

fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        // Dates stay as their Excel serial number
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(_) | Data::Empty => CellValue::Absent,
    }
}
