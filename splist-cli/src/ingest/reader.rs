//! Decode spreadsheet bytes into raw rows
//!
//! Only the first worksheet is read. The first row supplies column names;
//! every following non-blank row becomes a [`RawRow`]. No schema is enforced
//! here.

use std::io::Cursor;

use anyhow::{Context, Result};
use calamine::{Data, Reader, open_workbook_auto_from_rs};

use super::row::{CellValue, RawRow};

/// Decode a workbook from raw file bytes and return its first sheet's data
/// rows in order. Fails without producing any rows when the bytes are not a
/// valid spreadsheet container.
pub fn read_rows(bytes: &[u8]) -> Result<Vec<RawRow>> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .context("file is not a readable spreadsheet")?;

    let sheet_names = workbook.sheet_names();
    let first_sheet = sheet_names
        .first()
        .cloned()
        .context("workbook contains no sheets")?;

    let range = workbook
        .worksheet_range(&first_sheet)
        .with_context(|| format!("failed to read sheet '{first_sheet}'"))?;

    let mut rows_iter = range.rows();
    let headers: Vec<String> = match rows_iter.next() {
        Some(header_row) => header_row
            .iter()
            .map(|cell| match cell {
                Data::String(s) => s.trim().to_string(),
                other => other.to_string(),
            })
            .collect(),
        None => return Ok(Vec::new()),
    };

    let mut rows = Vec::new();
    for sheet_row in rows_iter {
        let mut row = RawRow::new();
        for (col_idx, cell) in sheet_row.iter().enumerate() {
            let header = headers.get(col_idx).map(String::as_str).unwrap_or("");
            if header.is_empty() {
                continue;
            }
            if let Some(value) = cell_to_value(cell) {
                row.insert(header, value);
            }
        }
        // Fully blank rows are not part of the data sequence
        if !row.is_empty() {
            rows.push(row);
        }
    }

    Ok(rows)
}

/// Convert a cell into a typed value; blank and error cells yield `None`
fn cell_to_value(cell: &Data) -> Option<CellValue> {
    match cell {
        Data::Empty => None,
        Data::String(s) if s.trim().is_empty() => None,
        Data::String(s) => Some(CellValue::String(s.trim().to_string())),
        Data::Int(i) => Some(CellValue::Int(*i)),
        Data::Float(f) => {
            // Whole floats are stored as integers
            if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                Some(CellValue::Int(*f as i64))
            } else {
                Some(CellValue::Float(*f))
            }
        }
        Data::Bool(b) => Some(CellValue::Bool(*b)),
        Data::DateTime(dt) => dt.as_datetime().map(CellValue::DateTime),
        Data::DateTimeIso(s) => Some(CellValue::String(s.clone())),
        Data::DurationIso(s) => Some(CellValue::String(s.clone())),
        Data::Error(_) => None,
    }
}
