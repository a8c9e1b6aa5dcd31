//! Typed cell values and the raw row mapping produced by the spreadsheet reader

use std::collections::HashMap;

use chrono::NaiveDateTime;

/// A decoded spreadsheet cell value
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Non-empty text
    String(String),
    /// Whole number
    Int(i64),
    /// Floating point number
    Float(f64),
    /// Boolean cell
    Bool(bool),
    /// Date-formatted cell, materialized as a native datetime
    DateTime(NaiveDateTime),
}

impl CellValue {
    /// Presence test applied by the validator.
    ///
    /// Blank cells never reach a `CellValue`, but `0`, `0.0`, `false` and the
    /// empty string also fail this test: the importer treats falsy cells the
    /// same as blank ones.
    pub fn is_truthy(&self) -> bool {
        match self {
            CellValue::String(s) => !s.is_empty(),
            CellValue::Int(i) => *i != 0,
            CellValue::Float(f) => *f != 0.0,
            CellValue::Bool(b) => *b,
            CellValue::DateTime(_) => true,
        }
    }

    /// Coerce to text for pass-through fields
    pub fn to_text(&self) -> String {
        match self {
            CellValue::String(s) => s.clone(),
            CellValue::Int(i) => i.to_string(),
            CellValue::Float(f) => f.to_string(),
            CellValue::Bool(b) => b.to_string(),
            CellValue::DateTime(dt) => dt.to_string(),
        }
    }

    /// Coerce to a number, if the cell holds one (or numeric text)
    pub fn to_number(&self) -> Option<f64> {
        match self {
            CellValue::Int(i) => Some(*i as f64),
            CellValue::Float(f) => Some(*f),
            CellValue::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
    }
}

/// One parsed spreadsheet row: column name -> cell value.
///
/// No shape is enforced at parse time; columns that were blank or absent in
/// the sheet simply have no entry.
#[derive(Debug, Clone, Default)]
pub struct RawRow {
    cells: HashMap<String, CellValue>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: impl Into<String>, value: CellValue) {
        self.cells.insert(column.into(), value);
    }

    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column)
    }

    /// True when the column is present and its value passes the presence test
    pub fn has_value(&self, column: &str) -> bool {
        self.cells.get(column).is_some_and(CellValue::is_truthy)
    }

    /// Text coercion of the column's value, if present
    pub fn text(&self, column: &str) -> Option<String> {
        self.cells.get(column).map(CellValue::to_text)
    }

    /// Numeric coercion of the column's value, if present and numeric
    pub fn number(&self, column: &str) -> Option<f64> {
        self.cells.get(column).and_then(CellValue::to_number)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthiness() {
        assert!(CellValue::String("x".into()).is_truthy());
        assert!(!CellValue::String("".into()).is_truthy());
        assert!(CellValue::Int(5).is_truthy());
        assert!(!CellValue::Int(0).is_truthy());
        assert!(!CellValue::Float(0.0).is_truthy());
        assert!(!CellValue::Bool(false).is_truthy());
        assert!(CellValue::Bool(true).is_truthy());
    }

    #[test]
    fn test_has_value_absent_column() {
        let row = RawRow::new();
        assert!(!row.has_value("Salary"));
    }

    #[test]
    fn test_number_coercion() {
        let mut row = RawRow::new();
        row.insert("Salary", CellValue::Int(50000));
        row.insert("Rate", CellValue::String("12.5".into()));
        assert_eq!(row.number("Salary"), Some(50000.0));
        assert_eq!(row.number("Rate"), Some(12.5));
        assert_eq!(row.number("Missing"), None);
    }
}
