//! Row-by-row ingestion: validate, normalize, and partition a parsed batch

use anyhow::{Context, Result};

use super::dates::date_only_to_utc;
use super::record::{EmployeeRecord, SocialProfile};
use super::row::RawRow;
use super::validate::missing_fields;

/// Data rows start on spreadsheet row 2 (row 1 is the header), so a data
/// index of `i` is reported to the user as row `i + 2`.
const HEADER_ROW_OFFSET: usize = 2;

/// Diagnostics for one rejected row
#[derive(Debug, Clone, PartialEq)]
pub struct MissingRowReport {
    /// Human-facing spreadsheet row number
    pub row_number: usize,
    /// Missing required fields, in checking order
    pub missing_fields: Vec<&'static str>,
}

/// Result of ingesting one uploaded file
#[derive(Debug, Default)]
pub struct IngestOutcome {
    /// Upload-ready records; empty whenever any row was rejected
    pub ready: Vec<EmployeeRecord>,
    /// Per-row diagnostics for rejected rows
    pub rejected: Vec<MissingRowReport>,
}

/// Validate every parsed row and build records for the valid ones.
///
/// The whole batch is all-or-nothing: if any row is rejected, the ready
/// collection comes back empty no matter how many rows were individually
/// valid. All rows are still validated in one pass so the report covers the
/// entire file.
pub fn process_rows(rows: &[RawRow]) -> Result<IngestOutcome> {
    let mut ready = Vec::new();
    let mut rejected = Vec::new();

    for (index, row) in rows.iter().enumerate() {
        let row_number = index + HEADER_ROW_OFFSET;
        let missing = missing_fields(row);
        if !missing.is_empty() {
            rejected.push(MissingRowReport {
                row_number,
                missing_fields: missing,
            });
            continue;
        }

        let record = build_record(row)
            .with_context(|| format!("row {row_number}: cannot build record"))?;
        ready.push(record);
    }

    // A single invalid row invalidates the whole batch
    if !rejected.is_empty() {
        ready.clear();
    }

    Ok(IngestOutcome { ready, rejected })
}

fn build_record(row: &RawRow) -> Result<EmployeeRecord> {
    Ok(EmployeeRecord {
        title: row.text("Title"),
        first_name: required_text(row, "FirstName")?,
        last_name: required_text(row, "LastName")?,
        work_email: required_text(row, "WorkEmail")?,
        personal_email: required_text(row, "PersonalEmail")?,
        birth_date: normalized_date(row, "BirthDate")?,
        hire_date: normalized_date(row, "HireDate")?,
        work_mode: required_text(row, "WorkMode")?,
        salary: row.number("Salary").context("Salary is not numeric")?,
        is_married: row.text("IsMarried").as_deref() == Some("Yes"),
        social_profile: SocialProfile {
            url: required_text(row, "SocialProfile")?,
        },
        job_title: required_text(row, "JobTitle")?,
        about: required_text(row, "About")?,
    })
}

fn required_text(row: &RawRow, field: &str) -> Result<String> {
    row.text(field)
        .with_context(|| format!("{field} is missing"))
}

fn normalized_date(row: &RawRow, field: &str) -> Result<String> {
    let value = row
        .get(field)
        .with_context(|| format!("{field} is missing"))?;
    date_only_to_utc(value).with_context(|| format!("{field} is not a usable date"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::row::CellValue;

    fn valid_row() -> RawRow {
        let mut row = RawRow::new();
        row.insert("FirstName", CellValue::String("A".into()));
        row.insert("LastName", CellValue::String("B".into()));
        row.insert("WorkEmail", CellValue::String("a@b.com".into()));
        row.insert("PersonalEmail", CellValue::String("a2@b.com".into()));
        row.insert("BirthDate", CellValue::String("2020-01-15".into()));
        row.insert("HireDate", CellValue::String("2021-06-01".into()));
        row.insert("WorkMode", CellValue::String("Remote".into()));
        row.insert("Salary", CellValue::Int(50000));
        row.insert("IsMarried", CellValue::String("Yes".into()));
        row.insert("JobTitle", CellValue::String("Eng".into()));
        row.insert("About", CellValue::String("bio".into()));
        row.insert("SocialProfile", CellValue::String("http://x".into()));
        row
    }

    #[test]
    fn test_valid_row_produces_record() {
        let outcome = process_rows(&[valid_row()]).unwrap();
        assert!(outcome.rejected.is_empty());
        assert_eq!(outcome.ready.len(), 1);

        let record = &outcome.ready[0];
        assert_eq!(record.first_name, "A");
        assert_eq!(record.work_mode, "Remote");
        assert_eq!(record.salary, 50000.0);
        assert!(record.is_married);
        assert_eq!(record.birth_date, "2020-01-15T00:00:00.000Z");
        assert_eq!(record.hire_date, "2021-06-01T00:00:00.000Z");
        assert_eq!(record.social_profile.url, "http://x");
        assert_eq!(record.title, None);
    }

    #[test]
    fn test_is_married_requires_exact_yes() {
        let mut row = valid_row();
        row.insert("IsMarried", CellValue::String("yes".into()));
        let outcome = process_rows(&[row]).unwrap();
        assert!(!outcome.ready[0].is_married);
    }

    #[test]
    fn test_rejected_row_numbers_and_fields() {
        let mut incomplete = valid_row();
        incomplete.insert("Salary", CellValue::Int(0));
        // About removed entirely
        let mut no_about = RawRow::new();
        for field in [
            "FirstName",
            "LastName",
            "WorkEmail",
            "PersonalEmail",
            "BirthDate",
            "HireDate",
            "WorkMode",
            "IsMarried",
            "JobTitle",
            "SocialProfile",
        ] {
            no_about.insert(field, CellValue::String("x".into()));
        }

        let rows = vec![valid_row(), valid_row(), valid_row(), incomplete, no_about];
        let outcome = process_rows(&rows).unwrap();

        assert_eq!(outcome.rejected.len(), 2);
        assert_eq!(outcome.rejected[0].row_number, 5);
        assert_eq!(outcome.rejected[0].missing_fields, vec!["Salary"]);
        assert_eq!(outcome.rejected[1].row_number, 6);
        assert_eq!(outcome.rejected[1].missing_fields, vec!["Salary", "About"]);
    }

    #[test]
    fn test_single_invalid_row_empties_the_batch() {
        let mut rows: Vec<RawRow> = (0..10).map(|_| valid_row()).collect();
        rows.push(RawRow::new());

        let outcome = process_rows(&rows).unwrap();
        assert_eq!(outcome.rejected.len(), 1);
        assert_eq!(outcome.rejected[0].row_number, 12);
        assert!(outcome.ready.is_empty());
    }

    #[test]
    fn test_unparseable_present_date_aborts_ingestion() {
        let mut row = valid_row();
        row.insert("HireDate", CellValue::String("next spring".into()));
        assert!(process_rows(&[row]).is_err());
    }

    #[test]
    fn test_title_passes_through_when_present() {
        let mut row = valid_row();
        row.insert("Title", CellValue::String("Ms".into()));
        let outcome = process_rows(&[row]).unwrap();
        assert_eq!(outcome.ready[0].title.as_deref(), Some("Ms"));
    }
}
