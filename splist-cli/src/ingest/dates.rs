//! Calendar-date normalization for store writes
//!
//! The store only needs calendar dates, so every date-like input collapses to
//! UTC midnight of its calendar date. Time-of-day and offset information in
//! the source value is discarded.

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeZone, Utc};

use super::row::CellValue;

/// Convert a date-like cell into an ISO-8601 string at UTC midnight of the
/// value's calendar date, e.g. `2020-01-15T00:00:00.000Z`.
///
/// Accepts native datetimes, date text (`YYYY-MM-DD`, RFC 3339,
/// `MM/DD/YYYY`), and numeric Excel day serials. Offset-carrying text keeps
/// the calendar date of its own offset. Applying the conversion to its own
/// output yields the same instant.
pub fn date_only_to_utc(value: &CellValue) -> Result<String> {
    let date = calendar_date(value)?;
    let midnight = Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN));
    Ok(midnight.to_rfc3339_opts(SecondsFormat::Millis, true))
}

fn calendar_date(value: &CellValue) -> Result<NaiveDate> {
    match value {
        CellValue::DateTime(dt) => Ok(dt.date()),
        CellValue::String(s) => parse_date_text(s.trim()),
        CellValue::Int(i) => from_excel_serial(*i as f64),
        CellValue::Float(f) => from_excel_serial(*f),
        CellValue::Bool(_) => bail!("boolean cell is not a date"),
    }
}

fn parse_date_text(s: &str) -> Result<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt.date());
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%m/%d/%Y") {
        return Ok(date);
    }
    bail!("unrecognized date text: '{s}'")
}

/// Interpret a number as an Excel day serial (serial 0 = 1899-12-30)
fn from_excel_serial(serial: f64) -> Result<NaiveDate> {
    if !serial.is_finite() || serial < 0.0 {
        bail!("numeric value {serial} is not a valid day serial");
    }
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30).unwrap();
    epoch
        .checked_add_signed(Duration::days(serial.floor() as i64))
        .with_context(|| format!("day serial {serial} is out of range"))
}
