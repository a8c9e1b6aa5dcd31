//! Spreadsheet ingestion: decode, validate, and normalize uploaded rosters

pub mod dates;
pub mod pipeline;
pub mod reader;
pub mod record;
pub mod row;
pub mod validate;

pub use pipeline::{IngestOutcome, MissingRowReport, process_rows};
pub use reader::read_rows;
pub use record::{EmployeeRecord, SocialProfile};
pub use row::{CellValue, RawRow};
pub use validate::{REQUIRED_FIELDS, missing_fields};
