//! Required-field validation for parsed rows

use super::row::RawRow;

/// Columns a row must populate before it can be uploaded, in the order they
/// are checked and reported. `Title` is intentionally not part of this set.
pub const REQUIRED_FIELDS: [&str; 12] = [
    "FirstName",
    "LastName",
    "WorkEmail",
    "PersonalEmail",
    "BirthDate",
    "HireDate",
    "WorkMode",
    "Salary",
    "IsMarried",
    "JobTitle",
    "About",
    "SocialProfile",
];

/// Return the names of required fields the row fails the presence test for,
/// in checking order. An empty result means the row is valid.
pub fn missing_fields(row: &RawRow) -> Vec<&'static str> {
    REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|field| !row.has_value(field))
        .collect()
}
