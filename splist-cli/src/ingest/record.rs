//! The validated, upload-ready employee record

use serde::{Deserialize, Serialize};

/// Hyperlink field value, written to the store as a structured object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialProfile {
    #[serde(rename = "Url")]
    pub url: String,
}

/// One upload-ready record. Exists only for rows where every required field
/// passed the presence test; serializes to the list's internal field names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeRecord {
    #[serde(rename = "Title", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "FirstName")]
    pub first_name: String,
    #[serde(rename = "LastName")]
    pub last_name: String,
    #[serde(rename = "WorkEmail")]
    pub work_email: String,
    #[serde(rename = "PersonalEmail")]
    pub personal_email: String,
    /// UTC-midnight ISO string produced by the date normalizer
    #[serde(rename = "BirthDate")]
    pub birth_date: String,
    /// UTC-midnight ISO string produced by the date normalizer
    #[serde(rename = "HireDate")]
    pub hire_date: String,
    #[serde(rename = "WorkMode")]
    pub work_mode: String,
    #[serde(rename = "Salary")]
    pub salary: f64,
    /// Derived from a strict `"Yes"` match on the source cell
    #[serde(rename = "IsMarried")]
    pub is_married: bool,
    #[serde(rename = "SocialProfile")]
    pub social_profile: SocialProfile,
    #[serde(rename = "JobTitle")]
    pub job_title: String,
    #[serde(rename = "About")]
    pub about: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_to_store_field_names() {
        let record = EmployeeRecord {
            title: None,
            first_name: "A".into(),
            last_name: "B".into(),
            work_email: "a@b.com".into(),
            personal_email: "a2@b.com".into(),
            birth_date: "2020-01-15T00:00:00.000Z".into(),
            hire_date: "2021-06-01T00:00:00.000Z".into(),
            work_mode: "Remote".into(),
            salary: 50000.0,
            is_married: true,
            social_profile: SocialProfile { url: "http://x".into() },
            job_title: "Eng".into(),
            about: "bio".into(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["FirstName"], "A");
        assert_eq!(json["IsMarried"], true);
        assert_eq!(json["SocialProfile"]["Url"], "http://x");
        // Title was absent in the source row and stays absent on the wire
        assert!(json.get("Title").is_none());
    }
}
