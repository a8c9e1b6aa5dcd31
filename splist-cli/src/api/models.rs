//! Read models for items fetched from the list

use serde::Deserialize;

use crate::ingest::SocialProfile;

/// One record read back from the list. Every field except the identifier is
/// optional on read: the store does not guarantee older items were created
/// through this tool.
#[derive(Debug, Clone, Deserialize)]
pub struct ListItem {
    #[serde(rename = "Id", alias = "ID")]
    pub id: i64,
    #[serde(rename = "Title", default)]
    pub title: Option<String>,
    #[serde(rename = "FirstName", default)]
    pub first_name: Option<String>,
    #[serde(rename = "LastName", default)]
    pub last_name: Option<String>,
    #[serde(rename = "WorkEmail", default)]
    pub work_email: Option<String>,
    #[serde(rename = "PersonalEmail", default)]
    pub personal_email: Option<String>,
    #[serde(rename = "BirthDate", default)]
    pub birth_date: Option<String>,
    #[serde(rename = "HireDate", default)]
    pub hire_date: Option<String>,
    #[serde(rename = "WorkMode", default)]
    pub work_mode: Option<String>,
    #[serde(rename = "Salary", default)]
    pub salary: Option<f64>,
    #[serde(rename = "IsMarried", default)]
    pub is_married: Option<bool>,
    #[serde(rename = "SocialProfile", default)]
    pub social_profile: Option<SocialProfile>,
    #[serde(rename = "JobTitle", default)]
    pub job_title: Option<String>,
    #[serde(rename = "About", default)]
    pub about: Option<String>,
}

impl ListItem {
    /// First and last name joined for display and search
    pub fn full_name(&self) -> String {
        let first = self.first_name.as_deref().unwrap_or("");
        let last = self.last_name.as_deref().unwrap_or("");
        format!("{first} {last}").trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_store_item() {
        let json = serde_json::json!({
            "Id": 42,
            "Title": "Ms",
            "FirstName": "Ada",
            "LastName": "Lovelace",
            "WorkEmail": "ada@work.example",
            "Salary": 50000,
            "IsMarried": false,
            "SocialProfile": { "Url": "http://x", "Description": "profile" },
            "Attachments": false
        });

        let item: ListItem = serde_json::from_value(json).unwrap();
        assert_eq!(item.id, 42);
        assert_eq!(item.full_name(), "Ada Lovelace");
        assert_eq!(item.salary, Some(50000.0));
        assert_eq!(item.social_profile.unwrap().url, "http://x");
        assert!(item.personal_email.is_none());
    }

    #[test]
    fn test_full_name_with_missing_parts() {
        let item: ListItem = serde_json::from_value(serde_json::json!({ "ID": 1 })).unwrap();
        assert_eq!(item.full_name(), "");
    }
}
