//! List command: show the records already in the store

use anyhow::Result;
use colored::Colorize;
use log::error;

use super::ListArgs;
use crate::api::{ListItem, SharePointClient};
use crate::config::Config;

pub async fn handle_list(
    args: ListArgs,
    config: &Config,
    client: &SharePointClient,
) -> Result<()> {
    let list_title = args.list.as_deref().unwrap_or(&config.list_name);

    // A failed read renders the empty state, never stale data
    let items = match client.fetch_all_items(list_title).await {
        Ok(items) => items,
        Err(err) => {
            error!("failed to fetch items from '{list_title}': {err:#}");
            Vec::new()
        }
    };

    let visible: Vec<&ListItem> = match args.search.as_deref() {
        Some(term) => filter_items(&items, term),
        None => items.iter().collect(),
    };

    if visible.is_empty() {
        println!("No items to show for '{list_title}'.");
        return Ok(());
    }

    let header = format!(
        "{:>6}  {:<24} {:<30} {}",
        "ID", "Name", "Work Email", "Job Title"
    );
    println!("{}", header.bold());
    for item in &visible {
        println!(
            "{:>6}  {:<24} {:<30} {}",
            item.id,
            item.full_name(),
            item.work_email.as_deref().unwrap_or("-"),
            item.job_title.as_deref().unwrap_or("-"),
        );
    }
    println!("{} item(s).", visible.len());

    Ok(())
}

/// Case-insensitive match on full name, work email, or personal email
fn filter_items<'a>(items: &'a [ListItem], term: &str) -> Vec<&'a ListItem> {
    let term = term.to_lowercase();
    items
        .iter()
        .filter(|item| {
            item.full_name().to_lowercase().contains(&term)
                || matches_email(item.work_email.as_deref(), &term)
                || matches_email(item.personal_email.as_deref(), &term)
        })
        .collect()
}

fn matches_email(email: Option<&str>, term: &str) -> bool {
    email.is_some_and(|e| e.to_lowercase().contains(term))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, first: &str, last: &str, work: &str, personal: &str) -> ListItem {
        serde_json::from_value(serde_json::json!({
            "Id": id,
            "FirstName": first,
            "LastName": last,
            "WorkEmail": work,
            "PersonalEmail": personal,
        }))
        .unwrap()
    }

    #[test]
    fn test_filter_matches_name_and_emails() {
        let items = vec![
            item(1, "Ada", "Lovelace", "ada@work.example", "ada@home.example"),
            item(2, "Grace", "Hopper", "grace@work.example", "ghopper@home.example"),
        ];

        let by_name = filter_items(&items, "lovelace");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, 1);

        let by_personal = filter_items(&items, "GHOPPER");
        assert_eq!(by_personal.len(), 1);
        assert_eq!(by_personal[0].id, 2);

        assert_eq!(filter_items(&items, "work.example").len(), 2);
        assert!(filter_items(&items, "nobody").is_empty());
    }
}
