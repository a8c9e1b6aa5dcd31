//! SharePoint list client built on the REST item endpoints

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use log::debug;
use reqwest::header::ACCEPT;
use serde::Deserialize;

use super::models::ListItem;
use crate::config::Config;
use crate::dispatch::ItemWriter;
use crate::ingest::EmployeeRecord;

/// Largest page the list API serves in one request
pub const MAX_PAGE_SIZE: usize = 999;

const JSON_NOMETADATA: &str = "application/json;odata=nometadata";

/// Client for one SharePoint site, constructed once per session and shared
/// by reference with every component that issues store operations.
pub struct SharePointClient {
    http: reqwest::Client,
    site_url: String,
    access_token: String,
}

/// One page of a list read
#[derive(Debug, Deserialize)]
struct ItemPage {
    #[serde(default)]
    value: Vec<ListItem>,
    #[serde(rename = "odata.nextLink", alias = "@odata.nextLink", default)]
    next_link: Option<String>,
}

impl SharePointClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .context("failed to construct HTTP client")?;

        Ok(Self {
            http,
            site_url: config.site_url.trim_end_matches('/').to_string(),
            access_token: config.access_token.clone(),
        })
    }

    fn items_url(&self, list_title: &str) -> String {
        format!(
            "{}/_api/web/lists/getbytitle('{}')/items",
            self.site_url,
            urlencoding::encode(list_title)
        )
    }

    /// Create one item in the named list
    pub async fn add_item(
        &self,
        list_title: &str,
        record: &EmployeeRecord,
    ) -> Result<serde_json::Value> {
        let url = self.items_url(list_title);
        debug!("POST {url}");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.access_token)
            .header(ACCEPT, JSON_NOMETADATA)
            .json(record)
            .send()
            .await
            .with_context(|| format!("create request to list '{list_title}' failed"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("list '{list_title}' rejected the item: {status}: {body}");
        }

        response
            .json()
            .await
            .context("created-item response is not valid JSON")
    }

    /// Fetch the list's items, newest identifier first, draining every page
    /// the server yields into one ordered collection.
    pub async fn fetch_all_items(&self, list_title: &str) -> Result<Vec<ListItem>> {
        let mut items = Vec::new();
        let mut next_url: Option<String> = None;

        loop {
            let request = match &next_url {
                // Follow-up pages come back as absolute links
                Some(url) => self.http.get(url),
                None => self.http.get(self.items_url(list_title)).query(&[
                    ("$top", MAX_PAGE_SIZE.to_string()),
                    ("$orderby", "ID desc".to_string()),
                ]),
            };

            let response = request
                .bearer_auth(&self.access_token)
                .header(ACCEPT, JSON_NOMETADATA)
                .send()
                .await
                .with_context(|| format!("read request to list '{list_title}' failed"))?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                bail!("failed to read list '{list_title}': {status}: {body}");
            }

            let page: ItemPage = response
                .json()
                .await
                .context("list response is not valid JSON")?;
            debug!(
                "fetched {} item(s) from '{list_title}' (more: {})",
                page.value.len(),
                page.next_link.is_some()
            );
            items.extend(page.value);

            match page.next_link {
                Some(url) => next_url = Some(url),
                None => break,
            }
        }

        Ok(items)
    }
}

/// Binds a client to one list so the dispatcher can write items through it
pub struct ListWriter<'a> {
    client: &'a SharePointClient,
    list_title: &'a str,
}

impl<'a> ListWriter<'a> {
    pub fn new(client: &'a SharePointClient, list_title: &'a str) -> Self {
        Self { client, list_title }
    }
}

#[async_trait]
impl ItemWriter for ListWriter<'_> {
    async fn write_item(&self, record: &EmployeeRecord) -> Result<()> {
        self.client.add_item(self.list_title, record).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> SharePointClient {
        let config = Config {
            site_url: "https://tenant.sharepoint.example/sites/hr/".to_string(),
            access_token: "token".to_string(),
            list_name: "Employee Database".to_string(),
        };
        SharePointClient::new(&config).unwrap()
    }

    #[test]
    fn test_items_url_encodes_list_title() {
        let client = test_client();
        assert_eq!(
            client.items_url("Employee Database"),
            "https://tenant.sharepoint.example/sites/hr/_api/web/lists/getbytitle('Employee%20Database')/items"
        );
    }

    #[test]
    fn test_item_page_next_link_variants() {
        let plain: ItemPage = serde_json::from_str(
            r#"{ "value": [{ "Id": 1 }], "odata.nextLink": "https://x/next" }"#,
        )
        .unwrap();
        assert_eq!(plain.value.len(), 1);
        assert_eq!(plain.next_link.as_deref(), Some("https://x/next"));

        let prefixed: ItemPage =
            serde_json::from_str(r#"{ "value": [], "@odata.nextLink": "https://x/next2" }"#)
                .unwrap();
        assert_eq!(prefixed.next_link.as_deref(), Some("https://x/next2"));

        let last: ItemPage = serde_json::from_str(r#"{ "value": [] }"#).unwrap();
        assert!(last.next_link.is_none());
    }
}
