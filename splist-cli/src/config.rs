//! Session configuration
//!
//! Settings come from an optional toml file under the user's config
//! directory, overlaid by environment variables. The access token is the
//! delegated session credential; establishing it belongs to the hosting
//! environment, not this tool.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

pub const DEFAULT_LIST_NAME: &str = "Employee Database";

const SITE_URL_VAR: &str = "SPLIST_SITE_URL";
const ACCESS_TOKEN_VAR: &str = "SPLIST_ACCESS_TOKEN";
const LIST_NAME_VAR: &str = "SPLIST_LIST_NAME";

/// Resolved settings for one session
#[derive(Debug, Clone)]
pub struct Config {
    /// Site base URL, e.g. `https://tenant.sharepoint.com/sites/hr`
    pub site_url: String,
    /// Bearer token for the site's REST API
    pub access_token: String,
    /// Default target list title
    pub list_name: String,
}

/// On-disk shape; every key is optional so the file can hold just the
/// non-secret parts
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    site_url: Option<String>,
    access_token: Option<String>,
    list_name: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let file = read_config_file()?;
        resolve(
            file,
            env_value(SITE_URL_VAR),
            env_value(ACCESS_TOKEN_VAR),
            env_value(LIST_NAME_VAR),
        )
    }
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("splist").join("config.toml"))
}

fn read_config_file() -> Result<ConfigFile> {
    let Some(path) = config_file_path() else {
        return Ok(ConfigFile::default());
    };
    if !path.exists() {
        return Ok(ConfigFile::default());
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("invalid config file: {}", path.display()))
}

/// Environment values win over the file; the list name falls back to the
/// default when neither source sets it
fn resolve(
    file: ConfigFile,
    site_url: Option<String>,
    access_token: Option<String>,
    list_name: Option<String>,
) -> Result<Config> {
    let site_url = site_url.or(file.site_url).with_context(|| {
        format!("no site URL configured; set {SITE_URL_VAR} or add site_url to the config file")
    })?;
    let access_token = access_token.or(file.access_token).with_context(|| {
        format!(
            "no access token configured; set {ACCESS_TOKEN_VAR} or add access_token to the config file"
        )
    })?;
    let list_name = list_name
        .or(file.list_name)
        .unwrap_or_else(|| DEFAULT_LIST_NAME.to_string());

    Ok(Config {
        site_url,
        access_token,
        list_name,
    })
}
