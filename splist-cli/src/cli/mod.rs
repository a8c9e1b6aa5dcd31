//! Command-line interface definitions and handlers

pub mod list;
pub mod upload;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::dispatch::UploadStrategy;

#[derive(Debug, Parser)]
#[command(
    name = "splist-cli",
    about = "Bulk-load Excel rosters into SharePoint lists",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate a spreadsheet and upload its rows to the list
    Upload(UploadArgs),
    /// Show the records already in the list
    List(ListArgs),
}

#[derive(Debug, Args)]
pub struct UploadArgs {
    /// Path to the .xlsx or .xls file to upload
    pub file: PathBuf,

    /// Dispatch strategy for the store writes
    #[arg(long, value_enum, default_value_t = UploadStrategy::Sequential)]
    pub strategy: UploadStrategy,

    /// Target list title (defaults to the configured list)
    #[arg(long)]
    pub list: Option<String>,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Case-insensitive filter on names and email addresses
    #[arg(long)]
    pub search: Option<String>,

    /// Target list title (defaults to the configured list)
    #[arg(long)]
    pub list: Option<String>,
}
