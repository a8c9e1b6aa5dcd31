//! Upload command: parse, validate, dispatch

use std::io::Write;

use anyhow::{Context, Result, bail};
use colored::Colorize;
use log::{error, info, warn};

use super::UploadArgs;
use crate::api::{ListWriter, SharePointClient};
use crate::config::Config;
use crate::dispatch;
use crate::ingest::{self, MissingRowReport};

pub async fn handle_upload(
    args: UploadArgs,
    config: &Config,
    client: &SharePointClient,
) -> Result<()> {
    let extension = args
        .file
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    if !matches!(extension.as_deref(), Some("xlsx") | Some("xls")) {
        bail!("'{}' is not an .xlsx or .xls file", args.file.display());
    }

    let bytes = std::fs::read(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let rows = ingest::read_rows(&bytes)?;
    if rows.is_empty() {
        bail!("'{}' contains no data rows", args.file.display());
    }

    let outcome = ingest::process_rows(&rows)?;
    if !outcome.rejected.is_empty() {
        print_rejection_report(&outcome.rejected);
        bail!(
            "{} row(s) are missing required fields; nothing was uploaded",
            outcome.rejected.len()
        );
    }

    let list_title = args.list.as_deref().unwrap_or(&config.list_name);
    info!(
        "uploading {} record(s) to '{list_title}' with the {} strategy",
        outcome.ready.len(),
        args.strategy
    );

    let writer = ListWriter::new(client, list_title);
    let report = dispatch::dispatch(&writer, &outcome.ready, args.strategy, &render_progress).await;

    println!();
    println!("{}", "Done.".green().bold());
    if report.failed() > 0 {
        warn!(
            "{} of {} record(s) failed to upload",
            report.failed(),
            report.total()
        );
    }

    refresh_list(client, list_title).await;
    Ok(())
}

fn render_progress(fraction: f64) {
    print!("\rUploading... {:>3}%", (fraction * 100.0).round() as u32);
    let _ = std::io::stdout().flush();
}

fn print_rejection_report(rejected: &[MissingRowReport]) {
    println!(
        "{}",
        "The following rows have missing required fields. Please check your Excel file and upload again."
            .yellow()
    );
    for report in rejected {
        println!(
            "  - Row {}: {}",
            report.row_number,
            report.missing_fields.join(", ")
        );
    }
}

/// Re-read the list after a dispatch; a failed read degrades to "no data"
async fn refresh_list(client: &SharePointClient, list_title: &str) {
    match client.fetch_all_items(list_title).await {
        Ok(items) => println!("'{list_title}' now holds {} item(s).", items.len()),
        Err(err) => {
            error!("failed to refresh '{list_title}': {err:#}");
            println!("'{list_title}' could not be refreshed; no data available.");
        }
    }
}
