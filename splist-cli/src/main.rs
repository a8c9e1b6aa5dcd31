//! splist-cli: bulk-load Excel rosters into SharePoint lists

mod api;
mod cli;
mod config;
mod dispatch;
mod ingest;

use anyhow::Result;
use clap::Parser;

use api::SharePointClient;
use cli::{Cli, Commands};
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();

    // One client per session, handed by reference to every command
    let config = Config::load()?;
    let client = SharePointClient::new(&config)?;

    match cli.command {
        Commands::Upload(args) => cli::upload::handle_upload(args, &config, &client).await,
        Commands::List(args) => cli::list::handle_list(args, &config, &client).await,
    }
}
