mod api;
mod cli;
mod commands;
mod config;
mod logging;
mod models;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use config::ConfigStore;
use tracing::debug;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let store = ConfigStore::new(&cli.config);
    store
        .ensure_exists()
        .context("Failed to initialise configuration")?;
    let config = store.load().context("Failed to load configuration")?;
    debug!(path = %store.path().display(), "configuration loaded");

    match &cli.command {
        Commands::Config { url, key } => {
            commands::config::run(&store, &config, url.as_deref(), key.as_deref())
        }
        Commands::Reset => commands::reset::run(&store),
        Commands::About => commands::about::run(&config).await,
        Commands::Account { action } => commands::account::run(&config, *action).await,
        Commands::Link { action } => commands::link::run(*action),
        Commands::Create { url } => commands::create::run(&config, url).await,
        Commands::Update {
            id,
            slug,
            destination,
            author,
        } => commands::update::run(&config, id, slug, destination, author).await,
        Commands::Delete { ids, author } => commands::delete::run(&config, ids, author).await,
    }
}
