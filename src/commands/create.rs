use anyhow::Result;
use tracing::debug;

use crate::api::client::ShortlinkClient;
use crate::commands::CommandError;
use crate::config::Config;

pub async fn run(config: &Config, destination: &str) -> Result<()> {
    let destination = destination.trim();
    if destination.is_empty() {
        return Err(CommandError::EmptyDestination.into());
    }

    let client = ShortlinkClient::new(config)?;
    let body = client.create_link(destination).await?;
    debug!(%body, "link created");

    println!("{}", render(destination));
    Ok(())
}

fn render(destination: &str) -> String {
    format!("Successfully Created link to {}", destination)
}
