use anyhow::Result;
use tracing::info;

use crate::config::{Config, ConfigStore};

pub fn run(
    store: &ConfigStore,
    current: &Config,
    url: Option<&str>,
    key: Option<&str>,
) -> Result<()> {
    let updated = current.merged(url, key);

    if &updated == current {
        println!("{}", render_unchanged(current));
        return Ok(());
    }

    store.save(&updated)?;
    info!(path = %store.path().display(), "configuration saved");
    println!("Configuration updated successfully.");
    Ok(())
}

fn render_unchanged(config: &Config) -> String {
    format!(
        "Configuration is already up to date:\nAPI URL: {}\nAPI Key: {}",
        config.api_url, config.api_key
    )
}
