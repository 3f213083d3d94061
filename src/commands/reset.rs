use anyhow::Result;
use tracing::info;

use crate::config::{Config, ConfigStore};

pub fn run(store: &ConfigStore) -> Result<()> {
    store.save(&Config::default())?;
    info!(path = %store.path().display(), "configuration cleared");
    println!("Configuration reset.");
    Ok(())
}
