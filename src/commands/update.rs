use anyhow::Result;

use crate::api::client::ShortlinkClient;
use crate::commands::require;
use crate::config::Config;
use crate::models::{display_text, display_value};
use crate::models::link::{Link, UpdateLinkRequest};

pub async fn run(
    config: &Config,
    id: &str,
    slug: &str,
    destination: &str,
    author: &str,
) -> Result<()> {
    require(id, "id")?;
    require(slug, "slug")?;
    require(destination, "destination")?;
    require(author, "author")?;

    let client = ShortlinkClient::new(config)?;
    let link = client
        .update_link(&UpdateLinkRequest {
            id,
            slug,
            destination,
            author,
        })
        .await?;

    println!("{}", render(&link));
    Ok(())
}

fn render(link: &Link) -> String {
    format!(
        "Successfully Updated link\nID: {}\nSlug: {}\nDestination: {}\nAuthor: {}\nCreated: {}\nModified: {}\nVisits: {}\nAccount: {}",
        display_value(&link.id),
        display_text(&link.slug),
        display_text(&link.destination),
        display_value(&link.author),
        display_text(&link.creation_date),
        display_text(&link.modified_date),
        link.visits.map_or_else(|| "-".to_string(), |v| v.to_string()),
        display_value(&link.account),
    )
}
