use anyhow::Result;

use crate::api::client::ShortlinkClient;
use crate::config::Config;
use crate::models::about::InstanceInfo;
use crate::models::display_text;

pub async fn run(config: &Config) -> Result<()> {
    let client = ShortlinkClient::new(config)?;
    let info = client.about().await?;
    println!("{}", render(&info));
    Ok(())
}

fn render(info: &InstanceInfo) -> String {
    let mut out = format!(
        "Domain: {}\nDemo: {}\nVersion: {}\nAccounts: {}",
        info.domain, info.demo, info.version, info.accounts
    );

    if let Some(umami) = &info.umami {
        out.push_str(&format!(
            "\nUmami:\n  Site: {}\n  URL: {}",
            display_text(&umami.site),
            display_text(&umami.url)
        ));
    }

    out
}
