use anyhow::Result;

use crate::api::client::ShortlinkClient;
use crate::cli::AccountAction;
use crate::config::Config;
use crate::models::account::Account;
use crate::models::{display_text, display_value};

pub async fn run(config: &Config, action: AccountAction) -> Result<()> {
    match action {
        AccountAction::Get => {
            let client = ShortlinkClient::new(config)?;
            let account = client.current_account().await?;
            println!("{}", render(&account));
        }
    }
    Ok(())
}

fn render(account: &Account) -> String {
    format!(
        "ID: {}\nUsername: {}\nEmail: {}\nRole: {}\n2FA Enabled: {}",
        display_value(&account.id),
        account.username,
        display_text(&account.email),
        display_text(&account.role),
        account.totp
    )
}
