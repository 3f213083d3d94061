use anyhow::Result;
use reqwest::Method;

use crate::api::client::ShortlinkClient;
use crate::api::outcome::Endpoint;
use crate::models::account::Account;

impl ShortlinkClient {
    /// Fetch the account the configured key belongs to.
    pub async fn current_account(&self) -> Result<Account> {
        let req = self.request(Method::GET, "/auth/me");
        self.execute_result(Endpoint::AccountMe, req).await
    }
}
