use anyhow::Result;
use reqwest::Method;

use crate::api::client::ShortlinkClient;
use crate::api::outcome::Endpoint;
use crate::models::about::InstanceInfo;

impl ShortlinkClient {
    /// Fetch public metadata about the instance.
    pub async fn about(&self) -> Result<InstanceInfo> {
        let req = self.request(Method::GET, "/about");
        self.execute_result(Endpoint::About, req).await
    }
}
