use anyhow::Result;
use reqwest::Method;
use serde_json::Value;

use crate::api::client::ShortlinkClient;
use crate::api::outcome::Endpoint;
use crate::models::link::{CreateLinkRequest, DeleteLinksRequest, Link, UpdateLinkRequest};

impl ShortlinkClient {
    /// Create a link through the ShareX-compatible endpoint. The key travels
    /// in the body as well as the headers.
    pub async fn create_link(&self, destination: &str) -> Result<Value> {
        let body = CreateLinkRequest {
            secret: self.api_key(),
            url: destination,
        };
        let req = self.request(Method::POST, "/sharex").json(&body);
        self.execute(Endpoint::CreateLink, req).await
    }

    pub async fn update_link(&self, update: &UpdateLinkRequest<'_>) -> Result<Link> {
        let req = self.request(Method::PATCH, "/link").json(update);
        self.execute_result(Endpoint::UpdateLink, req).await
    }

    /// Delete every link in `ids`. The instance applies this all-or-nothing.
    pub async fn delete_links(&self, ids: &[String], author: &str) -> Result<Value> {
        let body = DeleteLinksRequest { ids, author };
        let req = self.request(Method::DELETE, "/link").json(&body);
        self.execute(Endpoint::DeleteLinks, req).await
    }
}
