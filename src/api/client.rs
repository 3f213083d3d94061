use anyhow::{Context, Result};
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::api::ApiError;
use crate::api::outcome::{Endpoint, Outcome, map_status};
use crate::config::Config;
use crate::models::Envelope;

pub struct ShortlinkClient {
    pub base_url: String,
    api_key: String,
    pub http: Client,
}

impl ShortlinkClient {
    pub fn new(config: &Config) -> Result<Self> {
        if config.api_url.is_empty() {
            return Err(ApiError::NotConfigured.into());
        }

        let http = Client::builder()
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            base_url: config.api_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            http,
        })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Start a request to `{base_url}{path}`. The instance expects the key in
    /// both the `secret` and `Authorization` headers.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, "building request");

        self.http
            .request(method, url)
            .header("secret", &self.api_key)
            .header(AUTHORIZATION, &self.api_key)
            .header("Accept", "application/json")
    }

    /// Send the request and map the status. Any non-success status becomes
    /// an [`ApiError::Rejected`]; on success the JSON body is returned.
    pub async fn execute(&self, endpoint: Endpoint, req: RequestBuilder) -> Result<Value> {
        debug!(%endpoint, "sending request");

        let resp = req
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", self.base_url))?;

        let status = resp.status().as_u16();
        debug!(%endpoint, status, "received response");

        match map_status(endpoint, status) {
            Outcome::Success => resp
                .json()
                .await
                .with_context(|| format!("Failed to parse response from {}", endpoint)),
            Outcome::Failure(message) => Err(ApiError::Rejected { message }.into()),
        }
    }

    /// Like [`execute`](Self::execute), decoding `body.result` into `T`.
    pub async fn execute_result<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        req: RequestBuilder,
    ) -> Result<T> {
        let body = self.execute(endpoint, req).await?;
        let envelope: Envelope<T> = serde_json::from_value(body)
            .with_context(|| format!("Failed to parse result from {}", endpoint))?;
        Ok(envelope.result)
    }
}
