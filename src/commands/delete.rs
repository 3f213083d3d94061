use anyhow::{Context, Result};
use serde_json::Value;

use crate::api::client::ShortlinkClient;
use crate::commands::{CommandError, require};
use crate::config::Config;

pub async fn run(config: &Config, ids: &[String], author: &str) -> Result<()> {
    if ids.is_empty() {
        return Err(CommandError::NoIds.into());
    }
    for id in ids {
        require(id, "id")?;
    }
    require(author, "author")?;

    let client = ShortlinkClient::new(config)?;
    let body = client.delete_links(ids, author).await?;

    println!("{}", render(&body)?);
    Ok(())
}

fn render(body: &Value) -> Result<String> {
    let pretty = serde_json::to_string_pretty(body).context("Failed to format response")?;
    Ok(format!("Successfully Deleted\n{}", pretty))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{render, run};
    use crate::api::test_server::{CannedResponse, serve_once};
    use crate::commands::CommandError;
    use crate::config::Config;

    fn config(url: &str) -> Config {
        Config {
            api_url: url.to_string(),
            api_key: "ABC".to_string(),
        }
    }

    #[tokio::test]
    async fn zero_ids_fails_before_any_request() {
        let err = run(&config("http://127.0.0.1:9"), &[], "me")
            .await
            .unwrap_err();
        assert_eq!(err.downcast_ref::<CommandError>(), Some(&CommandError::NoIds));
    }

    #[tokio::test]
    async fn forbidden_reports_nothing_deleted() {
        let server = serve_once(CannedResponse::json(403, json!({}))).await;

        let ids = vec!["1".to_string(), "2".to_string()];
        let err = run(&config(&server.base_url), &ids, "me")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("No links were deleted"));
    }

    #[test]
    fn renders_server_body() {
        let text = render(&json!({ "result": "ok" })).unwrap();
        assert!(text.starts_with("Successfully Deleted\n"));
        assert!(text.contains("\"result\": \"ok\""));
    }
}
