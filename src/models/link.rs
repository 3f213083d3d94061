use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A link as returned by the server. Identifiers may be numbers or strings
/// depending on the instance, so they stay loosely typed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub author: Value,
    #[serde(default)]
    pub creation_date: Option<String>,
    #[serde(default)]
    pub modified_date: Option<String>,
    #[serde(default)]
    pub visits: Option<u64>,
    #[serde(default)]
    pub account: Value,
}

#[derive(Debug, Serialize)]
pub struct CreateLinkRequest<'a> {
    pub secret: &'a str,
    pub url: &'a str,
}

#[derive(Debug, Serialize)]
pub struct UpdateLinkRequest<'a> {
    pub id: &'a str,
    pub slug: &'a str,
    pub destination: &'a str,
    pub author: &'a str,
}

#[derive(Debug, Serialize)]
pub struct DeleteLinksRequest<'a> {
    pub ids: &'a [String],
    pub author: &'a str,
}
