use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct InstanceInfo {
    pub domain: String,
    pub demo: bool,
    pub version: String,
    pub accounts: u64,
    pub umami: Option<UmamiConfig>,
}

/// Analytics settings, only present when the instance has Umami enabled.
#[derive(Debug, Clone, Deserialize)]
pub struct UmamiConfig {
    #[serde(default)]
    pub site: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}
