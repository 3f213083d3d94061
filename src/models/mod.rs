pub mod about;
pub mod account;
pub mod link;

use serde::Deserialize;
use serde_json::Value;

/// Successful responses wrap their payload in `{ "result": ... }`.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub result: T,
}

/// Render a loosely typed JSON field for display.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn display_text(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}
