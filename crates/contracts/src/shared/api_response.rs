use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fallback used when a failed response carries no readable message.
pub const GENERIC_FAILURE: &str = "Request failed";

/// `{ success, message?, error? }` returned by the loan API mutations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiStatusResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiStatusResponse {
    /// Reads the status fields out of an untyped body; unknown shapes count as not successful.
    pub fn from_value(body: &Value) -> Self {
        serde_json::from_value(body.clone()).unwrap_or_default()
    }
}

/// Message carried by a failed response: `message` first, then `error`.
pub fn failure_message(body: &Value) -> String {
    ["message", "error"]
        .iter()
        .filter_map(|key| body.get(key).and_then(Value::as_str))
        .find(|s| !s.is_empty())
        .unwrap_or(GENERIC_FAILURE)
        .to_string()
}
