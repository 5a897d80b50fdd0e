use serde::{Deserialize, Serialize};

pub const UPDATE_SETTING_ENDPOINT: &str = "/api/settings/update";

/// Body of `POST /api/settings/update`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateSettingRequest {
    pub key: String,
    pub value: String,
}

impl UpdateSettingRequest {
    /// The server rejects blank keys and values, so the page checks first.
    pub fn is_complete(&self) -> bool {
        !self.key.trim().is_empty() && !self.value.trim().is_empty()
    }
}
