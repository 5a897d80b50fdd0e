use serde::{Deserialize, Serialize};

/// Id of an in-app notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(pub u64);

impl NotificationId {
    pub fn mark_read_endpoint(&self) -> String {
        format!("/api/notifications/mark-read/{}", self.0)
    }

    /// Id of the list item rendering this notification.
    pub fn element_id(&self) -> String {
        format!("notification-{}", self.0)
    }
}
