use crate::shared::api_utils::ApiClient;
use crate::shared::platform::{Document, Element, HttpMethod, HttpTransport, WindowHost};
use contracts::domain::a002_notification::NotificationId;
use contracts::shared::api_response::ApiStatusResponse;

pub const UNREAD_CLASS: &str = "unread";

/// Marks a notification read on the server and drops its unread styling.
/// Returns whether the server confirmed.
pub async fn mark_notification_read<T, D, W>(
    client: &ApiClient<T>,
    document: &D,
    window: &W,
    id: NotificationId,
) -> bool
where
    T: HttpTransport,
    D: Document,
    W: WindowHost,
{
    match client
        .request(&id.mark_read_endpoint(), HttpMethod::Post, None)
        .await
    {
        Ok(body) if ApiStatusResponse::from_value(&body).success => {
            if let Some(item) = document.element_by_id(&id.element_id()) {
                item.remove_class(UNREAD_CLASS);
            }
            true
        }
        Ok(_) => false,
        Err(e) => {
            window.alert(&format!("Error updating notification: {}", e));
            false
        }
    }
}
