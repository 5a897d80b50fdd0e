use crate::shared::api_utils::ApiClient;
use crate::shared::notices::{handle_error, show_success, ERROR_ELEMENT_ID, SUCCESS_ELEMENT_ID};
use crate::shared::platform::{Document, HttpTransport, Scheduler};
use contracts::domain::a003_setting::{UpdateSettingRequest, UPDATE_SETTING_ENDPOINT};
use contracts::shared::api_response::ApiStatusResponse;

pub const SETTING_UPDATED: &str = "Setting updated";
pub const SETTING_INCOMPLETE: &str = "Key and value are required";

/// Saves one admin setting and reports through the page banners.
pub async fn update_setting<T, D, S>(
    client: &ApiClient<T>,
    document: &D,
    scheduler: &S,
    request: UpdateSettingRequest,
    success_hide_ms: u32,
) -> bool
where
    T: HttpTransport,
    D: Document,
    S: Scheduler,
{
    if !request.is_complete() {
        handle_error(document, SETTING_INCOMPLETE, ERROR_ELEMENT_ID);
        return false;
    }

    match client.post_json(UPDATE_SETTING_ENDPOINT, &request).await {
        Ok(body) if ApiStatusResponse::from_value(&body).success => {
            show_success(
                document,
                scheduler,
                SETTING_UPDATED,
                SUCCESS_ELEMENT_ID,
                success_hide_ms,
            );
            true
        }
        Ok(body) => {
            let status = ApiStatusResponse::from_value(&body);
            let message = status.message.or(status.error).unwrap_or_default();
            handle_error(document, &message, ERROR_ELEMENT_ID);
            false
        }
        Err(e) => {
            handle_error(document, &e.to_string(), ERROR_ELEMENT_ID);
            false
        }
    }
}
