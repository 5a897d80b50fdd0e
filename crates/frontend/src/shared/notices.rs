//! Spinner, error and success banners rendered into server-provided placeholders.

use super::platform::{Document, Element, Scheduler};

pub const ERROR_ELEMENT_ID: &str = "error-message";
pub const SUCCESS_ELEMENT_ID: &str = "success-message";
pub const FALLBACK_ERROR: &str = "An error occurred";

pub const SPINNER_HTML: &str = r#"<div class="spinner-border spinner-border-sm" role="status"><span class="visually-hidden">Loading...</span></div>"#;

pub fn show_loading<D: Document>(document: &D, element_id: &str) {
    if let Some(element) = document.element_by_id(element_id) {
        element.set_inner_html(SPINNER_HTML);
    }
}

/// Puts `content` back where the spinner was.
pub fn hide_loading<D: Document>(document: &D, element_id: &str, content: &str) {
    if let Some(element) = document.element_by_id(element_id) {
        element.set_inner_html(content);
    }
}

pub fn handle_error<D: Document>(document: &D, message: &str, element_id: &str) {
    let Some(element) = document.element_by_id(element_id) else {
        return;
    };
    let text = if message.is_empty() {
        FALLBACK_ERROR
    } else {
        message
    };
    element.set_text_content(text);
    element.set_display("block");
}

/// Shows the banner and hides it again after `hide_after_ms`.
pub fn show_success<D: Document, S: Scheduler>(
    document: &D,
    scheduler: &S,
    message: &str,
    element_id: &str,
    hide_after_ms: u32,
) {
    let Some(element) = document.element_by_id(element_id) else {
        return;
    };
    element.set_text_content(message);
    element.set_display("block");
    scheduler.schedule(
        hide_after_ms,
        Box::new(move || element.set_display("none")),
    );
}
