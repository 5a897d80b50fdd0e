//! Functions exported to the page scripts under their camelCase names.
//!
//! Each export resolves the live browser objects, then delegates to the
//! generic implementation. None of them throw except `makeAjaxRequest`,
//! whose promise rejects with the failure message.

use crate::config;
use crate::domain::a001_loan::run_loan_action;
use crate::domain::a002_notification::actions::mark_notification_read;
use crate::domain::a003_setting::actions::update_setting;
use crate::shared::api_utils::ApiClient;
use crate::shared::date_utils::format_long_date;
use crate::shared::debounce::Debouncer;
use crate::shared::export::export_table_csv;
use crate::shared::form_validator::validate_form;
use crate::shared::notices::{self, ERROR_ELEMENT_ID, SUCCESS_ELEMENT_ID};
use crate::shared::number_format::format_currency;
use crate::shared::platform::{GlooScheduler, GlooTransport, HttpMethod, WebDocument, WebWindow};
use crate::shared::print::print_table;
use crate::shared::table_utils::{search_rows, LOANS_TABLE_ID};
use crate::shared::theme::toggle_page_dark_mode;
use crate::usecases::u001_payment_calculator::calculate_payment;
use contracts::domain::a001_loan::{LoanAction, LoanId, ParseLoanIdError};
use contracts::domain::a002_notification::NotificationId;
use contracts::domain::a003_setting::UpdateSettingRequest;
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

fn web_client() -> ApiClient<GlooTransport> {
    ApiClient::new(GlooTransport, config::current().api_base)
}

fn js_error(message: &str) -> JsValue {
    js_sys::Error::new(message).into()
}

/// Integral, non-negative and in range; anything else is not an id.
fn whole_number(value: f64) -> Option<u64> {
    (value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u64::MAX as f64)
        .then_some(value as u64)
}

/// Ids arrive as numbers from `onclick="approveLoan(42)"` or as strings from `data-*` attributes.
fn id_from_js(value: &JsValue) -> Option<u64> {
    match value.as_f64() {
        Some(number) => whole_number(number),
        None => value.as_string()?.trim().parse().ok(),
    }
}

fn loan_id_from_js(value: &JsValue) -> Result<LoanId, ParseLoanIdError> {
    id_from_js(value)
        .map(LoanId::new)
        .ok_or_else(|| ParseLoanIdError(format!("{:?}", value)))
}

/// `message` of an Error object, or the value itself if it is a string.
fn error_text(error: &JsValue) -> String {
    if let Some(text) = error.as_string() {
        return text;
    }
    js_sys::Reflect::get(error, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .unwrap_or_default()
}

#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form_js(form_id: &str) -> bool {
    WebDocument::current()
        .map(|document| validate_form(&document, form_id))
        .unwrap_or(false)
}

/// Resolves with the parsed JSON body; rejects with an `Error` carrying the failure message.
#[wasm_bindgen(js_name = makeAjaxRequest)]
pub async fn make_ajax_request(
    url: String,
    method: Option<String>,
    data: JsValue,
) -> Result<JsValue, JsValue> {
    let method = match method.as_deref() {
        None => HttpMethod::Get,
        Some(name) => HttpMethod::parse(name)
            .ok_or_else(|| js_error(&format!("Unsupported method: {}", name)))?,
    };
    let body: Option<Value> = if data.is_undefined() || data.is_null() {
        None
    } else {
        Some(serde_wasm_bindgen::from_value(data).map_err(|e| js_error(&e.to_string()))?)
    };

    let response = web_client()
        .request(&url, method, body.as_ref())
        .await
        .map_err(|e| js_error(&e.to_string()))?;

    response
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| js_error(&e.to_string()))
}

fn spawn_loan_action(action: LoanAction, loan_id: &JsValue) {
    let loan_id = match loan_id_from_js(loan_id) {
        Ok(id) => id,
        Err(e) => {
            log::error!("{}", e);
            return;
        }
    };
    let Some(window) = WebWindow::current() else {
        return;
    };
    spawn_local(async move {
        let outcome = run_loan_action(&web_client(), &window, action, loan_id).await;
        log::debug!("{} {}: {:?}", action.as_str(), loan_id, outcome);
    });
}

#[wasm_bindgen(js_name = approveLoan)]
pub fn approve_loan(loan_id: JsValue) {
    spawn_loan_action(LoanAction::Approve, &loan_id);
}

#[wasm_bindgen(js_name = rejectLoan)]
pub fn reject_loan(loan_id: JsValue) {
    spawn_loan_action(LoanAction::Reject, &loan_id);
}

#[wasm_bindgen(js_name = calculatePayment)]
pub fn calculate_payment_js() {
    if let Some(document) = WebDocument::current() {
        calculate_payment(&document, &config::current().currency_symbol);
    }
}

#[wasm_bindgen(js_name = formatCurrency)]
pub fn format_currency_js(amount: f64) -> String {
    format_currency(&config::current().currency_symbol, amount)
}

#[wasm_bindgen(js_name = formatDate)]
pub fn format_date_js(date: &str) -> String {
    format_long_date(date)
}

#[wasm_bindgen(js_name = showLoading)]
pub fn show_loading(element_id: &str) {
    if let Some(document) = WebDocument::current() {
        notices::show_loading(&document, element_id);
    }
}

#[wasm_bindgen(js_name = hideLoading)]
pub fn hide_loading(element_id: &str, original_content: &str) {
    if let Some(document) = WebDocument::current() {
        notices::hide_loading(&document, element_id, original_content);
    }
}

/// Wraps `func` so that a burst of calls runs it once, `wait` ms after the last call.
#[wasm_bindgen]
pub fn debounce(func: js_sys::Function, wait: u32) -> JsValue {
    let debouncer = Debouncer::new(GlooScheduler::page(), wait, move |arg: JsValue| {
        if let Err(e) = func.call1(&JsValue::NULL, &arg) {
            log::error!("debounced callback threw: {:?}", e);
        }
    });
    Closure::<dyn Fn(JsValue)>::new(move |arg: JsValue| debouncer.call(arg)).into_js_value()
}

#[wasm_bindgen(js_name = searchLoans)]
pub fn search_loans(query: &str) {
    if let Some(document) = WebDocument::current() {
        search_rows(&document, LOANS_TABLE_ID, query);
    }
}

#[wasm_bindgen(js_name = exportToCSV)]
pub fn export_to_csv(table_id: &str, filename: &str) {
    let (Some(document), Some(window)) = (WebDocument::current(), WebWindow::current()) else {
        return;
    };
    if let Err(e) = export_table_csv(&document, &window, table_id, filename) {
        log::warn!("CSV export of #{} failed: {}", table_id, e);
    }
}

#[wasm_bindgen(js_name = printTable)]
pub fn print_table_js(table_id: &str) {
    let (Some(document), Some(window)) = (WebDocument::current(), WebWindow::current()) else {
        return;
    };
    if let Err(e) = print_table(&document, &window, table_id, &config::current().print_stylesheet) {
        log::warn!("printing #{} failed: {}", table_id, e);
    }
}

/// Returns whether dark mode is on afterwards.
#[wasm_bindgen(js_name = toggleDarkMode)]
pub fn toggle_dark_mode() -> bool {
    toggle_page_dark_mode()
        .map(|preference| preference.enabled)
        .unwrap_or(false)
}

#[wasm_bindgen(js_name = handleError)]
pub fn handle_error(error: JsValue, element_id: Option<String>) {
    log::error!("Error: {:?}", error);
    if let Some(document) = WebDocument::current() {
        notices::handle_error(
            &document,
            &error_text(&error),
            element_id.as_deref().unwrap_or(ERROR_ELEMENT_ID),
        );
    }
}

#[wasm_bindgen(js_name = showSuccess)]
pub fn show_success(message: &str, element_id: Option<String>) {
    if let Some(document) = WebDocument::current() {
        notices::show_success(
            &document,
            &GlooScheduler::page(),
            message,
            element_id.as_deref().unwrap_or(SUCCESS_ELEMENT_ID),
            config::current().success_hide_ms,
        );
    }
}

#[wasm_bindgen(js_name = markNotificationRead)]
pub fn mark_notification_read_js(notification_id: JsValue) {
    let Some(id) = id_from_js(&notification_id).map(NotificationId) else {
        log::error!("invalid notification id: {:?}", notification_id);
        return;
    };
    let (Some(document), Some(window)) = (WebDocument::current(), WebWindow::current()) else {
        return;
    };
    spawn_local(async move {
        mark_notification_read(&web_client(), &document, &window, id).await;
    });
}

#[wasm_bindgen(js_name = updateSetting)]
pub fn update_setting_js(key: String, value: String) {
    let Some(document) = WebDocument::current() else {
        return;
    };
    let hide_ms = config::current().success_hide_ms;
    spawn_local(async move {
        let request = UpdateSettingRequest { key, value };
        update_setting(&web_client(), &document, &GlooScheduler::page(), request, hide_ms).await;
    });
}
