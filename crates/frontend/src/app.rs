//! Page bootstrap: runs once per page load.

use crate::config::{self, UiConfig};
use crate::shared::debounce::Debouncer;
use crate::shared::platform::{
    BootstrapWidgets, BrowserStore, Document, Element, GlooScheduler, KeyValueStore, Scheduler,
    WebDocument, WidgetHost,
};
use crate::shared::table_utils::{search_rows, LOANS_TABLE_ID, LOAN_SEARCH_INPUT_ID};
use crate::shared::theme::{restore_dark_mode, DarkModePreference, DarkModeToggle, DARK_MODE_TOGGLE_ID};
use crate::usecases::u001_payment_calculator::{LoanCalculator, LOAN_CALCULATOR_ROOT_ID};
use leptos::prelude::IntoView;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement};

pub const TOOLTIP_SELECTOR: &str = r#"[data-bs-toggle="tooltip"]"#;
pub const POPOVER_SELECTOR: &str = r#"[data-bs-toggle="popover"]"#;
pub const CARD_SELECTOR: &str = ".card";
pub const FADE_IN_CLASS: &str = "fade-in";
/// Alerts marked `alert-permanent` stay until the user closes them.
pub const TRANSIENT_ALERT_SELECTOR: &str = ".alert:not(.alert-permanent)";

/// What the bootstrap touched, for the debug log.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PageInitReport {
    pub tooltips: usize,
    pub popovers: usize,
    pub cards: usize,
    pub alerts: usize,
    pub dark_mode: DarkModePreference,
}

/// Widgets, entrance animation, alert auto-dismiss and the stored dark mode.
pub fn init_page<D, H, S, K>(
    document: &D,
    widgets: &H,
    scheduler: &S,
    store: &K,
    config: &UiConfig,
) -> PageInitReport
where
    D: Document,
    H: WidgetHost<D::Element>,
    S: Scheduler,
    K: KeyValueStore,
{
    let mut report = PageInitReport::default();

    for element in document.query_all(TOOLTIP_SELECTOR) {
        match widgets.activate_tooltip(&element) {
            Ok(()) => report.tooltips += 1,
            Err(e) => log::warn!("tooltip not initialized: {}", e),
        }
    }
    for element in document.query_all(POPOVER_SELECTOR) {
        match widgets.activate_popover(&element) {
            Ok(()) => report.popovers += 1,
            Err(e) => log::warn!("popover not initialized: {}", e),
        }
    }

    for card in document.query_all(CARD_SELECTOR) {
        card.add_class(FADE_IN_CLASS);
        report.cards += 1;
    }

    for alert in document.query_all(TRANSIENT_ALERT_SELECTOR) {
        let widgets = widgets.clone();
        scheduler.schedule(
            config.alert_dismiss_ms,
            Box::new(move || {
                if let Err(e) = widgets.close_alert(&alert) {
                    log::warn!("alert not dismissed: {}", e);
                }
            }),
        );
        report.alerts += 1;
    }

    report.dark_mode = restore_dark_mode(document, store, &config.dark_mode_key);

    // Chart and live-notification hooks are not wired to anything yet.
    log::debug!("Charts initialized");
    log::debug!("Notifications initialized");

    report
}

/// Runs `f` after `DOMContentLoaded`, or right away if that already happened.
pub fn on_dom_ready(f: fn()) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.ready_state() == "loading" {
        let callback = Closure::once_into_js(f);
        let _ = document
            .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref());
    } else {
        f();
    }
}

pub fn boot() {
    let Some(document) = WebDocument::current() else {
        return;
    };
    let config = config::current();

    let report = init_page(
        &document,
        &BootstrapWidgets,
        &GlooScheduler::page(),
        &BrowserStore::open(),
        &config,
    );
    log::debug!("page initialized: {:?}", report);

    wire_loan_search(&document, &config);
    mount_into(&document, DARK_MODE_TOGGLE_ID, DarkModeToggle);
    mount_into(&document, LOAN_CALCULATOR_ROOT_ID, LoanCalculator);
}

fn wire_loan_search(document: &WebDocument, config: &UiConfig) {
    let Some(input) = document.element_by_id(LOAN_SEARCH_INPUT_ID) else {
        return;
    };

    let debouncer = Debouncer::new(GlooScheduler::page(), config.search_debounce_ms, |query: String| {
        if let Some(document) = WebDocument::current() {
            let visible = search_rows(&document, LOANS_TABLE_ID, &query);
            log::debug!("loan search {:?}: {} rows", query, visible);
        }
    });

    let on_input = Closure::wrap(Box::new(move |event: web_sys::Event| {
        let query = event
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value())
            .unwrap_or_default();
        debouncer.call(query);
    }) as Box<dyn FnMut(web_sys::Event)>);

    let _ = input
        .inner()
        .add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref());
    on_input.forget();
}

fn mount_into<F, N>(document: &WebDocument, id: &str, view: F)
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    let Some(element) = document.element_by_id(id) else {
        return;
    };
    match element.inner().clone().dyn_into::<HtmlElement>() {
        Ok(parent) => leptos::mount::mount_to(parent, view).forget(),
        Err(_) => log::warn!("#{} is not an HTML element, widget not mounted", id),
    }
}
