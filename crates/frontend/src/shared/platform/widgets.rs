use super::dom::{Element, WebElement};
use crate::shared::error::UiError;
use wasm_bindgen::prelude::*;

/// Third-party behaviour attached to server-rendered markup.
pub trait WidgetHost<E: Element>: Clone + 'static {
    fn activate_tooltip(&self, element: &E) -> Result<(), UiError>;
    fn activate_popover(&self, element: &E) -> Result<(), UiError>;
    /// Plays the dismiss transition of an alert banner and removes it.
    fn close_alert(&self, element: &E) -> Result<(), UiError>;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap, js_name = Tooltip)]
    type BootstrapTooltip;

    #[wasm_bindgen(constructor, catch, js_namespace = bootstrap, js_class = "Tooltip")]
    fn new(element: &web_sys::Element) -> Result<BootstrapTooltip, JsValue>;

    #[wasm_bindgen(js_namespace = bootstrap, js_name = Popover)]
    type BootstrapPopover;

    #[wasm_bindgen(constructor, catch, js_namespace = bootstrap, js_class = "Popover")]
    fn new(element: &web_sys::Element) -> Result<BootstrapPopover, JsValue>;

    #[wasm_bindgen(js_namespace = bootstrap, js_name = Alert)]
    type BootstrapAlert;

    #[wasm_bindgen(constructor, catch, js_namespace = bootstrap, js_class = "Alert")]
    fn new(element: &web_sys::Element) -> Result<BootstrapAlert, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn close(this: &BootstrapAlert) -> Result<(), JsValue>;
}

/// Bootstrap 5 components from the page's global `bootstrap` bundle.
#[derive(Clone, Copy, Debug, Default)]
pub struct BootstrapWidgets;

impl WidgetHost<WebElement> for BootstrapWidgets {
    fn activate_tooltip(&self, element: &WebElement) -> Result<(), UiError> {
        BootstrapTooltip::new(element.inner())
            .map(|_| ())
            .map_err(|e| UiError::js("bootstrap.Tooltip", e))
    }

    fn activate_popover(&self, element: &WebElement) -> Result<(), UiError> {
        BootstrapPopover::new(element.inner())
            .map(|_| ())
            .map_err(|e| UiError::js("bootstrap.Popover", e))
    }

    fn close_alert(&self, element: &WebElement) -> Result<(), UiError> {
        BootstrapAlert::new(element.inner())
            .and_then(|alert| alert.close())
            .map_err(|e| UiError::js("bootstrap.Alert", e))
    }
}
