use crate::shared::error::UiError;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Dialogs, navigation and the two "hand a document to the browser" operations.
pub trait WindowHost {
    /// Blocking yes/no dialog.
    fn confirm(&self, message: &str) -> bool;
    /// Blocking message dialog.
    fn alert(&self, message: &str);
    fn reload(&self);
    /// Saves `content` as a file through a temporary object URL.
    fn download(&self, filename: &str, mime: &str, content: &str) -> Result<(), UiError>;
    /// Opens `html` in a new window and starts printing it.
    fn print_html(&self, html: &str) -> Result<(), UiError>;
}

#[derive(Clone, Debug)]
pub struct WebWindow(web_sys::Window);

impl WebWindow {
    pub fn current() -> Option<Self> {
        web_sys::window().map(Self)
    }
}

impl WindowHost for WebWindow {
    fn confirm(&self, message: &str) -> bool {
        self.0.confirm_with_message(message).unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        let _ = self.0.alert_with_message(message);
    }

    fn reload(&self) {
        if let Err(e) = self.0.location().reload() {
            log::warn!("location.reload failed: {:?}", e);
        }
    }

    fn download(&self, filename: &str, mime: &str, content: &str) -> Result<(), UiError> {
        let document = self.0.document().ok_or(UiError::Unavailable("document"))?;

        let parts = js_sys::Array::new();
        parts.push(&JsValue::from_str(content));
        let properties = BlobPropertyBag::new();
        properties.set_type(mime);
        let blob = Blob::new_with_str_sequence_and_options(&parts, &properties)
            .map_err(|e| UiError::js("Blob", e))?;

        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|e| UiError::js("URL.createObjectURL", e))?;

        let anchor = document
            .create_element("a")
            .map_err(|e| UiError::js("createElement", e))?
            .dyn_into::<HtmlAnchorElement>()
            .map_err(|e| UiError::js("HtmlAnchorElement", e.into()))?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.click();

        Url::revoke_object_url(&url).map_err(|e| UiError::js("URL.revokeObjectURL", e))
    }

    fn print_html(&self, html: &str) -> Result<(), UiError> {
        let popup = self
            .0
            .open_with_url_and_target("", "_blank")
            .map_err(|e| UiError::js("window.open", e))?
            .ok_or(UiError::Unavailable("print window"))?;
        let document = popup.document().ok_or(UiError::Unavailable("print document"))?;
        let document = document.unchecked_ref::<web_sys::HtmlDocument>();

        let chunks = js_sys::Array::of1(&JsValue::from_str(html));
        document
            .write(&chunks)
            .map_err(|e| UiError::js("document.write", e))?;
        document
            .close()
            .map_err(|e| UiError::js("document.close", e))?;
        popup.print().map_err(|e| UiError::js("window.print", e))
    }
}
