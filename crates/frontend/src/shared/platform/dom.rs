use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, NodeList};

/// The subset of `Element` the page scripts use.
pub trait Element: Clone + 'static {
    /// Current value of a form control; `None` for anything else.
    fn value(&self) -> Option<String>;
    fn text_content(&self) -> String;
    fn set_text_content(&self, text: &str);
    fn set_inner_html(&self, html: &str);
    fn outer_html(&self) -> String;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn has_class(&self, class: &str) -> bool;
    /// Sets `style.display`; an empty string clears the inline value.
    fn set_display(&self, display: &str);
    /// Descendants matching a CSS selector, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self>;

    /// Flips `class` and returns whether it is now present.
    fn toggle_class(&self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }
}

pub trait Document {
    type Element: Element;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;
    fn body(&self) -> Option<Self::Element>;
}

#[derive(Clone, Debug)]
pub struct WebElement(pub web_sys::Element);

impl WebElement {
    pub fn inner(&self) -> &web_sys::Element {
        &self.0
    }
}

fn collect_elements(list: Result<NodeList, JsValue>) -> Vec<WebElement> {
    let Ok(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .map(WebElement)
        .collect()
}

impl Element for WebElement {
    fn value(&self) -> Option<String> {
        if let Some(input) = self.0.dyn_ref::<HtmlInputElement>() {
            return Some(input.value());
        }
        if let Some(select) = self.0.dyn_ref::<HtmlSelectElement>() {
            return Some(select.value());
        }
        self.0
            .dyn_ref::<HtmlTextAreaElement>()
            .map(HtmlTextAreaElement::value)
    }

    fn text_content(&self) -> String {
        self.0.text_content().unwrap_or_default()
    }

    fn set_text_content(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn set_inner_html(&self, html: &str) {
        self.0.set_inner_html(html);
    }

    fn outer_html(&self) -> String {
        self.0.outer_html()
    }

    fn add_class(&self, class: &str) {
        let _ = self.0.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.0.class_list().remove_1(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn set_display(&self, display: &str) {
        let Some(element) = self.0.dyn_ref::<HtmlElement>() else {
            return;
        };
        let style = element.style();
        let _ = if display.is_empty() {
            style.remove_property("display").map(|_| ())
        } else {
            style.set_property("display", display)
        };
    }

    fn query_all(&self, selector: &str) -> Vec<Self> {
        collect_elements(self.0.query_selector_all(selector))
    }
}

#[derive(Clone, Debug)]
pub struct WebDocument(pub web_sys::Document);

impl WebDocument {
    /// The page's document; `None` outside a window (workers, tests).
    pub fn current() -> Option<Self> {
        web_sys::window()?.document().map(Self)
    }
}

impl Document for WebDocument {
    type Element = WebElement;

    fn element_by_id(&self, id: &str) -> Option<WebElement> {
        self.0.get_element_by_id(id).map(WebElement)
    }

    fn query_all(&self, selector: &str) -> Vec<WebElement> {
        collect_elements(self.0.query_selector_all(selector))
    }

    fn body(&self) -> Option<WebElement> {
        self.0.body().map(|body| WebElement(body.into()))
    }
}
