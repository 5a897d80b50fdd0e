//! In-memory stand-ins for the browser capabilities.

use super::dom::{Document, Element};
use super::http::{HttpRequest, HttpResponse, HttpTransport};
use super::timer::{Scheduler, TimerId};
use super::widgets::WidgetHost;
use super::window::WindowHost;
use crate::shared::error::{ApiError, UiError};
use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

// ---------------------------------------------------------------------------
// DOM
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
struct Node {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<(String, String)>,
    value: Option<String>,
    text: String,
    inner_html: Option<String>,
    display: Option<String>,
    children: Vec<FakeElement>,
}

/// Element tree node with just enough behaviour for the page scripts.
#[derive(Clone, Debug)]
pub struct FakeElement(Rc<RefCell<Node>>);

impl FakeElement {
    pub fn new(tag: &str) -> Self {
        FakeElement(Rc::new(RefCell::new(Node {
            tag: tag.to_ascii_lowercase(),
            ..Node::default()
        })))
    }

    pub fn with_id(self, id: &str) -> Self {
        self.0.borrow_mut().id = Some(id.to_string());
        self
    }

    pub fn with_class(self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_attr(self, name: &str, value: &str) -> Self {
        self.0
            .borrow_mut()
            .attrs
            .push((name.to_string(), value.to_string()));
        self
    }

    pub fn with_value(self, value: &str) -> Self {
        self.set_value(value);
        self
    }

    pub fn with_text(self, text: &str) -> Self {
        self.0.borrow_mut().text = text.to_string();
        self
    }

    pub fn with_child(self, child: FakeElement) -> Self {
        self.0.borrow_mut().children.push(child);
        self
    }

    pub fn set_value(&self, value: &str) {
        self.0.borrow_mut().value = Some(value.to_string());
    }

    pub fn display(&self) -> Option<String> {
        self.0.borrow().display.clone()
    }

    pub fn inner_html(&self) -> Option<String> {
        self.0.borrow().inner_html.clone()
    }

    pub fn classes(&self) -> Vec<String> {
        self.0.borrow().classes.clone()
    }

    pub fn id(&self) -> Option<String> {
        self.0.borrow().id.clone()
    }

    fn children(&self) -> Vec<FakeElement> {
        self.0.borrow().children.clone()
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.0
            .borrow()
            .attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
    }

    fn find_by_id(&self, id: &str) -> Option<FakeElement> {
        if self.id().as_deref() == Some(id) {
            return Some(self.clone());
        }
        self.children().iter().find_map(|c| c.find_by_id(id))
    }
}

impl Element for FakeElement {
    fn value(&self) -> Option<String> {
        self.0.borrow().value.clone()
    }

    fn text_content(&self) -> String {
        let mut text = self.0.borrow().text.clone();
        for child in self.children() {
            text.push_str(&child.text_content());
        }
        text
    }

    fn set_text_content(&self, text: &str) {
        let mut node = self.0.borrow_mut();
        node.text = text.to_string();
        node.inner_html = None;
        node.children.clear();
    }

    fn set_inner_html(&self, html: &str) {
        let mut node = self.0.borrow_mut();
        node.inner_html = Some(html.to_string());
        node.text.clear();
        node.children.clear();
    }

    fn outer_html(&self) -> String {
        let node = self.0.borrow();
        let mut html = format!("<{}", node.tag);
        if let Some(id) = &node.id {
            html.push_str(&format!(" id=\"{}\"", id));
        }
        if !node.classes.is_empty() {
            html.push_str(&format!(" class=\"{}\"", node.classes.join(" ")));
        }
        for (name, value) in &node.attrs {
            html.push_str(&format!(" {}=\"{}\"", name, value));
        }
        html.push('>');
        match &node.inner_html {
            Some(inner) => html.push_str(inner),
            None => {
                html.push_str(&node.text);
                for child in &node.children {
                    html.push_str(&child.outer_html());
                }
            }
        }
        html.push_str(&format!("</{}>", node.tag));
        html
    }

    fn add_class(&self, class: &str) {
        let mut node = self.0.borrow_mut();
        if !node.classes.iter().any(|c| c == class) {
            node.classes.push(class.to_string());
        }
    }

    fn remove_class(&self, class: &str) {
        self.0.borrow_mut().classes.retain(|c| c != class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == class)
    }

    fn set_display(&self, display: &str) {
        self.0.borrow_mut().display = if display.is_empty() {
            None
        } else {
            Some(display.to_string())
        };
    }

    fn query_all(&self, selector: &str) -> Vec<Self> {
        let chains = parse_selector(selector);
        let mut found = Vec::new();
        let mut path = Vec::new();
        for child in self.children() {
            walk(&child, &mut path, &chains, &mut found);
        }
        found
    }
}

/// `<html><body>…</body></html>`.
pub struct FakeDocument {
    root: FakeElement,
    body: FakeElement,
}

impl FakeDocument {
    pub fn with_body(children: Vec<FakeElement>) -> Self {
        let body = children
            .into_iter()
            .fold(FakeElement::new("body"), FakeElement::with_child);
        let root = FakeElement::new("html").with_child(body.clone());
        FakeDocument { root, body }
    }

    pub fn body_element(&self) -> FakeElement {
        self.body.clone()
    }
}

impl Document for FakeDocument {
    type Element = FakeElement;

    fn element_by_id(&self, id: &str) -> Option<FakeElement> {
        self.root.find_by_id(id)
    }

    fn query_all(&self, selector: &str) -> Vec<FakeElement> {
        self.root.query_all(selector)
    }

    fn body(&self) -> Option<FakeElement> {
        Some(self.body.clone())
    }
}

/// One compound selector such as `input[required]` or `.alert:not(.alert-permanent)`.
#[derive(Debug, Default)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    not_classes: Vec<String>,
    attrs: Vec<(String, Option<String>)>,
}

fn ident_end(s: &str) -> usize {
    s.find(|ch: char| !(ch.is_ascii_alphanumeric() || ch == '-' || ch == '_'))
        .unwrap_or(s.len())
}

fn parse_compound(source: &str) -> Compound {
    let mut compound = Compound::default();
    let tag_end = ident_end(source);
    if tag_end > 0 {
        compound.tag = Some(source[..tag_end].to_ascii_lowercase());
    }
    let mut rest = &source[tag_end..];

    while !rest.is_empty() {
        if let Some(r) = rest.strip_prefix(":not(") {
            let end = r.find(')').expect("unclosed :not(");
            compound
                .not_classes
                .push(r[..end].trim_start_matches('.').to_string());
            rest = &r[end + 1..];
        } else if let Some(r) = rest.strip_prefix('.') {
            let end = ident_end(r);
            compound.classes.push(r[..end].to_string());
            rest = &r[end..];
        } else if let Some(r) = rest.strip_prefix('#') {
            let end = ident_end(r);
            compound.id = Some(r[..end].to_string());
            rest = &r[end..];
        } else if let Some(r) = rest.strip_prefix('[') {
            let end = r.find(']').expect("unclosed [");
            let attr = match r[..end].split_once('=') {
                Some((name, value)) => (name.to_string(), Some(value.trim_matches('"').to_string())),
                None => (r[..end].to_string(), None),
            };
            compound.attrs.push(attr);
            rest = &r[end + 1..];
        } else {
            panic!("unsupported selector: {}", source);
        }
    }
    compound
}

fn parse_selector(selector: &str) -> Vec<Vec<Compound>> {
    selector
        .split(',')
        .map(|part| part.split_whitespace().map(parse_compound).collect())
        .collect()
}

fn matches(element: &FakeElement, compound: &Compound) -> bool {
    let node = element.0.borrow();
    compound.tag.as_ref().map_or(true, |t| &node.tag == t)
        && compound
            .id
            .as_ref()
            .map_or(true, |id| node.id.as_ref() == Some(id))
        && compound
            .classes
            .iter()
            .all(|c| node.classes.iter().any(|have| have == c))
        && !compound
            .not_classes
            .iter()
            .any(|c| node.classes.iter().any(|have| have == c))
        && compound.attrs.iter().all(|(name, value)| {
            attr_matches(element, name, value.as_deref())
        })
}

fn attr_matches(element: &FakeElement, name: &str, value: Option<&str>) -> bool {
    match (element.attr(name), value) {
        (Some(_), None) => true,
        (Some(have), Some(want)) => have == want,
        (None, _) => false,
    }
}

fn chain_matches(element: &FakeElement, ancestors: &[FakeElement], chain: &[Compound]) -> bool {
    let Some((last, mut remaining)) = chain.split_last() else {
        return false;
    };
    if !matches(element, last) {
        return false;
    }
    let mut idx = ancestors.len();
    while let Some((wanted, before)) = remaining.split_last() {
        loop {
            if idx == 0 {
                return false;
            }
            idx -= 1;
            if matches(&ancestors[idx], wanted) {
                break;
            }
        }
        remaining = before;
    }
    true
}

fn walk(
    element: &FakeElement,
    path: &mut Vec<FakeElement>,
    chains: &[Vec<Compound>],
    found: &mut Vec<FakeElement>,
) {
    if chains.iter().any(|chain| chain_matches(element, path, chain)) {
        found.push(element.clone());
    }
    path.push(element.clone());
    for child in element.children() {
        walk(&child, path, chains, found);
    }
    path.pop();
}

// ---------------------------------------------------------------------------
// Timers
// ---------------------------------------------------------------------------

#[derive(Default)]
struct SchedulerState {
    now: u64,
    next_id: i32,
    tasks: Vec<(TimerId, u64, Box<dyn FnOnce()>)>,
}

/// Virtual clock; tasks run only inside `advance`.
#[derive(Clone, Default)]
pub struct ManualScheduler(Rc<RefCell<SchedulerState>>);

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.0.borrow().tasks.len()
    }

    pub fn advance(&self, ms: u64) {
        let target = self.0.borrow().now + ms;
        loop {
            let next = {
                let mut state = self.0.borrow_mut();
                let due = state
                    .tasks
                    .iter()
                    .enumerate()
                    .filter(|(_, task)| task.1 <= target)
                    .min_by_key(|(i, task)| (task.1, *i))
                    .map(|(i, _)| i);
                due.map(|i| {
                    let task = state.tasks.remove(i);
                    state.now = task.1;
                    task.2
                })
            };
            match next {
                Some(task) => task(),
                None => break,
            }
        }
        self.0.borrow_mut().now = target;
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TimerId {
        let mut state = self.0.borrow_mut();
        state.next_id += 1;
        let id = TimerId(state.next_id);
        let due = state.now + u64::from(delay_ms);
        state.tasks.push((id, due, task));
        id
    }

    fn cancel(&self, id: TimerId) {
        self.0.borrow_mut().tasks.retain(|task| task.0 != id);
    }
}

// ---------------------------------------------------------------------------
// Window
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct RecordingWindow {
    pub answer: Cell<bool>,
    pub confirms: RefCell<Vec<String>>,
    pub alerts: RefCell<Vec<String>>,
    pub reloads: Cell<u32>,
    pub downloads: RefCell<Vec<(String, String, String)>>,
    pub printed: RefCell<Vec<String>>,
}

impl RecordingWindow {
    pub fn confirming(answer: bool) -> Self {
        let window = Self::default();
        window.answer.set(answer);
        window
    }
}

impl WindowHost for RecordingWindow {
    fn confirm(&self, message: &str) -> bool {
        self.confirms.borrow_mut().push(message.to_string());
        self.answer.get()
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn reload(&self) {
        self.reloads.set(self.reloads.get() + 1);
    }

    fn download(&self, filename: &str, mime: &str, content: &str) -> Result<(), UiError> {
        self.downloads.borrow_mut().push((
            filename.to_string(),
            mime.to_string(),
            content.to_string(),
        ));
        Ok(())
    }

    fn print_html(&self, html: &str) -> Result<(), UiError> {
        self.printed.borrow_mut().push(html.to_string());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// HTTP
// ---------------------------------------------------------------------------

/// Replays queued responses in order and records every request.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: RefCell<VecDeque<Result<HttpResponse, ApiError>>>,
    pub requests: RefCell<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: &str) -> Self {
        self.responses.borrow_mut().push_back(Ok(HttpResponse {
            status,
            body: body.to_string(),
        }));
        self
    }

    pub fn fail(self, error: ApiError) -> Self {
        self.responses.borrow_mut().push_back(Err(error));
        self
    }
}

#[async_trait(?Send)]
impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted response".into())))
    }
}

// ---------------------------------------------------------------------------
// Widgets
// ---------------------------------------------------------------------------

#[derive(Clone, Default)]
pub struct RecordingWidgets {
    pub calls: Rc<RefCell<Vec<(&'static str, String)>>>,
}

impl RecordingWidgets {
    fn record(&self, kind: &'static str, element: &FakeElement) -> Result<(), UiError> {
        let label = element.id().unwrap_or_else(|| element.text_content());
        self.calls.borrow_mut().push((kind, label));
        Ok(())
    }

    pub fn calls_of(&self, kind: &str) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, label)| label.clone())
            .collect()
    }
}

impl WidgetHost<FakeElement> for RecordingWidgets {
    fn activate_tooltip(&self, element: &FakeElement) -> Result<(), UiError> {
        self.record("tooltip", element)
    }

    fn activate_popover(&self, element: &FakeElement) -> Result<(), UiError> {
        self.record("popover", element)
    }

    fn close_alert(&self, element: &FakeElement) -> Result<(), UiError> {
        self.record("close_alert", element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_matching() {
        let table = FakeElement::new("table").with_id("t").with_child(
            FakeElement::new("tbody")
                .with_child(FakeElement::new("tr").with_child(FakeElement::new("td").with_text("x"))),
        );
        let doc = FakeDocument::with_body(vec![
            table,
            FakeElement::new("div").with_class("alert"),
            FakeElement::new("div").with_class("alert").with_class("alert-permanent"),
            FakeElement::new("input").with_attr("required", ""),
            FakeElement::new("span").with_attr("data-bs-toggle", "tooltip"),
        ]);

        assert_eq!(doc.query_all("tbody tr").len(), 1);
        assert_eq!(doc.query_all("td, th").len(), 1);
        assert_eq!(doc.query_all(".alert:not(.alert-permanent)").len(), 1);
        assert_eq!(doc.query_all("input[required], select[required]").len(), 1);
        assert_eq!(doc.query_all("[data-bs-toggle=\"tooltip\"]").len(), 1);
        assert!(doc.element_by_id("t").is_some());
    }

    #[test]
    fn test_manual_scheduler_runs_in_due_order() {
        let scheduler = ManualScheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        for (delay, name) in [(30, "c"), (10, "a"), (20, "b")] {
            let log = log.clone();
            scheduler.schedule(delay, Box::new(move || log.borrow_mut().push(name)));
        }
        let cancelled = scheduler.schedule(15, Box::new(|| panic!("cancelled task ran")));
        scheduler.cancel(cancelled);

        scheduler.advance(25);
        assert_eq!(*log.borrow(), vec!["a", "b"]);
        scheduler.advance(5);
        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
        assert_eq!(scheduler.pending(), 0);
    }
}
