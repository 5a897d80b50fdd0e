//! Capability traits over the browser globals the pages touch.
//!
//! Every page component is written against these traits. `Web*` types wrap
//! `web-sys`; `testing` holds in-memory stand-ins used by the unit tests.

pub mod dom;
pub mod http;
pub mod storage;
pub mod timer;
pub mod widgets;
pub mod window;

#[cfg(test)]
pub mod testing;

pub use dom::{Document, Element, WebDocument, WebElement};
pub use http::{GlooTransport, HttpMethod, HttpRequest, HttpResponse, HttpTransport};
pub use storage::{BrowserStore, KeyValueStore, LocalStore, MemoryStore};
pub use timer::{GlooScheduler, Scheduler, TimerId};
pub use widgets::{BootstrapWidgets, WidgetHost};
pub use window::{WebWindow, WindowHost};
