use crate::shared::error::UiError;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// String key/value persistence (`localStorage` in the browser).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), UiError>;
}

/// `window.localStorage`.
#[derive(Clone, Debug)]
pub struct LocalStore(web_sys::Storage);

impl LocalStore {
    /// `None` when storage is disabled (private mode, sandboxed iframe).
    pub fn open() -> Option<Self> {
        web_sys::window()?.local_storage().ok()?.map(Self)
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), UiError> {
        self.0
            .set_item(key, value)
            .map_err(|e| UiError::js("localStorage.setItem", e))
    }
}

/// Process-local store. Lives as long as the page when local storage is unavailable.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore(Rc<RefCell<HashMap<String, String>>>);

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), UiError> {
        self.0.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

thread_local! {
    static PAGE_STORE: MemoryStore = MemoryStore::new();
}

/// Local storage when the browser allows it, the page-lifetime store otherwise.
#[derive(Clone, Debug)]
pub enum BrowserStore {
    Local(LocalStore),
    Page(MemoryStore),
}

impl BrowserStore {
    pub fn open() -> Self {
        match LocalStore::open() {
            Some(store) => BrowserStore::Local(store),
            None => {
                log::warn!("localStorage unavailable, preferences last for this page only");
                BrowserStore::Page(PAGE_STORE.with(MemoryStore::clone))
            }
        }
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            BrowserStore::Local(store) => store.get(key),
            BrowserStore::Page(store) => store.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), UiError> {
        match self {
            BrowserStore::Local(store) => store.set(key, value),
            BrowserStore::Page(store) => store.set(key, value),
        }
    }
}
