//! Dark mode for the loan pages.
//!
//! The preference is a plain value persisted in localStorage as `"true"`/`"false"`
//! and rendered as the `dark-mode` class on `<body>`.

use crate::config;
use crate::shared::platform::{BrowserStore, Document, Element, KeyValueStore, WebDocument};
use leptos::prelude::*;

pub const DARK_MODE_CLASS: &str = "dark-mode";
/// Placeholder the toggle button is mounted into.
pub const DARK_MODE_TOGGLE_ID: &str = "dark-mode-toggle";

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct DarkModePreference {
    pub enabled: bool,
}

impl DarkModePreference {
    /// Only the exact string `"true"` enables dark mode.
    pub fn from_stored(value: Option<&str>) -> Self {
        Self {
            enabled: value == Some("true"),
        }
    }

    pub fn as_stored(&self) -> &'static str {
        if self.enabled {
            "true"
        } else {
            "false"
        }
    }
}

pub fn load_preference<S: KeyValueStore>(store: &S, key: &str) -> DarkModePreference {
    DarkModePreference::from_stored(store.get(key).as_deref())
}

fn save_preference<S: KeyValueStore>(store: &S, key: &str, preference: DarkModePreference) {
    if let Err(e) = store.set(key, preference.as_stored()) {
        log::warn!("could not persist dark mode preference: {}", e);
    }
}

/// Re-applies a stored preference on page load. A stored `"false"` leaves the body as rendered.
pub fn restore_dark_mode<D: Document, S: KeyValueStore>(
    document: &D,
    store: &S,
    key: &str,
) -> DarkModePreference {
    let preference = load_preference(store, key);
    if preference.enabled {
        if let Some(body) = document.body() {
            body.add_class(DARK_MODE_CLASS);
        }
    }
    preference
}

/// Flips the body class and persists the new state. `None` if the page has no body.
pub fn toggle_dark_mode<D: Document, S: KeyValueStore>(
    document: &D,
    store: &S,
    key: &str,
) -> Option<DarkModePreference> {
    let body = document.body()?;
    let preference = DarkModePreference {
        enabled: body.toggle_class(DARK_MODE_CLASS),
    };
    save_preference(store, key, preference);
    Some(preference)
}

/// Dark mode as seen by the page widgets. Every toggle goes through it so
/// the button label follows calls from page scripts too.
#[derive(Clone, Copy, Debug)]
pub struct DarkModeState(RwSignal<bool>);

thread_local! {
    static PAGE_STATE: DarkModeState = DarkModeState::new(
        WebDocument::current()
            .and_then(|d| d.body())
            .map(|body| body.has_class(DARK_MODE_CLASS))
            .unwrap_or(false),
    );
}

impl DarkModeState {
    pub fn new(enabled: bool) -> Self {
        Self(RwSignal::new(enabled))
    }

    /// Shared state of the running page, seeded from the body class on first use.
    pub fn page() -> Self {
        PAGE_STATE.with(|state| *state)
    }

    /// Tracked read, for views.
    pub fn enabled(&self) -> bool {
        self.0.get()
    }

    pub fn enabled_untracked(&self) -> bool {
        self.0.get_untracked()
    }

    pub fn toggle<D: Document, S: KeyValueStore>(
        &self,
        document: &D,
        store: &S,
        key: &str,
    ) -> Option<DarkModePreference> {
        let preference = toggle_dark_mode(document, store, key)?;
        self.0.set(preference.enabled);
        Some(preference)
    }
}

/// Toggle against the live page.
pub fn toggle_page_dark_mode() -> Option<DarkModePreference> {
    let document = WebDocument::current()?;
    DarkModeState::page().toggle(
        &document,
        &BrowserStore::open(),
        &config::current().dark_mode_key,
    )
}

/// Button that switches dark mode and names the mode it switches to.
#[component]
pub fn DarkModeToggle() -> impl IntoView {
    let state = DarkModeState::page();

    view! {
        <button
            type="button"
            class="btn btn-outline-secondary btn-sm"
            title="Toggle dark mode"
            on:click=move |_| {
                toggle_page_dark_mode();
            }
        >
            {move || if state.enabled() { "Light mode" } else { "Dark mode" }}
        </button>
    }
}
