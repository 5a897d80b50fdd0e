//! Page-level settings.
//!
//! Defaults match the production templates. A page may override any field with
//!
//! ```html
//! <script type="application/json" id="loan-ui-config">{ "api_base": "/lms" }</script>
//! ```

use crate::shared::platform::{Document, Element, WebDocument};
use anyhow::Context;
use once_cell::unsync::OnceCell;
use serde::{Deserialize, Serialize};

pub const CONFIG_ELEMENT_ID: &str = "loan-ui-config";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Prefix for API paths; empty means same origin.
    pub api_base: String,
    pub alert_dismiss_ms: u32,
    pub success_hide_ms: u32,
    pub search_debounce_ms: u32,
    /// Longest term the calculator widget renders a repayment table for.
    pub max_schedule_months: u32,
    pub currency_symbol: String,
    pub print_stylesheet: String,
    pub dark_mode_key: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            alert_dismiss_ms: 5000,
            success_hide_ms: 5000,
            search_debounce_ms: 300,
            max_schedule_months: 600,
            currency_symbol: "₹".to_string(),
            print_stylesheet:
                "https://cdn.jsdelivr.net/npm/bootstrap@5.1.3/dist/css/bootstrap.min.css"
                    .to_string(),
            dark_mode_key: "darkMode".to_string(),
        }
    }
}

impl UiConfig {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).with_context(|| format!("invalid #{} block", CONFIG_ELEMENT_ID))
    }

    /// Reads the override block if the page has one; falls back to defaults on any problem.
    pub fn load<D: Document>(document: &D) -> Self {
        let Some(element) = document.element_by_id(CONFIG_ELEMENT_ID) else {
            return Self::default();
        };
        match Self::from_json(&element.text_content()) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{:#}, using defaults", e);
                Self::default()
            }
        }
    }

    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), path)
    }
}

thread_local! {
    static CURRENT: OnceCell<UiConfig> = OnceCell::new();
}

/// Configuration of the running page, read once.
pub fn current() -> UiConfig {
    CURRENT.with(|cell| {
        cell.get_or_init(|| {
            WebDocument::current()
                .map(|document| UiConfig::load(&document))
                .unwrap_or_default()
        })
        .clone()
    })
}
