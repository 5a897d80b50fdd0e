use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failure of a call to the loan API.
///
/// `Display` is the bare human-readable message so it can be shown to the user as is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never got a response (host unreachable, CORS, aborted).
    #[error("{0}")]
    Network(String),
    /// Non-2xx status; `message` comes from the response body when it has one.
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("{0}")]
    Decode(String),
    #[error("{0}")]
    Encode(String),
}

/// Failure of a browser API call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    #[error("{0} is not available")]
    Unavailable(&'static str),
    #[error("{context}: {detail}")]
    Js { context: &'static str, detail: String },
}

impl UiError {
    pub fn js(context: &'static str, value: JsValue) -> Self {
        UiError::Js {
            context,
            detail: format!("{:?}", value),
        }
    }
}
