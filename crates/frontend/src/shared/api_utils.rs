//! JSON calls to the loan API.

use super::error::ApiError;
use super::platform::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
use contracts::shared::api_response::{failure_message, GENERIC_FAILURE};
use serde::Serialize;
use serde_json::Value;

/// Sends JSON requests through a transport and hands back the parsed body.
pub struct ApiClient<T> {
    transport: T,
    base: String,
}

impl<T: HttpTransport> ApiClient<T> {
    pub fn new(transport: T, base: impl Into<String>) -> Self {
        Self {
            transport,
            base: base.into(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base.trim_end_matches('/'), path)
    }

    /// One round trip. Non-2xx statuses become `ApiError::Server` carrying the
    /// body's `message`/`error`; transport failures come back unchanged.
    pub async fn request(
        &self,
        path: &str,
        method: HttpMethod,
        data: Option<&Value>,
    ) -> Result<Value, ApiError> {
        let body = data
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| ApiError::Encode(e.to_string()))?;

        let request = HttpRequest {
            method,
            url: self.url(path),
            body,
        };

        let result = match self.transport.send(request).await {
            Ok(response) => interpret_response(response),
            Err(e) => Err(e),
        };
        if let Err(e) = &result {
            log::error!("Error: {} {}: {}", method_name(method), path, e);
        }
        result
    }

    pub async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.request(path, HttpMethod::Post, Some(&value)).await
    }
}

fn method_name(method: HttpMethod) -> &'static str {
    match method {
        HttpMethod::Get => "GET",
        HttpMethod::Post => "POST",
        HttpMethod::Put => "PUT",
        HttpMethod::Patch => "PATCH",
        HttpMethod::Delete => "DELETE",
    }
}

/// Parses the body and applies the status check.
///
/// A failed response whose body is not JSON (proxy error pages) reports the
/// generic failure instead of a parser message.
pub fn interpret_response(response: HttpResponse) -> Result<Value, ApiError> {
    let parsed = serde_json::from_str::<Value>(&response.body);

    if !response.is_success() {
        let message = parsed
            .map(|body| failure_message(&body))
            .unwrap_or_else(|_| GENERIC_FAILURE.to_string());
        return Err(ApiError::Server {
            status: response.status,
            message,
        });
    }

    parsed.map_err(|e| ApiError::Decode(e.to_string()))
}
