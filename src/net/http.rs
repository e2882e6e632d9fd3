//! Single chokepoint for outbound HTTP requests.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every backend call goes through this module: it resolves the configured
//! base URL, attaches the bearer token from the session store, and normalizes
//! bodies and failures into one error shape. Feature pages never touch
//! `gloo-net` directly.
//!
//! ERROR HANDLING
//! ==============
//! Failures surface as `RequestError { status, message }`; transport errors
//! (no response at all) use status 0. Admin screens consume the strict
//! `Result` API; the portal uses the `PortalResult` wrapper, which never
//! raises and flags backend capabilities that have not shipped yet.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Fallback API origin when the build provides none.
pub const DEFAULT_API_BASE: &str = "http://localhost:4000";

/// Backend origin, resolved once per build from `PDPL_API_BASE`.
pub fn api_base() -> &'static str {
    option_env!("PDPL_API_BASE").unwrap_or(DEFAULT_API_BASE)
}

/// Join a path onto the configured API base.
pub fn endpoint(path: &str) -> String {
    format!("{}{path}", api_base().trim_end_matches('/'))
}

/// Normalized failure for any backend request.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RequestError {
    /// HTTP status of the failed response, or 0 when no response arrived.
    pub status: u16,
    /// Human-readable message extracted from the response body.
    pub message: String,
}

impl RequestError {
    /// A failure with no HTTP response (network down, CORS, DNS).
    pub fn transport(message: impl Into<String>) -> Self {
        Self { status: 0, message: message.into() }
    }
}

/// `Authorization` header value for a stored token; `None` when the token is
/// empty so the header is omitted entirely rather than sent as `Bearer `.
pub fn bearer_header(token: &str) -> Option<String> {
    if token.is_empty() {
        None
    } else {
        Some(format!("Bearer {token}"))
    }
}

/// Whether a status code counts as success.
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Opportunistic body parse: empty text is `null`, valid JSON is itself, and
/// anything else is carried as a raw string value.
pub fn parse_body(text: &str) -> Value {
    if text.is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_owned()))
}

/// Extract the backend's message from a failure body (`error` first, then
/// `message`), falling back to a generic message when neither is present.
pub fn error_message(body: &Value) -> String {
    body.get("error")
        .and_then(Value::as_str)
        .or_else(|| body.get("message").and_then(Value::as_str))
        .unwrap_or("Request failed")
        .to_owned()
}

/// Classify a failure as a backend capability that has not shipped yet.
///
/// The substring heuristic mirrors the backend's current prose errors; it is
/// isolated here so a structured error code can replace it without touching
/// call sites.
pub fn is_missing_capability(status: u16, message: &str) -> bool {
    if status == 404 || status == 501 {
        return true;
    }
    let lower = message.to_ascii_lowercase();
    ["route not found", "endpoint missing", "not found"]
        .iter()
        .any(|needle| lower.contains(needle))
}

/// Decode a successful body into a typed value.
pub fn from_value<T: DeserializeOwned>(value: Value) -> Result<T, RequestError> {
    serde_json::from_value(value)
        .map_err(|err| RequestError::transport(format!("unexpected response shape: {err}")))
}

/// Uniform non-raising result used by the consumer-facing portal pages.
#[derive(Clone, Debug, PartialEq)]
pub struct PortalResult<T> {
    /// Whether the request succeeded and `data` is present.
    pub ok: bool,
    /// Decoded payload on success.
    pub data: Option<T>,
    /// The backend capability has not shipped yet; render a placeholder
    /// instead of an error.
    pub missing: bool,
    /// HTTP status, or 0 when no response arrived.
    pub status: u16,
    /// The underlying failure when `ok` is false.
    pub error: Option<RequestError>,
}

impl<T> PortalResult<T> {
    pub fn success(status: u16, data: T) -> Self {
        Self { ok: true, data: Some(data), missing: false, status, error: None }
    }

    pub fn failure(error: RequestError) -> Self {
        let missing = is_missing_capability(error.status, &error.message);
        Self { ok: false, data: None, missing, status: error.status, error: Some(error) }
    }
}

/// HTTP verbs the backend surface uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Patch,
}

#[cfg(feature = "hydrate")]
fn transport_error(err: &gloo_net::Error) -> RequestError {
    RequestError::transport(err.to_string())
}

/// Issue a request and return `(status, parsed body)`, failing on any
/// non-success status with the message extracted from the body.
#[cfg(feature = "hydrate")]
async fn send(verb: Verb, path: &str, body: Option<&Value>) -> Result<(u16, Value), RequestError> {
    use gloo_net::http::Request;

    let url = endpoint(path);
    let mut builder = match verb {
        Verb::Get => Request::get(&url),
        Verb::Post => Request::post(&url),
        Verb::Patch => Request::patch(&url),
    };
    if let Some(value) = bearer_header(&crate::state::session::token()) {
        builder = builder.header("Authorization", &value);
    }
    let request = match body {
        // `json` also sets `Content-Type: application/json`.
        Some(payload) => builder.json(payload).map_err(|e| transport_error(&e))?,
        None => builder
            .header("Content-Type", "application/json")
            .build()
            .map_err(|e| transport_error(&e))?,
    };
    let response = request.send().await.map_err(|e| transport_error(&e))?;
    finish(response).await
}

/// Issue a multipart request. No `Content-Type` is set here: the browser
/// supplies the multipart boundary itself.
#[cfg(feature = "hydrate")]
async fn send_form(path: &str, form: &web_sys::FormData) -> Result<(u16, Value), RequestError> {
    use gloo_net::http::Request;

    let url = endpoint(path);
    let mut builder = Request::post(&url);
    if let Some(value) = bearer_header(&crate::state::session::token()) {
        builder = builder.header("Authorization", &value);
    }
    let request = builder.body(form.clone()).map_err(|e| transport_error(&e))?;
    let response = request.send().await.map_err(|e| transport_error(&e))?;
    finish(response).await
}

#[cfg(feature = "hydrate")]
async fn finish(response: gloo_net::http::Response) -> Result<(u16, Value), RequestError> {
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    let parsed = parse_body(&text);
    if is_success(status) {
        Ok((status, parsed))
    } else {
        Err(RequestError { status, message: error_message(&parsed) })
    }
}

/// GET a JSON value from the backend.
pub async fn get_json(path: &str) -> Result<Value, RequestError> {
    #[cfg(feature = "hydrate")]
    {
        send(Verb::Get, path, None).await.map(|(_, value)| value)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(RequestError::transport("not available on server"))
    }
}

/// POST a JSON payload to the backend.
pub async fn post_json(path: &str, payload: &Value) -> Result<Value, RequestError> {
    #[cfg(feature = "hydrate")]
    {
        send(Verb::Post, path, Some(payload)).await.map(|(_, value)| value)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, payload);
        Err(RequestError::transport("not available on server"))
    }
}

/// PATCH a JSON payload to the backend.
pub async fn patch_json(path: &str, payload: &Value) -> Result<Value, RequestError> {
    #[cfg(feature = "hydrate")]
    {
        send(Verb::Patch, path, Some(payload)).await.map(|(_, value)| value)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, payload);
        Err(RequestError::transport("not available on server"))
    }
}

/// Portal variant of [`get_json`]: never raises.
pub async fn portal_get<T: DeserializeOwned>(path: &str) -> PortalResult<T> {
    #[cfg(feature = "hydrate")]
    {
        match send(Verb::Get, path, None).await {
            Ok((status, value)) => match from_value(value) {
                Ok(data) => PortalResult::success(status, data),
                Err(err) => PortalResult::failure(err),
            },
            Err(err) => PortalResult::failure(err),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        PortalResult::failure(RequestError::transport("not available on server"))
    }
}

/// Portal variant of [`post_json`]: never raises.
pub async fn portal_post<T: DeserializeOwned>(path: &str, payload: &Value) -> PortalResult<T> {
    #[cfg(feature = "hydrate")]
    {
        match send(Verb::Post, path, Some(payload)).await {
            Ok((status, value)) => match from_value(value) {
                Ok(data) => PortalResult::success(status, data),
                Err(err) => PortalResult::failure(err),
            },
            Err(err) => PortalResult::failure(err),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, payload);
        PortalResult::failure(RequestError::transport("not available on server"))
    }
}

/// Portal multipart upload; the body's content type is left to the browser.
#[cfg(feature = "hydrate")]
pub async fn portal_upload(path: &str, form: &web_sys::FormData) -> PortalResult<Value> {
    match send_form(path, form).await {
        Ok((status, value)) => PortalResult::success(status, value),
        Err(err) => PortalResult::failure(err),
    }
}
