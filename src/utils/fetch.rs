//! Low-level fetch machinery with timeout support.
//!
//! Wraps the browser Fetch API for the typed API client: request
//! construction, timeout racing via `Promise.race`, and response body
//! readers. Every request is attempted exactly once; timeout is the only
//! locally-enforced policy.

use js_sys::{Array, Promise};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, Request, RequestInit, RequestMode, Response};

use crate::core::error::FetchError;

// =============================================================================
// Promise Racing
// =============================================================================

/// Result of a promise race with timeout.
#[derive(Debug)]
pub enum RaceResult {
    /// The promise completed before timeout.
    Completed(JsValue),
    /// Timeout occurred before the promise completed.
    TimedOut,
    /// Promise rejected with an error.
    Error(String),
}

/// Race a promise against a timeout.
///
/// Implements timeout behavior on any JavaScript Promise using
/// `Promise.race`: the timeout promise resolves to `undefined`, so an
/// `undefined` winner means the deadline fired first.
pub async fn race_with_timeout(promise: Promise, timeout_ms: i32) -> RaceResult {
    let Some(window) = web_sys::window() else {
        return RaceResult::Error("Window not available".to_string());
    };

    let timeout_promise = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    let race_array = Array::new();
    race_array.push(&promise);
    race_array.push(&timeout_promise);

    match JsFuture::from(Promise::race(&race_array)).await {
        Ok(result) => {
            if result.is_undefined() {
                RaceResult::TimedOut
            } else {
                RaceResult::Completed(result)
            }
        }
        Err(e) => RaceResult::Error(e.as_string().unwrap_or_else(|| "Unknown error".to_string())),
    }
}

// =============================================================================
// Requests
// =============================================================================

/// Issue an HTTP request and return the raw [`Response`].
///
/// The response status is NOT checked here; use [`ensure_ok`] when a caller
/// treats non-2xx as failure. A JSON body, when given, is sent with the
/// matching content type.
pub async fn http_request(
    method: &str,
    url: &str,
    json_body: Option<&str>,
    timeout_ms: i32,
) -> Result<Response, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = json_body {
        opts.set_body(&JsValue::from_str(body));
    }

    let request =
        Request::new_with_str_and_init(url, &opts).map_err(|_| FetchError::RequestCreationFailed)?;
    if json_body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|_| FetchError::RequestCreationFailed)?;
    }

    match race_with_timeout(window.fetch_with_request(&request), timeout_ms).await {
        RaceResult::TimedOut => Err(FetchError::Timeout),
        RaceResult::Error(msg) => Err(FetchError::NetworkError(msg)),
        RaceResult::Completed(result) => result
            .dyn_into::<Response>()
            .map_err(|_| FetchError::ResponseReadFailed),
    }
}

/// Fail on a non-2xx response, pass a successful one through unchanged.
pub fn ensure_ok(response: Response) -> Result<Response, FetchError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(FetchError::HttpError(response.status()))
    }
}

// =============================================================================
// Response Readers
// =============================================================================

/// Read the response body as text.
pub async fn read_text(response: &Response) -> Result<String, FetchError> {
    let promise = response.text().map_err(|_| FetchError::ResponseReadFailed)?;
    let text = JsFuture::from(promise)
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?;
    text.as_string().ok_or(FetchError::ResponseReadFailed)
}

/// Read and decode the response body as JSON.
pub async fn read_json<T: DeserializeOwned>(response: &Response) -> Result<T, FetchError> {
    let text = read_text(response).await?;
    serde_json::from_str(&text).map_err(|e| FetchError::DecodeError(e.to_string()))
}

/// Read the response body as a binary [`Blob`].
pub async fn read_blob(response: &Response) -> Result<Blob, FetchError> {
    let promise = response.blob().map_err(|_| FetchError::ResponseReadFailed)?;
    let blob = JsFuture::from(promise)
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?;
    blob.dyn_into::<Blob>()
        .map_err(|_| FetchError::ResponseReadFailed)
}
