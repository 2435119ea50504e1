//! HTTP Transport
//!
//! Requests and responses as plain data, plus the browser `fetch` executor.
//! Building requests and parsing responses never touch the network, so that
//! logic stays testable outside a browser.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use super::error::ApiError;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// A request described as plain data. Bodies are pre-serialized JSON; the
/// executor adds the `Content-Type` header whenever a body is present.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<String>,
}

/// A text response described as plain data.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub(crate) fn js_error(err: JsValue) -> ApiError {
    ApiError::Transport(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

async fn fetch(request: &ApiRequest) -> Result<Response, ApiError> {
    let init = RequestInit::new();
    init.set_method(request.method.as_str());
    if let Some(body) = &request.body {
        init.set_body(&JsValue::from_str(body));
    }

    let web_request = Request::new_with_str_and_init(&request.url, &init).map_err(js_error)?;
    if request.body.is_some() {
        web_request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(js_error)?;
    }

    let window = web_sys::window().ok_or_else(|| ApiError::Transport("window unavailable".to_string()))?;
    let response = JsFuture::from(window.fetch_with_request(&web_request))
        .await
        .map_err(js_error)?;
    response
        .dyn_into::<Response>()
        .map_err(|_| ApiError::Transport("fetch returned a non-Response value".to_string()))
}

/// Execute a request and collect the response body as text. Non-2xx
/// statuses are reported in the response, not as errors; parsing decides.
pub async fn execute(request: ApiRequest) -> Result<ApiResponse, ApiError> {
    let response = fetch(&request).await?;
    let status = response.status();
    let text = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    Ok(ApiResponse {
        status,
        body: text.as_string().unwrap_or_default(),
    })
}

/// Execute a request expecting a binary payload. Non-2xx statuses fail
/// without reading the body.
pub async fn execute_binary(request: ApiRequest) -> Result<web_sys::Blob, ApiError> {
    let response = fetch(&request).await?;
    let status = response.status();
    if !(200..300).contains(&status) {
        return Err(ApiError::Status { status });
    }
    let blob = JsFuture::from(response.blob().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    blob.dyn_into::<web_sys::Blob>()
        .map_err(|_| ApiError::Transport("fetch returned a non-Blob value".to_string()))
}
