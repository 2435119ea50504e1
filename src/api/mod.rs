//! REST API Bindings
//!
//! Async operations against the inventory endpoints, organized as
//! build request → fetch → parse response.

mod client;
mod error;
mod http;

pub use client::ItemsApi;
pub use error::ApiError;
pub use http::{ApiRequest, ApiResponse, Method};

use wasm_bindgen::JsCast;

use crate::models::{CreateItemDto, Item, UpdateItemDto};

/// File name used for the spreadsheet export.
const EXPORT_FILE_NAME: &str = "Items.xlsx";

/// `GET /api/Items` — the full item collection in server order.
pub async fn get_items() -> Result<Vec<Item>, ApiError> {
    let api = ItemsApi::default();
    let response = http::execute(api.build_get_items()).await?;
    api.parse_get_items(response)
}

/// `POST /api/Items` — returns the server-assigned id.
pub async fn create_item(dto: &CreateItemDto) -> Result<String, ApiError> {
    let api = ItemsApi::default();
    let response = http::execute(api.build_create_item(dto)?).await?;
    api.parse_create_item(response)
}

/// `PUT /api/Items/{id}` — partial update, success/failure only.
pub async fn update_item(id: &str, dto: &UpdateItemDto) -> Result<(), ApiError> {
    let api = ItemsApi::default();
    let response = http::execute(api.build_update_item(id, dto)?).await?;
    api.parse_update_item(response)
}

/// `DELETE /api/Items/{id}`.
pub async fn delete_item(id: &str) -> Result<(), ApiError> {
    let api = ItemsApi::default();
    let response = http::execute(api.build_delete_item(id)).await?;
    api.parse_delete_item(response)
}

/// `GET /api/Items/download-excel` — fetches the binary spreadsheet and
/// triggers a browser download. Leaves the item store untouched.
pub async fn download_excel() -> Result<(), ApiError> {
    let api = ItemsApi::default();
    let blob = http::execute_binary(api.build_download_excel()).await?;
    save_blob(&blob, EXPORT_FILE_NAME)
}

/// Save a blob client-side through a synthesized anchor click.
fn save_blob(blob: &web_sys::Blob, file_name: &str) -> Result<(), ApiError> {
    let url = web_sys::Url::create_object_url_with_blob(blob).map_err(http::js_error)?;
    let window = web_sys::window().ok_or_else(|| ApiError::Transport("window unavailable".to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| ApiError::Transport("document unavailable".to_string()))?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(http::js_error)?
        .dyn_into()
        .map_err(|_| ApiError::Transport("anchor creation failed".to_string()))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);

    let body = document
        .body()
        .ok_or_else(|| ApiError::Transport("document body unavailable".to_string()))?;
    body.append_child(&anchor).map_err(http::js_error)?;
    anchor.click();
    anchor.remove();
    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}
