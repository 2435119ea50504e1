//! Items API Client
//!
//! Stateless builder/parser pair for the inventory endpoints. Each
//! operation is split into a `build_*` method producing an `ApiRequest`
//! and a `parse_*` method consuming an `ApiResponse`; the transport in
//! between is the caller's concern, which keeps this logic deterministic.

use serde_json::Value;

use super::error::ApiError;
use super::http::{ApiRequest, ApiResponse, Method};
use crate::models::{CreateItemDto, Item, UpdateItemDto};

/// Stateless client for the items REST API.
///
/// Holds only a base URL; the empty default targets the current origin.
#[derive(Debug, Clone)]
pub struct ItemsApi {
    base_url: String,
}

impl ItemsApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_get_items(&self) -> ApiRequest {
        ApiRequest {
            method: Method::Get,
            url: format!("{}/api/Items", self.base_url),
            body: None,
        }
    }

    pub fn build_create_item(&self, dto: &CreateItemDto) -> Result<ApiRequest, ApiError> {
        let body = serde_json::to_string(dto).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(ApiRequest {
            method: Method::Post,
            url: format!("{}/api/Items", self.base_url),
            body: Some(body),
        })
    }

    pub fn build_update_item(&self, id: &str, dto: &UpdateItemDto) -> Result<ApiRequest, ApiError> {
        let body = serde_json::to_string(dto).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(ApiRequest {
            method: Method::Put,
            url: format!("{}/api/Items/{id}", self.base_url),
            body: Some(body),
        })
    }

    pub fn build_delete_item(&self, id: &str) -> ApiRequest {
        ApiRequest {
            method: Method::Delete,
            url: format!("{}/api/Items/{id}", self.base_url),
            body: None,
        }
    }

    pub fn build_download_excel(&self) -> ApiRequest {
        ApiRequest {
            method: Method::Get,
            url: format!("{}/api/Items/download-excel", self.base_url),
            body: None,
        }
    }

    pub fn parse_get_items(&self, response: ApiResponse) -> Result<Vec<Item>, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    /// Extract the server-assigned id from a creation response.
    pub fn parse_create_item(&self, response: ApiResponse) -> Result<String, ApiError> {
        check_status(&response)?;
        let value: Value =
            serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))?;
        id_from_value(&value)
            .ok_or_else(|| ApiError::Deserialization("create response carries no id".to_string()))
    }

    /// The response body is unused beyond success/failure.
    pub fn parse_update_item(&self, response: ApiResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    pub fn parse_delete_item(&self, response: ApiResponse) -> Result<(), ApiError> {
        check_status(&response)
    }
}

impl Default for ItemsApi {
    fn default() -> Self {
        Self::new("")
    }
}

/// Any non-2xx status fails the operation; no status-specific handling.
fn check_status(response: &ApiResponse) -> Result<(), ApiError> {
    if response.is_success() {
        Ok(())
    } else {
        Err(ApiError::Status { status: response.status })
    }
}

/// The server answers creation with either a bare id or an object holding
/// one; numeric ids are normalized to their decimal string form.
fn id_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(id) => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        Value::Object(fields) => fields.get("id").and_then(id_from_value),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> ItemsApi {
        ItemsApi::default()
    }

    fn response(status: u16, body: &str) -> ApiResponse {
        ApiResponse {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn build_get_items_targets_the_collection_path() {
        let req = api().build_get_items();
        assert_eq!(req.method, Method::Get);
        assert_eq!(req.url, "/api/Items");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_create_item_posts_the_dto_as_json() {
        let dto = CreateItemDto {
            name: "Gadget".to_string(),
            description: None,
            price: 5.0,
            count: 2,
            category_id: "c1".to_string(),
        };
        let req = api().build_create_item(&dto).unwrap();
        assert_eq!(req.method, Method::Post);
        assert_eq!(req.url, "/api/Items");
        let body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["name"], "Gadget");
        assert_eq!(body["categoryId"], "c1");
        assert!(body.get("description").is_none());
    }

    #[test]
    fn build_update_item_puts_partial_fields_to_the_item_path() {
        let dto = UpdateItemDto {
            price: Some(12.5),
            ..Default::default()
        };
        let req = api().build_update_item("1", &dto).unwrap();
        assert_eq!(req.method, Method::Put);
        assert_eq!(req.url, "/api/Items/1");
        let body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body.as_object().unwrap().len(), 1);
        assert_eq!(body["price"], 12.5);
    }

    #[test]
    fn build_delete_item_targets_the_item_path() {
        let req = api().build_delete_item("abc");
        assert_eq!(req.method, Method::Delete);
        assert_eq!(req.url, "/api/Items/abc");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_download_excel_targets_the_export_path() {
        let req = api().build_download_excel();
        assert_eq!(req.method, Method::Get);
        assert_eq!(req.url, "/api/Items/download-excel");
    }

    #[test]
    fn base_url_trailing_slash_is_stripped() {
        let api = ItemsApi::new("http://localhost:5173/");
        assert_eq!(api.build_get_items().url, "http://localhost:5173/api/Items");
    }

    #[test]
    fn parse_get_items_returns_items_in_server_order() {
        let body = r#"[
            {"id":"2","name":"B","price":1.0,"count":1,"categoryName":"","createdTime":"2024-01-02T00:00:00Z"},
            {"id":"1","name":"A","price":2.0,"count":1,"categoryName":"","createdTime":"2024-01-01T00:00:00Z"}
        ]"#;
        let items = api().parse_get_items(response(200, body)).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "2");
        assert_eq!(items[1].id, "1");
    }

    #[test]
    fn parse_get_items_fails_on_non_2xx() {
        let err = api().parse_get_items(response(500, "boom")).unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 500 }));
    }

    #[test]
    fn parse_get_items_fails_on_bad_json() {
        let err = api().parse_get_items(response(200, "not json")).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn parse_create_item_reads_an_object_id() {
        let id = api().parse_create_item(response(200, r#"{"id":"42"}"#)).unwrap();
        assert_eq!(id, "42");
    }

    #[test]
    fn parse_create_item_normalizes_numeric_ids() {
        let id = api().parse_create_item(response(201, r#"{"id":42}"#)).unwrap();
        assert_eq!(id, "42");
    }

    #[test]
    fn parse_create_item_accepts_a_bare_string_body() {
        let id = api().parse_create_item(response(200, r#""42""#)).unwrap();
        assert_eq!(id, "42");
    }

    #[test]
    fn parse_create_item_rejects_a_body_without_id() {
        let err = api().parse_create_item(response(200, r#"{"name":"x"}"#)).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn parse_delete_item_accepts_any_2xx() {
        assert!(api().parse_delete_item(response(200, "")).is_ok());
        assert!(api().parse_delete_item(response(204, "")).is_ok());
    }

    #[test]
    fn parse_delete_item_fails_on_404() {
        let err = api().parse_delete_item(response(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 404 }));
    }

    #[test]
    fn parse_update_item_ignores_the_body_on_success() {
        assert!(api().parse_update_item(response(200, r#"{"anything":true}"#)).is_ok());
    }
}
