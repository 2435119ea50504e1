//! Frontend Models
//!
//! Wire types matching the server's JSON (camelCase fields).

use serde::{Deserialize, Serialize};

/// Inventory item as returned by the server.
///
/// `id` is assigned by the server and immutable; `category_name` is
/// display-only and stays empty on locally created items until the next
/// full fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    pub count: u32,
    #[serde(default)]
    pub category_name: String,
    pub created_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_time: Option<String>,
}

/// Payload for `POST /api/Items`.
///
/// `category_id` is write-only input; the client never copies it into the
/// item's category name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemDto {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    pub count: u32,
    pub category_id: String,
}

/// Payload for `PUT /api/Items/{id}`. Only the fields present in the JSON
/// are applied; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_deserializes_from_server_json() {
        let json = r#"{
            "id": "1",
            "name": "Widget",
            "description": "A widget",
            "price": 9.99,
            "count": 3,
            "categoryName": "Tools",
            "createdTime": "2024-01-15T10:30:00Z",
            "updatedTime": "2024-02-01T08:00:00Z"
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, "1");
        assert_eq!(item.name, "Widget");
        assert_eq!(item.description.as_deref(), Some("A widget"));
        assert_eq!(item.price, 9.99);
        assert_eq!(item.count, 3);
        assert_eq!(item.category_name, "Tools");
        assert_eq!(item.created_time, "2024-01-15T10:30:00Z");
        assert_eq!(item.updated_time.as_deref(), Some("2024-02-01T08:00:00Z"));
    }

    #[test]
    fn item_tolerates_missing_optional_fields() {
        let json = r#"{"id":"2","name":"Gadget","price":5.0,"count":2,"createdTime":"2024-01-15T10:30:00Z"}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert!(item.description.is_none());
        assert_eq!(item.category_name, "");
        assert!(item.updated_time.is_none());
    }

    #[test]
    fn create_dto_serializes_camel_case_and_skips_empty_description() {
        let dto = CreateItemDto {
            name: "Gadget".to_string(),
            description: None,
            price: 5.0,
            count: 2,
            category_id: "c1".to_string(),
        };
        let value: serde_json::Value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["name"], "Gadget");
        assert_eq!(value["categoryId"], "c1");
        assert!(value.get("description").is_none());
    }

    #[test]
    fn update_dto_serializes_only_present_fields() {
        let dto = UpdateItemDto {
            price: Some(12.5),
            ..Default::default()
        };
        let value: serde_json::Value = serde_json::to_value(&dto).unwrap();
        let fields = value.as_object().unwrap();
        assert_eq!(fields.len(), 1);
        assert_eq!(value["price"], 12.5);
    }
}
