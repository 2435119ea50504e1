//! Item Store
//!
//! Client-side cache of the server's item collection, with one async
//! operation per user action. Uses Leptos reactive_stores for
//! fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api;
use crate::models::{CreateItemDto, Item, UpdateItemDto};

const FETCH_FAILED: &str = "Failed to load items";
const CREATE_FAILED: &str = "Failed to create item";
const UPDATE_FAILED: &str = "Failed to update item";
const DELETE_FAILED: &str = "Failed to delete item";

/// Store state: the cached item list in server order, one shared loading
/// flag across all operations, and the last failure message.
#[derive(Clone, Debug, Default, Store)]
pub struct ItemsState {
    /// Items in server response order; never re-sorted on mutation
    pub items: Vec<Item>,
    /// True whenever any request is in flight
    pub loading: bool,
    /// Last failure message, cleared when a new operation starts
    pub error: Option<String>,
}

impl ItemsState {
    pub fn new() -> Self {
        Self::default()
    }

    fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    fn fail(&mut self, message: &str) {
        self.loading = false;
        self.error = Some(message.to_string());
    }

    fn finish_fetch(&mut self, items: Vec<Item>) {
        self.loading = false;
        self.items = items;
    }

    fn finish_create(&mut self, item: Item) {
        self.loading = false;
        self.items.push(item);
    }

    /// Merge the fields present in the DTO into the matching item; other
    /// fields and other items stay untouched.
    fn finish_update(&mut self, id: &str, dto: &UpdateItemDto) {
        self.loading = false;
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            if let Some(name) = &dto.name {
                item.name = name.clone();
            }
            if let Some(description) = &dto.description {
                item.description = Some(description.clone());
            }
            if let Some(price) = dto.price {
                item.price = price;
            }
            if let Some(count) = dto.count {
                item.count = count;
            }
        }
    }

    fn finish_delete(&mut self, id: &str) {
        self.loading = false;
        self.items.retain(|item| item.id != id);
    }

    fn clear_error(&mut self) {
        self.error = None;
    }
}

/// Type alias for the store
pub type ItemsStore = Store<ItemsState>;

/// Get the item store from context
pub fn use_items_store() -> ItemsStore {
    expect_context::<ItemsStore>()
}

// ========================
// Store Operations
// ========================

/// Replace the whole list with the server's. Returns the surfaced message
/// on failure so callers can toast it.
pub async fn fetch_items(store: ItemsStore) -> Result<(), String> {
    store.update(|state| state.begin());
    match api::get_items().await {
        Ok(items) => {
            store.update(|state| state.finish_fetch(items));
            Ok(())
        }
        Err(err) => Err(reject(store, FETCH_FAILED, err)),
    }
}

/// Create on the server, then append the new item locally. The category
/// name stays empty until the next full fetch; the created time is
/// stamped client-side since the response only carries the id.
pub async fn create_item(store: ItemsStore, dto: CreateItemDto) -> Result<(), String> {
    store.update(|state| state.begin());
    match api::create_item(&dto).await {
        Ok(id) => {
            let item = Item {
                id,
                name: dto.name,
                description: dto.description,
                price: dto.price,
                count: dto.count,
                category_name: String::new(),
                created_time: now_iso(),
                updated_time: None,
            };
            store.update(|state| state.finish_create(item));
            Ok(())
        }
        Err(err) => Err(reject(store, CREATE_FAILED, err)),
    }
}

/// Update on the server, then merge the partial DTO into the local item.
pub async fn update_item(store: ItemsStore, id: String, dto: UpdateItemDto) -> Result<(), String> {
    store.update(|state| state.begin());
    match api::update_item(&id, &dto).await {
        Ok(()) => {
            store.update(|state| state.finish_update(&id, &dto));
            Ok(())
        }
        Err(err) => Err(reject(store, UPDATE_FAILED, err)),
    }
}

/// Delete on the server, then drop the local item.
pub async fn delete_item(store: ItemsStore, id: String) -> Result<(), String> {
    store.update(|state| state.begin());
    match api::delete_item(&id).await {
        Ok(()) => {
            store.update(|state| state.finish_delete(&id));
            Ok(())
        }
        Err(err) => Err(reject(store, DELETE_FAILED, err)),
    }
}

/// Clear the last failure message without touching the list.
pub fn clear_error(store: ItemsStore) {
    store.update(|state| state.clear_error());
}

/// Record the rejection: list unchanged, loading off, generic message in
/// the store. The underlying cause only goes to the console.
fn reject(store: ItemsStore, message: &str, err: api::ApiError) -> String {
    web_sys::console::error_1(&format!("[store] {message}: {err}").into());
    store.update(|state| state.fail(message));
    message.to_string()
}

fn now_iso() -> String {
    js_sys::Date::new_0().to_iso_string().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, name: &str, price: f64, count: u32) -> Item {
        Item {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
            price,
            count,
            category_name: String::new(),
            created_time: "2024-01-15T10:30:00Z".to_string(),
            updated_time: None,
        }
    }

    #[test]
    fn begin_sets_loading_and_clears_error() {
        let mut state = ItemsState::new();
        state.error = Some("stale".to_string());
        state.begin();
        assert!(state.loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn finish_fetch_replaces_the_list_in_server_order() {
        let mut state = ItemsState::new();
        state.items = vec![item("old", "Old", 1.0, 1)];
        state.loading = true;
        state.finish_fetch(vec![item("2", "B", 1.0, 1), item("1", "A", 2.0, 1)]);
        assert!(!state.loading);
        assert_eq!(state.items.len(), 2);
        assert_eq!(state.items[0].id, "2");
        assert_eq!(state.items[1].id, "1");
    }

    #[test]
    fn finish_create_appends_once_with_empty_category() {
        let mut state = ItemsState::new();
        state.items = vec![item("1", "Widget", 9.99, 3)];
        state.loading = true;
        let created = Item {
            category_name: String::new(),
            ..item("42", "Gadget", 5.0, 2)
        };
        state.finish_create(created);
        assert!(!state.loading);
        assert_eq!(state.items.len(), 2);
        let added = &state.items[1];
        assert_eq!(added.id, "42");
        assert_eq!(added.name, "Gadget");
        assert_eq!(added.category_name, "");
    }

    #[test]
    fn finish_update_merges_only_present_fields() {
        let mut state = ItemsState::new();
        state.items = vec![item("1", "Widget", 9.99, 3), item("2", "Other", 1.0, 1)];
        let dto = UpdateItemDto {
            price: Some(12.5),
            ..Default::default()
        };
        state.finish_update("1", &dto);
        assert_eq!(state.items[0].price, 12.5);
        assert_eq!(state.items[0].name, "Widget");
        assert_eq!(state.items[0].count, 3);
        assert_eq!(state.items[1], item("2", "Other", 1.0, 1));
    }

    #[test]
    fn finish_update_on_an_absent_id_changes_nothing() {
        let mut state = ItemsState::new();
        state.items = vec![item("1", "Widget", 9.99, 3)];
        let dto = UpdateItemDto {
            name: Some("Renamed".to_string()),
            ..Default::default()
        };
        state.finish_update("missing", &dto);
        assert_eq!(state.items[0].name, "Widget");
    }

    #[test]
    fn finish_delete_removes_only_the_matching_item() {
        let mut state = ItemsState::new();
        state.items = vec![item("1", "A", 1.0, 1), item("2", "B", 2.0, 2)];
        state.finish_delete("1");
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].id, "2");
    }

    #[test]
    fn fail_keeps_the_list_and_sets_the_message() {
        let mut state = ItemsState::new();
        state.items = vec![item("1", "Widget", 9.99, 3)];
        state.loading = true;
        state.fail(DELETE_FAILED);
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Failed to delete item"));
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].id, "1");
    }

    #[test]
    fn clear_error_resets_only_the_message() {
        let mut state = ItemsState::new();
        state.items = vec![item("1", "Widget", 9.99, 3)];
        state.error = Some("Failed to load items".to_string());
        state.clear_error();
        assert!(state.error.is_none());
        assert_eq!(state.items.len(), 1);
    }
}
