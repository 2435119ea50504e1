//! Item Form Component
//!
//! Modal form for creating and editing items. Create mode requires the
//! category id; edit mode omits it since it cannot be changed.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::context::ToastContext;
use crate::models::{CreateItemDto, Item, UpdateItemDto};
use crate::store;

/// Parsed and validated form fields.
#[derive(Debug)]
struct FormValues {
    name: String,
    description: Option<String>,
    price: f64,
    count: u32,
    category_id: String,
}

/// Client-side validation, run before anything is submitted.
fn validate(
    is_create: bool,
    name: &str,
    description: &str,
    price: &str,
    count: &str,
    category_id: &str,
) -> Result<FormValues, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Name is required".to_string());
    }

    let price: f64 = price
        .trim()
        .parse()
        .map_err(|_| "Price must be a number".to_string())?;
    if price < 0.0 {
        return Err("Price must be non-negative".to_string());
    }

    let count: u32 = count
        .trim()
        .parse()
        .map_err(|_| "Count must be a whole number".to_string())?;
    if count < 1 {
        return Err("Count must be at least 1".to_string());
    }

    let category_id = category_id.trim();
    if is_create && category_id.is_empty() {
        return Err("Category ID is required".to_string());
    }

    Ok(FormValues {
        name: name.to_string(),
        description: if description.trim().is_empty() {
            None
        } else {
            Some(description.to_string())
        },
        price,
        count,
        category_id: category_id.to_string(),
    })
}

/// Modal create/edit form bound to a single item.
#[component]
pub fn ItemForm(
    open: ReadSignal<bool>,
    editing: ReadSignal<Option<Item>>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let store = store::use_items_store();
    let toasts = use_context::<ToastContext>().expect("ToastContext should be provided");

    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (count, set_count) = signal(String::new());
    let (category_id, set_category_id) = signal(String::new());
    let (form_error, set_form_error) = signal::<Option<String>>(None);

    let reset_fields = move || {
        set_name.set(String::new());
        set_description.set(String::new());
        set_price.set(String::new());
        set_count.set(String::new());
        set_category_id.set(String::new());
        set_form_error.set(None);
    };

    // Prefill whenever the modal opens or the edited item changes
    Effect::new(move |_| {
        if !open.get() {
            return;
        }
        match editing.get() {
            Some(item) => {
                set_name.set(item.name.clone());
                set_description.set(item.description.clone().unwrap_or_default());
                set_price.set(item.price.to_string());
                set_count.set(item.count.to_string());
                set_category_id.set(String::new());
                set_form_error.set(None);
            }
            None => reset_fields(),
        }
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let editing_item = editing.get_untracked();
        let is_create = editing_item.is_none();

        let values = match validate(
            is_create,
            &name.get_untracked(),
            &description.get_untracked(),
            &price.get_untracked(),
            &count.get_untracked(),
            &category_id.get_untracked(),
        ) {
            Ok(values) => values,
            Err(message) => {
                set_form_error.set(Some(message));
                return;
            }
        };
        set_form_error.set(None);

        spawn_local(async move {
            let result = match &editing_item {
                None => {
                    let dto = CreateItemDto {
                        name: values.name,
                        description: values.description,
                        price: values.price,
                        count: values.count,
                        category_id: values.category_id,
                    };
                    store::create_item(store, dto).await
                }
                Some(item) => {
                    let dto = UpdateItemDto {
                        name: Some(values.name),
                        description: values.description,
                        price: Some(values.price),
                        count: Some(values.count),
                    };
                    store::update_item(store, item.id.clone(), dto).await
                }
            };

            match result {
                Ok(()) => {
                    toasts.success(if is_create { "Item created" } else { "Item updated" });
                    reset_fields();
                    on_close.run(());
                }
                // Modal stays open so the input isn't lost
                Err(_) => toasts.error("Operation failed"),
            }
        });
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| on_close.run(())></div>
            <div class="modal">
                <h2>{move || if editing.get().is_some() { "Edit Item" } else { "New Item" }}</h2>
                <form class="item-form" on:submit=submit>
                    <label>
                        "Name"
                        <input
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_name.set(input.value());
                            }
                        />
                    </label>
                    <label>
                        "Description"
                        <textarea
                            prop:value=move || description.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                                set_description.set(input.value());
                            }
                        ></textarea>
                    </label>
                    <label>
                        "Price"
                        <input
                            type="number"
                            min="0"
                            step="0.01"
                            prop:value=move || price.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_price.set(input.value());
                            }
                        />
                    </label>
                    <label>
                        "Count"
                        <input
                            type="number"
                            min="1"
                            step="1"
                            prop:value=move || count.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_count.set(input.value());
                            }
                        />
                    </label>
                    <Show when=move || editing.get().is_none()>
                        <label>
                            "Category ID"
                            <input
                                type="text"
                                prop:value=move || category_id.get()
                                on:input=move |ev| {
                                    let target = ev.target().unwrap();
                                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                    set_category_id.set(input.value());
                                }
                            />
                        </label>
                    </Show>
                    {move || form_error.get().map(|message| view! { <p class="form-error">{message}</p> })}
                    <div class="form-actions">
                        <button type="button" class="btn" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn primary">
                            {move || if editing.get().is_some() { "Update" } else { "Create" }}
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
