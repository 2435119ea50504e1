//! Inventory Frontend App
//!
//! Root composition: store and toast providers, layout shell, and the
//! modal-editing state.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ItemForm, ItemsTable, ToastStack};
use crate::context::ToastContext;
use crate::models::Item;
use crate::store::ItemsState;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(ItemsState::new());
    provide_context(store);

    let toasts = ToastContext::new(signal(Vec::new()), signal(0u32));
    provide_context(toasts);

    // Which item (if any) is being edited, and whether the modal is up
    let (modal_open, set_modal_open) = signal(false);
    let (editing_item, set_editing_item) = signal::<Option<Item>>(None);

    let on_add_new = Callback::new(move |_: ()| {
        set_editing_item.set(None);
        set_modal_open.set(true);
    });
    let on_edit = Callback::new(move |item: Item| {
        set_editing_item.set(Some(item));
        set_modal_open.set(true);
    });
    let on_close = Callback::new(move |_: ()| {
        set_modal_open.set(false);
        set_editing_item.set(None);
    });

    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Inventory"</h1>
            </header>
            <main class="app-content">
                <ItemsTable on_edit=on_edit on_add_new=on_add_new />
                <ItemForm open=modal_open editing=editing_item on_close=on_close />
            </main>
            <footer class="app-footer">{format!("Inventory ©{year}")}</footer>
        </div>
        <ToastStack />
    }
}
