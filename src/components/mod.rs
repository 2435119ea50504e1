//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod item_form;
mod items_table;
mod toast;

pub use delete_confirm_button::DeleteConfirmButton;
pub use item_form::ItemForm;
pub use items_table::ItemsTable;
pub use toast::ToastStack;
