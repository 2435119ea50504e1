//! Items Table Component
//!
//! Sortable inventory table with toolbar, row actions, and Excel export.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::DeleteConfirmButton;
use crate::context::ToastContext;
use crate::models::Item;
use crate::sort::{sort_items, SortColumn, SortOrder};
use crate::store::{self, ItemsStateStoreFields};

#[component]
pub fn ItemsTable(
    #[prop(into)] on_edit: Callback<Item>,
    #[prop(into)] on_add_new: Callback<()>,
) -> impl IntoView {
    let store = store::use_items_store();
    let toasts = use_context::<ToastContext>().expect("ToastContext should be provided");

    let (sorting, set_sorting) = signal::<Option<(SortColumn, SortOrder)>>(None);

    // Load items on mount
    Effect::new(move |_| {
        spawn_local(async move {
            if let Err(message) = store::fetch_items(store).await {
                toasts.error(message);
            }
        });
    });

    // Sorting works on a snapshot; the stored order stays untouched
    let sorted_items = Memo::new(move |_| {
        let mut items = store.items().get();
        if let Some((column, order)) = sorting.get() {
            sort_items(&mut items, column, order);
        }
        items
    });

    let toggle_sort = move |column: SortColumn| {
        set_sorting.update(|current| {
            *current = match *current {
                Some((active, order)) if active == column => Some((column, order.toggled())),
                _ => Some((column, SortOrder::Ascending)),
            };
        });
    };

    let sort_indicator = move |column: SortColumn| match sorting.get() {
        Some((active, SortOrder::Ascending)) if active == column => " ▲",
        Some((active, SortOrder::Descending)) if active == column => " ▼",
        _ => "",
    };

    let export_excel = move |_| {
        spawn_local(async move {
            match api::download_excel().await {
                Ok(()) => toasts.success("Excel file downloaded successfully"),
                Err(err) => {
                    web_sys::console::error_1(&format!("[table] excel export failed: {err}").into());
                    toasts.error("Failed to download Excel file");
                }
            }
        });
    };

    view! {
        <div class="table-container">
            <div class="toolbar">
                <button class="btn primary" on:click=move |_| on_add_new.run(())>
                    "+ Add New"
                </button>
                <button class="btn" on:click=export_excel>
                    "Export Excel"
                </button>
            </div>

            <Show when=move || store.loading().get()>
                <div class="loading">"Loading..."</div>
            </Show>

            <table class="items-table">
                <thead>
                    <tr>
                        <th class="sortable" on:click=move |_| toggle_sort(SortColumn::Name)>
                            "Name" {move || sort_indicator(SortColumn::Name)}
                        </th>
                        <th>"Description"</th>
                        <th class="sortable numeric" on:click=move |_| toggle_sort(SortColumn::Price)>
                            "Price" {move || sort_indicator(SortColumn::Price)}
                        </th>
                        <th class="sortable numeric" on:click=move |_| toggle_sort(SortColumn::Count)>
                            "Count" {move || sort_indicator(SortColumn::Count)}
                        </th>
                        <th>"Category"</th>
                        <th class="sortable" on:click=move |_| toggle_sort(SortColumn::Created)>
                            "Created" {move || sort_indicator(SortColumn::Created)}
                        </th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || sorted_items.get().into_iter().map(|item| {
                        let edit_item = item.clone();
                        let delete_id = item.id.clone();
                        let on_confirm_delete = Callback::new(move |_: ()| {
                            let id = delete_id.clone();
                            spawn_local(async move {
                                match store::delete_item(store, id).await {
                                    Ok(()) => toasts.success("Item deleted successfully"),
                                    Err(message) => toasts.error(message),
                                }
                            });
                        });
                        view! {
                            <tr>
                                <td class="ellipsis" title=item.name.clone()>{item.name.clone()}</td>
                                <td class="ellipsis">{item.description.clone().unwrap_or_default()}</td>
                                <td class="numeric">{format_price(item.price)}</td>
                                <td class="numeric">{item.count}</td>
                                <td class="ellipsis">{item.category_name.clone()}</td>
                                <td>{format_date(&item.created_time)}</td>
                                <td class="actions">
                                    <button
                                        class="edit-btn"
                                        title="Edit"
                                        on:click=move |_| on_edit.run(edit_item.clone())
                                    >
                                        "✎"
                                    </button>
                                    <DeleteConfirmButton button_class="delete-btn" on_confirm=on_confirm_delete />
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}

/// Render a price as `$X.XX`.
fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

/// Render an ISO-8601 timestamp as a short date. Unparseable timestamps
/// fall back to the raw string.
fn format_date(timestamp: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(timestamp)
        .map(|parsed| parsed.format("%-m/%-d/%Y").to_string())
        .unwrap_or_else(|_| timestamp.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_renders_with_dollar_sign_and_two_decimals() {
        assert_eq!(format_price(9.99), "$9.99");
        assert_eq!(format_price(5.0), "$5.00");
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(1234.5), "$1234.50");
    }

    #[test]
    fn date_renders_short_without_leading_zeros() {
        assert_eq!(format_date("2024-01-15T10:30:00Z"), "1/15/2024");
        assert_eq!(format_date("2023-11-02T00:00:00+02:00"), "11/2/2023");
    }

    #[test]
    fn unparseable_date_falls_back_to_the_raw_string() {
        assert_eq!(format_date("not a date"), "not a date");
    }
}
