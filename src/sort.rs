//! Column Sorting
//!
//! Display-only sorting over a snapshot of the item list. The stored
//! order (server response order) is never mutated.

use std::cmp::Ordering;

use crate::models::Item;

/// Sortable table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Name,
    Price,
    Count,
    Created,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// Sort a snapshot of items by the given column and order.
pub fn sort_items(items: &mut [Item], column: SortColumn, order: SortOrder) {
    items.sort_by(|a, b| {
        let ordering = compare(a, b, column);
        match order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
}

fn compare(a: &Item, b: &Item, column: SortColumn) -> Ordering {
    match column {
        SortColumn::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortColumn::Price => a.price.total_cmp(&b.price),
        SortColumn::Count => a.count.cmp(&b.count),
        SortColumn::Created => timestamp_millis(&a.created_time).cmp(&timestamp_millis(&b.created_time)),
    }
}

/// Millisecond timestamp of an ISO-8601 string; unparseable values sort first.
fn timestamp_millis(value: &str) -> i64 {
    chrono::DateTime::parse_from_rfc3339(value)
        .map(|parsed| parsed.timestamp_millis())
        .unwrap_or(i64::MIN)
}
