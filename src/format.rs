//! Display formatting for enumerated records.

use crate::item::Item;

/// Renders an item as `"<id>: <path>"`.
pub fn format_item(item: &Item) -> String {
    format!("{}: {}", item.id, item.path)
}
