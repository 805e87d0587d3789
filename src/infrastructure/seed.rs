//! Built-in list contents.

use std::collections::HashSet;

use tracing::warn;

use super::config::ListConfig;

/// Cities shown when the configuration does not provide items.
pub const CITIES: &[&str] = &[
    "Austin, TX",
    "Brunswick, ME",
    "Tepoztlán, Mexico",
    "Poolesville, MD",
    "San Francisco, CA",
    "New York, NY",
    "Washington, DC",
    "Another City 1",
    "Another City 2",
    "Another City 3",
    "Another City 4",
    "Another City 5",
    "Another City 6",
    "Another City 7",
    "Another City 8",
    "Another City 9",
    "Another City 10",
    "Another City 12",
    "Another City 13",
    "Another City 14",
    "Another City 15",
];

/// Items to seed the list with on startup.
///
/// Duplicates are passed through unchanged; only a warning is logged since
/// rows are keyed by item text.
#[must_use]
pub fn seed_items(config: &ListConfig) -> Vec<String> {
    let items: Vec<String> = config.items.clone().unwrap_or_else(|| {
        CITIES.iter().map(|city| (*city).to_string()).collect()
    });

    let mut seen = HashSet::new();
    for item in &items {
        if !seen.insert(item.as_str()) {
            warn!(item = %item, "Duplicate list item, rows will share identity");
        }
    }

    items
}
