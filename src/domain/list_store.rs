//! Ordered in-memory item list.

use tracing::debug;

/// Ordered, mutable collection of items keyed by a caller-supplied function.
///
/// Insertion order is display order. Keys are expected to be unique; no
/// deduplication is performed. Every effective mutation bumps the revision so
/// views know to re-render.
#[derive(Debug, Clone)]
pub struct ListStore<T, K> {
    items: Vec<T>,
    key: fn(&T) -> K,
    revision: u64,
}

impl<T, K: PartialEq> ListStore<T, K> {
    /// Seeds a store with `items` in the given order.
    pub fn initialize(items: impl IntoIterator<Item = T>, key: fn(&T) -> K) -> Self {
        Self {
            items: items.into_iter().collect(),
            key,
            revision: 0,
        }
    }

    /// Appends an item at the end.
    pub fn append(&mut self, item: T) {
        self.items.push(item);
        self.revision += 1;
    }

    /// Removes the first item whose key matches `target`.
    ///
    /// Missing items are ignored, since a confirmation may race with an item
    /// that is already gone. Returns whether anything was removed.
    pub fn remove(&mut self, target: &T) -> bool {
        let key = (self.key)(target);
        self.remove_key(&key)
    }

    /// Removes the first item with the given key. See [`ListStore::remove`].
    pub fn remove_key(&mut self, key: &K) -> bool {
        let Some(index) = self.items.iter().position(|item| (self.key)(item) == *key) else {
            debug!("Remove ignored, item not present");
            return false;
        };

        self.items.remove(index);
        self.revision += 1;
        debug!(index, remaining = self.items.len(), "Item removed");
        true
    }

    /// Returns true if an item with `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.items.iter().any(|item| (self.key)(item) == *key)
    }

    /// Computes the key of an item.
    #[must_use]
    pub fn key_of(&self, item: &T) -> K {
        (self.key)(item)
    }

    /// Items in display order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if no items remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Mutation counter.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn store(items: &[&str]) -> ListStore<String, String> {
        ListStore::initialize(items.iter().map(|s| (*s).to_string()), String::clone)
    }

    fn contents(store: &ListStore<String, String>) -> Vec<&str> {
        store.items().iter().map(String::as_str).collect()
    }

    #[test]
    fn test_initialize_preserves_order() {
        let store = store(&["Austin, TX", "Brunswick, ME", "Washington, DC"]);

        assert_eq!(
            contents(&store),
            vec!["Austin, TX", "Brunswick, ME", "Washington, DC"]
        );
        assert_eq!(store.revision(), 0);
    }

    #[test_case(&["B"], &["A", "C", "D"] ; "middle")]
    #[test_case(&["A", "D"], &["B", "C"] ; "both_ends")]
    #[test_case(&["C", "A", "B", "D"], &[] ; "everything")]
    fn test_remove_keeps_relative_order(removed: &[&str], expected: &[&str]) {
        let mut store = store(&["A", "B", "C", "D"]);

        for key in removed {
            assert!(store.remove(&(*key).to_string()));
        }

        assert_eq!(contents(&store), expected);
        assert_eq!(store.revision(), removed.len() as u64);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut store = store(&["A", "B"]);

        assert!(!store.remove(&"Z".to_string()));
        assert_eq!(contents(&store), vec!["A", "B"]);
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_remove_twice_is_idempotent() {
        let mut store = store(&["A", "B", "C"]);

        assert!(store.remove(&"B".to_string()));
        assert!(!store.remove(&"B".to_string()));
        assert_eq!(contents(&store), vec!["A", "C"]);
    }

    #[test]
    fn test_custom_key_function() {
        #[derive(Debug, Clone)]
        struct City {
            name: &'static str,
            population: u32,
        }

        let mut store = ListStore::initialize(
            [
                City {
                    name: "Austin",
                    population: 961_855,
                },
                City {
                    name: "Poolesville",
                    population: 5_742,
                },
            ],
            |city: &City| city.name,
        );

        let stale = City {
            name: "Austin",
            population: 0,
        };
        assert!(store.remove(&stale));
        assert_eq!(store.len(), 1);
        assert_eq!(store.items()[0].population, 5_742);
        assert!(!store.contains_key(&"Austin"));
    }

    #[test]
    fn test_append_bumps_revision() {
        let mut store = store(&[]);
        assert!(store.is_empty());

        store.append("A".to_string());
        assert_eq!(store.revision(), 1);
        assert!(store.contains_key(&"A".to_string()));
    }
}
