//! Shared Site Statistics Store
//!
//! The single synchronization point in the system: fetch tasks replace
//! entries concurrently while the render loop reads them. Every access
//! takes one short critical section; models are swapped wholesale, so a
//! reader never observes a partially written entry.
//!
//! The store is seeded with a placeholder per site before any fetch task
//! starts. Keys are never removed during a run, which keeps lookups by
//! list index total.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::model::DisplayModel;

/// Cloneable handle to the shared url → [`DisplayModel`] map.
#[derive(Clone, Default)]
pub struct StatsStore {
    inner: Arc<Mutex<HashMap<String, DisplayModel>>>,
}

impl StatsStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding a placeholder entry for every url.
    pub fn seeded<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let map = urls
            .into_iter()
            .map(|url| (url.into(), DisplayModel::placeholder()))
            .collect();
        Self {
            inner: Arc::new(Mutex::new(map)),
        }
    }

    /// Replace the entry for `url`.
    ///
    /// Callable from any number of tasks at once; the internal lock
    /// serializes writers.
    pub fn set(&self, url: &str, model: DisplayModel) {
        self.inner.lock().insert(url.to_string(), model);
    }

    /// Current model for `url`, or the placeholder if the key is absent.
    pub fn get(&self, url: &str) -> DisplayModel {
        self.inner.lock().get(url).cloned().unwrap_or_default()
    }

    /// All known urls, sorted ascending.
    pub fn sorted_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.inner.lock().keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Number of entries in the store.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// True when the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn model(description: &str, series: Vec<u64>) -> DisplayModel {
        DisplayModel {
            description: description.to_string(),
            series,
        }
    }

    #[test]
    fn test_get_missing_returns_placeholder() {
        let store = StatsStore::new();
        assert_eq!(store.get("a.com"), DisplayModel::placeholder());
    }

    #[test]
    fn test_seeded_has_every_key() {
        let store = StatsStore::seeded(["b.com", "a.com", "c.com"]);
        assert_eq!(store.len(), 3);
        for url in ["a.com", "b.com", "c.com"] {
            assert_eq!(store.get(url), DisplayModel::placeholder());
        }
    }

    #[test]
    fn test_set_replaces_wholesale() {
        let store = StatsStore::seeded(["a.com"]);
        store.set("a.com", model("first", vec![1]));
        store.set("a.com", model("second", vec![2]));
        assert_eq!(store.get("a.com"), model("second", vec![2]));
    }

    #[test]
    fn test_sorted_keys_ascending_no_duplicates() {
        let store = StatsStore::seeded(["c.com", "a.com", "b.com"]);
        store.set("b.com", model("again", vec![]));

        let keys = store.sorted_keys();
        assert_eq!(keys, vec!["a.com", "b.com", "c.com"]);
        assert!(keys.windows(2).all(|w| w[0] < w[1]));
    }

    /// Concurrent writers racing on one key must leave one writer's model
    /// intact, never a mixture of fields.
    #[test]
    fn test_concurrent_set_is_atomic() {
        let store = StatsStore::seeded(["a.com"]);
        let m1 = model("one", vec![1; 20]);
        let m2 = model("two", vec![2; 20]);

        let handles: Vec<_> = [m1.clone(), m2.clone()]
            .into_iter()
            .map(|m| {
                let store = store.clone();
                std::thread::spawn(move || {
                    for _ in 0..1000 {
                        store.set("a.com", m.clone());
                    }
                })
            })
            .collect();

        for _ in 0..1000 {
            let seen = store.get("a.com");
            assert!(
                seen == m1 || seen == m2 || seen == DisplayModel::placeholder(),
                "torn read: {seen:?}"
            );
        }

        for handle in handles {
            handle.join().unwrap();
        }

        let last = store.get("a.com");
        assert!(last == m1 || last == m2);
    }
}
