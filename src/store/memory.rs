//! In-memory store

use super::{KeyValueStore, StoreError};
use parking_lot::Mutex;
use rustc_hash::FxHashMap;

/// Mutex-guarded hash map; every operation is atomic
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<FxHashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn compare_and_swap(
        &self,
        key: &str,
        expected: Option<&str>,
        new: &str,
    ) -> Result<bool, StoreError> {
        let mut entries = self.entries.lock();
        if entries.get(key).map(String::as_str) != expected {
            return Ok(false);
        }
        entries.insert(key.to_string(), new.to_string());
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn get_and_set() {
        let store = MemoryStore::new();
        assert_eq!(store.get("A").unwrap(), None);

        store.set("A", "1").unwrap();
        assert_eq!(store.get("A").unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn cas_on_absent_key() {
        let store = MemoryStore::new();
        assert!(store.compare_and_swap("K", None, "1").unwrap());
        // Key now exists, so "absent" no longer matches
        assert!(!store.compare_and_swap("K", None, "2").unwrap());
        assert_eq!(store.get("K").unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn cas_requires_current_value() {
        let store = MemoryStore::new();
        store.set("K", "1").unwrap();

        assert!(!store.compare_and_swap("K", Some("0"), "2").unwrap());
        assert!(store.compare_and_swap("K", Some("1"), "2").unwrap());
        assert_eq!(store.get("K").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn concurrent_cas_increments_are_not_lost() {
        let store = Arc::new(MemoryStore::new());
        let threads = 8;
        let per_thread = 100;

        thread::scope(|scope| {
            for _ in 0..threads {
                let store = Arc::clone(&store);
                scope.spawn(move || {
                    for _ in 0..per_thread {
                        loop {
                            let current = store.get("N").unwrap();
                            let next = current
                                .as_deref()
                                .map_or(0, |n| n.parse::<u32>().unwrap())
                                + 1;
                            if store
                                .compare_and_swap("N", current.as_deref(), &next.to_string())
                                .unwrap()
                            {
                                break;
                            }
                        }
                    }
                });
            }
        });

        let total = threads * per_thread;
        assert_eq!(store.get("N").unwrap(), Some(total.to_string()));
    }
}
