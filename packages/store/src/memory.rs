use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::StoreError;
use crate::storage::KeyValueStore;

/// In-memory KeyValueStore for testing and as a fallback when no platform
/// storage exists. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .lock()
            .map_err(|_| StoreError::Poisoned)?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{read_json, write_json};

    #[test]
    fn test_get_set_overwrite() {
        let store = MemoryStore::new();
        assert!(store.get("users").is_none());

        store.set("users", "[]").unwrap();
        assert_eq!(store.get("users").as_deref(), Some("[]"));

        store.set("users", "[{}]").unwrap();
        assert_eq!(store.get("users").as_deref(), Some("[{}]"));
        assert!(store.get("visibleColumns").is_none());
    }

    #[test]
    fn test_clones_share_entries() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set("k", "v").unwrap();
        assert_eq!(other.get("k").as_deref(), Some("v"));
    }

    #[test]
    fn test_json_helpers() {
        let store = MemoryStore::new();
        write_json(&store, "numbers", &vec![1, 2, 3]).unwrap();
        assert_eq!(read_json::<Vec<u32>>(&store, "numbers"), Some(vec![1, 2, 3]));

        store.set("numbers", "{not json").unwrap();
        assert_eq!(read_json::<Vec<u32>>(&store, "numbers"), None);
        assert_eq!(read_json::<Vec<u32>>(&store, "missing"), None);
    }
}
