use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::session::{KeyValueStore, StorageError};

/// In-memory KeyValueStore for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .map_err(|e| StorageError::Backend(e.to_string()))?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .map_err(|e| StorageError::Backend(e.to_string()))?
            .remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        assert!(store.get("accessToken").is_none());

        store.set("accessToken", "abc").unwrap();
        assert_eq!(store.get("accessToken").as_deref(), Some("abc"));

        store.set("accessToken", "def").unwrap();
        assert_eq!(store.get("accessToken").as_deref(), Some("def"));
        assert_eq!(store.len(), 1);

        store.remove("accessToken").unwrap();
        assert!(store.get("accessToken").is_none());

        // Removing a missing key is not an error
        store.remove("accessToken").unwrap();
    }

    #[test]
    fn test_clones_share_entries() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set("user", "{}").unwrap();
        assert_eq!(other.get("user").as_deref(), Some("{}"));
    }
}
