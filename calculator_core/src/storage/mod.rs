//! Key-value persistence boundary.
//!
//! The calculator persists three string entries (history JSON, the pin-on-top
//! flag, the opacity). Backends only need string get/set/remove.

mod file;

pub use file::*;

use std::collections::BTreeMap;

use crate::Result;

/// String-keyed store the session writes to synchronously.
pub trait KeyValueStore {
    /// Read a value. `Ok(None)` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Erase a value. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-process store, used for tests and embedding without disk state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with existing entries.
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if a key has a value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("mgt2-opacity").unwrap(), None);

        store.set("mgt2-opacity", "0.8").unwrap();
        assert_eq!(store.get("mgt2-opacity").unwrap().as_deref(), Some("0.8"));

        store.set("mgt2-opacity", "0.5").unwrap();
        assert_eq!(store.get("mgt2-opacity").unwrap().as_deref(), Some("0.5"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_memory_store_remove() {
        let mut store = MemoryStore::with_entries([("mgt2-history", "[]")]);
        assert!(store.contains_key("mgt2-history"));

        store.remove("mgt2-history").unwrap();
        store.remove("mgt2-history").unwrap();
        assert!(store.is_empty());
    }
}
