use super::PreferenceStore;
use crate::error::{PreferenceError, PreferenceResult};
use std::collections::HashMap;
use std::sync::RwLock;

/// Preferences kept in memory for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with one value already written.
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut values) = store.values.write() {
            values.insert(key.to_string(), value.to_string());
        }
        store
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> PreferenceResult<Option<String>> {
        let values = self.values.read().map_err(|_| PreferenceError::Unavailable)?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> PreferenceResult<()> {
        let mut values = self
            .values
            .write()
            .map_err(|_| PreferenceError::Unavailable)?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing() {
        let store = MemoryPreferenceStore::new();
        assert_eq!(store.get("darkMode").unwrap(), None);
    }

    #[test]
    fn test_set_then_get() {
        let store = MemoryPreferenceStore::new();
        store.set("darkMode", "true").unwrap();
        assert_eq!(store.get("darkMode").unwrap().as_deref(), Some("true"));

        store.set("darkMode", "false").unwrap();
        assert_eq!(store.get("darkMode").unwrap().as_deref(), Some("false"));
    }

    #[test]
    fn test_with_value() {
        let store = MemoryPreferenceStore::with_value("darkMode", "true");
        assert_eq!(store.get("darkMode").unwrap().as_deref(), Some("true"));
    }
}
