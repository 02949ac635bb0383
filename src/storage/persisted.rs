//! Persisted values
//!
//! Fire-and-forget access to a `KeyValueStorage`. Losing persistence is not
//! fatal here, so storage failures are logged and swallowed.

use std::sync::Arc;

use super::KeyValueStorage;

/// Storage port with failures degraded to defaults
#[derive(Clone)]
pub struct PersistedValue {
    storage: Arc<dyn KeyValueStorage>,
}

impl PersistedValue {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// Read `key`, falling back to `default`
    ///
    /// The default is used when the key is absent, when the stored value is
    /// empty, or when storage cannot be read.
    pub fn get(&self, key: &str, default: &str) -> String {
        match self.storage.get(key) {
            Ok(Some(value)) if !value.is_empty() => value,
            Ok(_) => default.to_string(),
            Err(e) => {
                tracing::warn!(key, error = %e, "Storage unavailable, using default");
                default.to_string()
            }
        }
    }

    /// Write `value` under `key`; failures are logged and ignored
    pub fn set(&self, key: &str, value: &str) {
        if let Err(e) = self.storage.set(key, value) {
            tracing::warn!(key, error = %e, "Failed to persist value");
        }
    }
}

/// The user's search term, written back to storage on every change
#[derive(Clone)]
pub struct SearchTerm {
    persisted: PersistedValue,
    key: String,
    value: String,
}

impl SearchTerm {
    /// Load the term stored under `key`, or `default` if there is none
    pub fn load(persisted: PersistedValue, key: impl Into<String>, default: &str) -> Self {
        let key = key.into();
        let value = persisted.get(&key, default);
        tracing::debug!(key = %key, value = %value, "Loaded search term");
        Self {
            persisted,
            key,
            value,
        }
    }

    /// Current term
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Storage key the term lives under
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Replace the term and persist it
    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.persisted.set(&self.key, &self.value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Result, StoriesError};
    use crate::storage::MemoryStorage;

    struct BrokenStorage;

    impl KeyValueStorage for BrokenStorage {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(StoriesError::Storage("disk on fire".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(StoriesError::Storage("disk on fire".to_string()))
        }
    }

    #[test]
    fn get_returns_default_when_absent() {
        let persisted = PersistedValue::new(Arc::new(MemoryStorage::new()));
        assert_eq!(persisted.get("search", "React"), "React");
    }

    #[test]
    fn get_returns_default_for_empty_value() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set("search", "").unwrap();
        let persisted = PersistedValue::new(storage);
        assert_eq!(persisted.get("search", "React"), "React");
    }

    #[test]
    fn broken_storage_degrades_silently() {
        let persisted = PersistedValue::new(Arc::new(BrokenStorage));
        persisted.set("search", "Rust");
        assert_eq!(persisted.get("search", "React"), "React");
    }

    #[test]
    fn search_term_writes_through() {
        let storage = Arc::new(MemoryStorage::new());
        let mut term = SearchTerm::load(PersistedValue::new(storage.clone()), "search", "React");
        assert_eq!(term.value(), "React");

        term.set("Redux");
        assert_eq!(term.value(), "Redux");
        assert_eq!(storage.get("search").unwrap(), Some("Redux".to_string()));
    }
}
