//! Typed store over a raw backend.
//!
//! The contracts here are the load/save rules every screen depends on:
//! `load` never fails and never panics, `save` never surfaces an error.
//! Collections that historically persisted more than one shape go
//! through [`Store::load_migrating`], which rewrites the canonical
//! shape once instead of branching on shape at every read site.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::backend::{MemoryBackend, StorageBackend};
use crate::error::StoreError;

/// Handle to the persisted key table, cheap to clone.
#[derive(Clone)]
pub struct Store {
    backend: Arc<dyn StorageBackend>,
}

impl Store {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Store over a fresh in-memory backend.
    pub fn memory() -> Self {
        Self::new(Arc::new(MemoryBackend::new()))
    }

    /// Load the collection at `key`.
    ///
    /// Absent yields `T::default()`. A value that fails to decode is
    /// cleared so future loads short-circuit, logged, and also yields
    /// the default. This never propagates an error to the caller.
    pub fn load<T>(&self, key: &str) -> T
    where
        T: DeserializeOwned + Serialize + Default,
    {
        self.load_migrating(key, |_| None)
    }

    /// Load the collection at `key`, with a one-time legacy migration.
    ///
    /// The canonical shape is tried first. If that fails, `migrate` is
    /// given the raw JSON value; returning `Some` rewrites the entry in
    /// canonical shape so the legacy branch runs at most once per
    /// entry. Irrecoverable values are cleared and yield the default.
    pub fn load_migrating<T, F>(&self, key: &str, migrate: F) -> T
    where
        T: DeserializeOwned + Serialize + Default,
        F: FnOnce(&serde_json::Value) -> Option<T>,
    {
        let Some(raw) = self.backend.get(key) else {
            return T::default();
        };

        let value: serde_json::Value = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(source) => {
                let err = StoreError::Decode {
                    key: key.to_string(),
                    source,
                };
                tracing::warn!(key, error = %err, "clearing unparseable stored value");
                self.backend.remove(key);
                return T::default();
            }
        };

        match T::deserialize(&value) {
            Ok(decoded) => decoded,
            Err(canonical_err) => {
                if let Some(migrated) = migrate(&value) {
                    tracing::debug!(key, "migrated legacy-shaped stored value");
                    self.save(key, &migrated);
                    migrated
                } else {
                    let err = StoreError::Decode {
                        key: key.to_string(),
                        source: canonical_err,
                    };
                    tracing::warn!(key, error = %err, "clearing undecodable stored value");
                    self.backend.remove(key);
                    T::default()
                }
            }
        }
    }

    /// Persist `value` at `key`.
    ///
    /// Write failures are logged and swallowed; the caller's in-memory
    /// state remains the source of truth for the session.
    pub fn save<T>(&self, key: &str, value: &T)
    where
        T: Serialize + ?Sized,
    {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(source) => {
                let err = StoreError::Encode {
                    key: key.to_string(),
                    source,
                };
                tracing::warn!(key, error = %err, "dropping unencodable value");
                return;
            }
        };
        if let Err(err) = self.backend.set(key, &raw) {
            tracing::warn!(key, error = %err, "write to storage failed, keeping in-memory state");
        }
    }

    /// Whether any value is stored at `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.backend.get(key).is_some()
    }

    /// Remove the entry at `key`.
    pub fn remove(&self, key: &str) {
        self.backend.remove(key);
    }

    /// Remove every listed key.
    pub fn remove_all(&self, keys: &[&str]) {
        for key in keys {
            self.backend.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys;

    #[derive(Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Prefs {
        dark_mode: bool,
    }

    #[test]
    fn absent_key_yields_default() {
        let store = Store::memory();
        let ids: Vec<i64> = store.load(keys::SAVED_DREAMS);
        assert!(ids.is_empty());
    }

    #[test]
    fn roundtrip() {
        let store = Store::memory();
        store.save(keys::SAVED_DREAMS, &vec![3_i64, 7]);
        let ids: Vec<i64> = store.load(keys::SAVED_DREAMS);
        assert_eq!(ids, vec![3, 7]);
    }

    #[test]
    fn corrupt_value_is_cleared_and_yields_default() {
        let backend = Arc::new(MemoryBackend::new());
        backend.set(keys::SAVED_DREAMS, "{definitely not json").unwrap();

        let store = Store::new(backend.clone());
        let ids: Vec<i64> = store.load(keys::SAVED_DREAMS);
        assert!(ids.is_empty());
        // cleared so future loads short-circuit
        assert_eq!(backend.get(keys::SAVED_DREAMS), None);
    }

    #[test]
    fn wrong_shape_without_migration_is_cleared() {
        let backend = Arc::new(MemoryBackend::new());
        backend.set(keys::SAVED_DREAMS, "\"a string\"").unwrap();

        let store = Store::new(backend.clone());
        let ids: Vec<i64> = store.load(keys::SAVED_DREAMS);
        assert!(ids.is_empty());
        assert_eq!(backend.get(keys::SAVED_DREAMS), None);
    }

    #[test]
    fn migration_rewrites_canonical_shape() {
        let backend = Arc::new(MemoryBackend::new());
        // legacy shape: array of {id} records instead of bare ids
        backend
            .set(keys::SAVED_DREAMS, r#"[{"id":3},{"id":7}]"#)
            .unwrap();

        let store = Store::new(backend.clone());
        let migrate = |value: &serde_json::Value| {
            let records = value.as_array()?;
            records
                .iter()
                .map(|r| r.get("id").and_then(|id| id.as_i64()))
                .collect::<Option<Vec<i64>>>()
        };
        let ids: Vec<i64> = store.load_migrating(keys::SAVED_DREAMS, migrate);
        assert_eq!(ids, vec![3, 7]);
        // stored shape is now canonical, so the plain load path decodes it
        let again: Vec<i64> = store.load(keys::SAVED_DREAMS);
        assert_eq!(again, vec![3, 7]);
    }

    #[test]
    fn decode_errors_name_the_offending_key() {
        let source = serde_json::from_str::<i64>("nope").unwrap_err();
        let err = StoreError::Decode {
            key: keys::SETTINGS.to_string(),
            source,
        };
        assert!(err.to_string().contains(keys::SETTINGS));
    }

    #[test]
    fn load_tolerates_field_names_of_the_browser_era() {
        let store = Store::memory();
        store.save(keys::SETTINGS, &serde_json::json!({"darkMode": true}));
        let prefs: Prefs = store.load(keys::SETTINGS);
        assert!(prefs.dark_mode);
    }
}
