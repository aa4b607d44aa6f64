//! Persistence of the last submitted query.
//!
//! The widget only ever reads and writes one string under one key. The
//! backing store is abstracted so the browser binding can use
//! `localStorage` while tests use [`MemoryStore`].

use std::collections::HashMap;

use thiserror::Error;

/// Errors from a [`KeyValueStore`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store cannot be reached at all (e.g. storage disabled).
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The store rejected the operation (e.g. quota exceeded).
    #[error("storage error: {0}")]
    Backend(String),
}

/// String key-value storage.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing store fails.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing store fails.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory [`KeyValueStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding a single entry.
    #[must_use]
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.into(), value.into());
        Self { entries }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// The last-search value, bound to its storage key.
///
/// Store failures never reach the caller: reads fall back to `""` and writes
/// are dropped, both with a warning.
#[derive(Debug, Clone)]
pub struct LastSearch<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> LastSearch<S> {
    /// Bind `store` to `key`.
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// The persisted query, or `""` when none was saved.
    #[must_use]
    pub fn load(&self) -> String {
        match self.store.get(&self.key) {
            Ok(value) => value.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to read last search");
                String::new()
            }
        }
    }

    /// Persist `query`; an empty string records an empty search attempt.
    pub fn save(&mut self, query: &str) {
        if let Err(e) = self.store.set(&self.key, query) {
            tracing::warn!(key = %self.key, error = %e, "Failed to persist last search");
        }
    }

    /// The storage key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The backing store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }
}
