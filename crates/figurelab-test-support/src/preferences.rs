//! Test preference store — in-memory `PreferenceStore`.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use figurelab_core::error::DomainError;
use figurelab_core::preferences::PreferenceStore;

/// A preference store backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct InMemoryPreferenceStore {
    values: Mutex<HashMap<String, String>>,
}

impl InMemoryPreferenceStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw stored value for `key`.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }
}

#[async_trait]
impl PreferenceStore for InMemoryPreferenceStore {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        Ok(self.values.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), DomainError> {
        self.values.lock().unwrap().insert(key.to_owned(), value);
        Ok(())
    }
}
