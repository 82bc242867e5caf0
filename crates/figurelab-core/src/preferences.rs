//! Key-value store for per-page UI preferences.

use async_trait::async_trait;

use crate::error::DomainError;

/// String key-value store injected wherever preferences are remembered.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Returns the stored value for `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: String) -> Result<(), DomainError>;
}
