//! Persistent key-value settings storage.

use crate::error::StoreError;

/// Key under which the Gemini API credential is stored.
pub const API_KEY_STORAGE_KEY: &str = "geminiApiKey";

/// Process-wide key-value store for user settings.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}
