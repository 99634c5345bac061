//! Persisted visitor preferences.
//!
//! The card stores exactly one value, the dark-mode flag, but the store is a
//! plain string key-value interface like the browser's local storage.

mod file_store;
mod memory_store;

pub use file_store::FilePreferenceStore;
pub use memory_store::MemoryPreferenceStore;

use crate::error::PreferenceResult;

/// A string key-value store for preferences.
pub trait PreferenceStore: Send + Sync {
    /// Read a value; `None` when the key was never written.
    fn get(&self, key: &str) -> PreferenceResult<Option<String>>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> PreferenceResult<()>;
}
