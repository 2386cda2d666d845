//! Key/value storage for cafe game state
//!
//! The game service only needs string keys, string values and an atomic
//! compare-and-swap. [`MemoryStore`] is the in-process implementation.

mod memory;

pub use memory::MemoryStore;

use std::sync::Arc;
use thiserror::Error;

/// A store operation failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// String key/value store with compare-and-swap
pub trait KeyValueStore: Send + Sync {
    /// Read the value under `key`
    ///
    /// # Errors
    /// Returns `StoreError` if the backend fails.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Unconditionally write `value` under `key`
    ///
    /// # Errors
    /// Returns `StoreError` if the backend fails.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Write `new` only if the current value equals `expected`
    ///
    /// `expected == None` means the key must be absent. Returns whether the
    /// write happened.
    ///
    /// # Errors
    /// Returns `StoreError` if the backend fails.
    fn compare_and_swap(
        &self,
        key: &str,
        expected: Option<&str>,
        new: &str,
    ) -> Result<bool, StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn compare_and_swap(
        &self,
        key: &str,
        expected: Option<&str>,
        new: &str,
    ) -> Result<bool, StoreError> {
        (**self).compare_and_swap(key, expected, new)
    }
}
