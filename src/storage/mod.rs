//! Key-value persistence behind the session store.
//!
//! DESIGN
//! ======
//! The session store never touches `window.localStorage` directly. It talks
//! to a [`KeyValueStore`], so tests run against [`MemoryStorage`] on the host
//! and the browser build plugs in [`BrowserStorage`].

#[cfg(feature = "csr")]
mod browser;
mod memory;

#[cfg(feature = "csr")]
pub use browser::BrowserStorage;
pub use memory::MemoryStorage;

/// Failure talking to the backing store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("storage rejected write to {key}: {reason}")]
    Rejected { key: String, reason: String },
}

/// Minimal string key-value store.
///
/// Methods take `&self`: browser storage is a handle to shared state, and the
/// in-memory store uses interior mutability to match.
pub trait KeyValueStore {
    /// Read the value for `key`, or `None` when the key is not set.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the write is refused.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the store cannot be modified.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<K: KeyValueStore + ?Sized> KeyValueStore for Box<K> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}
