//! # Browser `localStorage` store
//!
//! [`LocalStorage`] is the [`KeyValueStore`] used on the **web platform**. It
//! writes straight through to `window.localStorage`, so the session survives
//! reloads and new tabs of the same origin.
//!
//! ## Error handling
//!
//! Reads swallow errors and return `None`: a browser with storage disabled
//! (private mode, quota exhausted) degrades to "no cached session", which is
//! the same as a first visit. Writes report [`StorageError`] so the caller can
//! log it.

use web_sys::Storage;

use crate::session::{KeyValueStore, StorageError};

/// `window.localStorage`-backed KeyValueStore for the web platform.
///
/// Zero-size and `Clone`; the `Storage` handle is looked up on every call
/// because `web_sys::Storage` is not `Send` and the browser caches it anyway.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Result<Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|e| StorageError::Backend(format!("{e:?}")))?
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().ok()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))
    }
}
