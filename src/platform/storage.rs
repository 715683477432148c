//! Browser LocalStorage

use web_sys::Storage;

use crate::persistence::{Store, StoreError};

/// `window.localStorage` as a [`Store`]. Writes fail with
/// [`StoreError::Unavailable`] when storage is missing, e.g. in private browsing.
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn new() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        if storage.is_none() {
            log::warn!("LocalStorage unavailable, session will not persist");
        }
        Self { storage }
    }
}

impl Default for LocalStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Store for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = self.storage.as_ref().ok_or(StoreError::Unavailable)?;
        storage.set_item(key, value).map_err(|e| {
            log::warn!("Failed to write {}: {:?}", key, e);
            StoreError::Write {
                key: key.to_string(),
                reason: format!("{:?}", e),
            }
        })
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let storage = self.storage.as_ref().ok_or(StoreError::Unavailable)?;
        storage.remove_item(key).map_err(|e| {
            log::warn!("Failed to remove {}: {:?}", key, e);
            StoreError::Write {
                key: key.to_string(),
                reason: format!("{:?}", e),
            }
        })
    }
}
