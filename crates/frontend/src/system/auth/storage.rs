use contracts::system::{KeyValueStorage, StorageError};
use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// `window.localStorage` as a [`KeyValueStorage`]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl KeyValueStorage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok()?
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = get_local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::WriteFailed {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let storage = get_local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .remove_item(key)
            .map_err(|e| StorageError::WriteFailed {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }
}
