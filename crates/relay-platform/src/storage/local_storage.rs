//! `window.localStorage` storage backend.
//!
//! The persisted state is two small string-valued keys, which is exactly
//! what localStorage is for. Values must be UTF-8; the catalog is JSON so
//! this always holds.

use async_trait::async_trait;
use web_sys::Storage;

use relay_core::ports::StoragePort;
use relay_types::{RelayError, Result};

pub struct LocalStorage {
    store: Storage,
}

impl LocalStorage {
    pub fn open() -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| RelayError::Storage("No window object".to_string()))?;
        let store = window
            .local_storage()
            .map_err(|e| RelayError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| RelayError::Storage("localStorage not available".to_string()))?;
        Ok(Self { store })
    }
}

#[async_trait(?Send)]
impl StoragePort for LocalStorage {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let value = self
            .store
            .get_item(key)
            .map_err(|e| RelayError::Storage(format!("{:?}", e)))?;
        Ok(value.map(String::into_bytes))
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let text = std::str::from_utf8(value)
            .map_err(|e| RelayError::Storage(format!("value for {} is not UTF-8: {}", key, e)))?;
        self.store
            .set_item(key, text)
            .map_err(|e| RelayError::Storage(format!("{:?}", e)))
    }

    fn backend_name(&self) -> &str {
        "localstorage"
    }
}
