//! Browser Storage
//!
//! `window.localStorage` as the durable medium for saved quotes.

use quote_core::{StorageMedium, StoreError, StoreResult};

/// localStorage entry holding an optional JSON session config override
pub const CONFIG_KEY: &str = "quote-pad.config";

pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    /// The window's localStorage, if the browser grants access
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok()??;
        Some(Self { storage })
    }
}

impl StorageMedium for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) -> StoreResult<()> {
        self.storage.set_item(key, value).map_err(|e| StoreError::Write {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }
}
