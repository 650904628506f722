//! Browser `localStorage` implementation
//!
//! 使用 web-sys 的 Storage API，仅在 `wasm` feature 下编译。

use crate::error::{StoreError, StoreResult};
use crate::KeyValueStore;

/// The origin's `window.localStorage`.
///
/// Values persist across page loads. The handle is not `Send`: browser
/// storage lives on the main thread.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    /// Open `window.localStorage`
    ///
    /// Fails with `StoreError::Unavailable` outside a window context (workers,
    /// non-browser hosts) or when the browser disables storage.
    pub fn open() -> StoreResult<Self> {
        let window = web_sys::window().ok_or_else(|| StoreError::Unavailable {
            reason: String::from("no global window"),
        })?;
        let storage = window
            .local_storage()
            .map_err(|e| StoreError::Unavailable {
                reason: format!("{e:?}"),
            })?
            .ok_or_else(|| StoreError::Unavailable {
                reason: String::from("localStorage is disabled"),
            })?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        self.storage.get_item(key).map_err(|e| StoreError::Backend {
            key: key.to_string(),
            message: format!("{e:?}"),
        })
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StoreError::Backend {
                key: key.to_string(),
                message: format!("{e:?}"),
            })
    }

    fn remove_item(&self, key: &str) -> StoreResult<()> {
        self.storage.remove_item(key).map_err(|e| StoreError::Backend {
            key: key.to_string(),
            message: format!("{e:?}"),
        })
    }
}

// 注意：LocalStorage 需要浏览器环境，使用 wasm-pack test --headless 运行
