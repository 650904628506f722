//! WASM 平台支持
//!
//! 使用 web-sys 的 console API 和 localStorage 输出。

use crate::error::Result;
use crate::host::{Environment, Host};
use pyprint_store::{KeyValueStore, LocalStorage};
use web_sys::console;

/// 浏览器宿主
///
/// 只要存在全局 `window` 就视为浏览器；localStorage 在每次追加时打开，
/// 被禁用时追加返回存储错误而不是环境错误。
#[derive(Clone, Copy, Debug)]
pub struct BrowserHost;

impl BrowserHost {
    /// 存在全局 `window` 时返回浏览器宿主
    pub fn detect() -> Option<Self> {
        web_sys::window().map(|_| BrowserHost)
    }
}

impl Host for BrowserHost {
    fn environment(&self) -> Option<Environment> {
        Some(Environment::Browser)
    }

    fn console_log(&self, message: &str) -> Result<()> {
        console::log_1(&message.into());
        Ok(())
    }

    fn storage_append(&self, key: &str, text: &str) -> Result<()> {
        let storage = LocalStorage::open()?;
        storage.append_item(key, text)?;
        Ok(())
    }
}

// 注意：以下测试需要浏览器环境，使用 wasm-pack test 运行
// #[wasm_bindgen_test]
// fn test_browser_host_console() { ... }
