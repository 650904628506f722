//! 宿主环境
//!
//! 每个宿主只提供它真正支持的输出能力，其余能力默认返回
//! `UnsupportedEnvironment`。`detect_host` 在调用时探测当前平台。

use crate::error::{PrintError, Result};
use std::io::Write;
use std::path::Path;

/// 可识别的宿主环境
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    /// 独立脚本运行时：标准输出 + 文件系统
    Script,
    /// 浏览器：console + localStorage
    Browser,
}

impl Environment {
    /// 环境名称
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Script => "script",
            Environment::Browser => "browser",
        }
    }
}

/// 宿主能力 trait
///
/// 测试或嵌入场景可以注入自己的实现来替换真实输出。
pub trait Host {
    /// 当前宿主属于哪种环境；`None` 表示无法识别
    fn environment(&self) -> Option<Environment>;

    /// 把字节原样写入标准输出，返回前刷新
    fn write_stdout(&self, bytes: &[u8]) -> Result<()> {
        let _ = bytes;
        Err(PrintError::UnsupportedEnvironment)
    }

    /// 以追加模式写入文件（不存在则创建），返回前关闭
    fn append_file(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        let _ = (path, bytes);
        Err(PrintError::UnsupportedEnvironment)
    }

    /// 作为一条消息转发到 console
    fn console_log(&self, message: &str) -> Result<()> {
        let _ = message;
        Err(PrintError::UnsupportedEnvironment)
    }

    /// 追加到持久化存储的 key 下（读-改-写）
    fn storage_append(&self, key: &str, text: &str) -> Result<()> {
        let _ = (key, text);
        Err(PrintError::UnsupportedEnvironment)
    }
}

/// 脚本运行时宿主（std 标准输出 + 本地文件系统）
#[derive(Clone, Copy, Debug, Default)]
pub struct ScriptHost;

impl Host for ScriptHost {
    fn environment(&self) -> Option<Environment> {
        Some(Environment::Script)
    }

    fn write_stdout(&self, bytes: &[u8]) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(bytes)?;
        stdout.flush()?;
        Ok(())
    }

    fn append_file(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        file.write_all(bytes)?;
        Ok(())
    }
}

/// 无法识别的宿主：任何输出都会失败
#[derive(Clone, Copy, Debug, Default)]
pub struct UnknownHost;

impl Host for UnknownHost {
    fn environment(&self) -> Option<Environment> {
        None
    }
}

/// 探测当前宿主
#[cfg(any(not(target_arch = "wasm32"), target_os = "wasi"))]
pub fn detect_host() -> Box<dyn Host> {
    tracing::trace!(target: "pyprint::host", "detected script runtime");
    Box::new(ScriptHost)
}

/// 探测当前宿主
#[cfg(all(target_arch = "wasm32", not(target_os = "wasi"), feature = "wasm"))]
pub fn detect_host() -> Box<dyn Host> {
    match crate::wasm::BrowserHost::detect() {
        Some(host) => {
            tracing::trace!(target: "pyprint::host", "detected browser");
            Box::new(host)
        }
        None => {
            tracing::debug!(target: "pyprint::host", "no global window");
            Box::new(UnknownHost)
        }
    }
}

/// 探测当前宿主
#[cfg(all(target_arch = "wasm32", not(target_os = "wasi"), not(feature = "wasm")))]
pub fn detect_host() -> Box<dyn Host> {
    tracing::debug!(target: "pyprint::host", "wasm32 without the `wasm` feature");
    Box::new(UnknownHost)
}
