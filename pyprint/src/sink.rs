//! 输出目标
//!
//! 每次调用根据环境和 `target` 选出恰好一个 sink，并只写一次。

use crate::error::Result;
use crate::host::{Environment, Host};
use pyprint_config::PrintOptions;
use std::path::Path;
use tracing::debug;

/// 输出目标
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sink<'a> {
    /// 脚本运行时，无 target
    Stdout,
    /// 脚本运行时，target 是文件路径
    File(&'a Path),
    /// 浏览器，无 target
    Console,
    /// 浏览器，target 是 localStorage 的 key
    Storage(&'a str),
}

impl<'a> Sink<'a> {
    /// 根据环境和选项选择 sink
    pub fn select(environment: Environment, options: &'a PrintOptions) -> Self {
        match (environment, options.target()) {
            (Environment::Script, None) => Sink::Stdout,
            (Environment::Script, Some(path)) => Sink::File(Path::new(path)),
            (Environment::Browser, None) => Sink::Console,
            (Environment::Browser, Some(key)) => Sink::Storage(key),
        }
    }

    /// 把已格式化的输出写入宿主
    pub fn write(&self, host: &dyn Host, output: &str) -> Result<()> {
        debug!(target: "pyprint::sink", sink = ?self, bytes = output.len(), "write");
        match *self {
            Sink::Stdout => host.write_stdout(output.as_bytes()),
            Sink::File(path) => host.append_file(path, output.as_bytes()),
            Sink::Console => host.console_log(output),
            Sink::Storage(key) => host.storage_append(key, output),
        }
    }
}
