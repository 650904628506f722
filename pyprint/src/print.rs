//! print 入口
//!
//! 流程：格式化 → 环境探测 → 选择 sink → 写入一次。

use crate::error::{PrintError, Result};
use crate::format::{format_line, split_options};
use crate::host::{detect_host, Host};
use crate::sink::Sink;
use core::fmt::Display;
use pyprint_config::PrintOptions;
use tracing::{trace, warn};

/// 格式化并输出到当前宿主环境
///
/// # Errors
///
/// 无法识别宿主时返回 [`PrintError::UnsupportedEnvironment`]，且不写入任何内容；
/// 文件或存储错误原样返回。
///
/// # Example
///
/// ```no_run
/// use pyprint::{print, PrintOptions};
///
/// print(["A", "B", "C"], &PrintOptions::new().with_separator("-"))?;
/// # Ok::<(), pyprint::PrintError>(())
/// ```
pub fn print<I>(values: I, options: &PrintOptions) -> Result<()>
where
    I: IntoIterator,
    I::Item: Display,
{
    let host = detect_host();
    print_to(host.as_ref(), values, options)
}

/// 格式化并输出到指定宿主
pub fn print_to<I>(host: &dyn Host, values: I, options: &PrintOptions) -> Result<()>
where
    I: IntoIterator,
    I::Item: Display,
{
    let output = format_line(values, options);
    write_line(host, &output, options)
}

/// 输出已格式化的字符串
pub fn write_line(host: &dyn Host, output: &str, options: &PrintOptions) -> Result<()> {
    let Some(environment) = host.environment() else {
        warn!(target: "pyprint::print", bytes = output.len(), "unsupported environment, nothing written");
        return Err(PrintError::UnsupportedEnvironment);
    };

    trace!(target: "pyprint::print", environment = environment.as_str(), "environment detected");

    if options.flush {
        trace!(target: "pyprint::print", "flush requested; writes are already synchronous");
    }

    Sink::select(environment, options).write(host, output)
}

/// 以动态参数调用：最后一个 JSON 对象被视为选项
pub fn print_dynamic(args: Vec<serde_json::Value>) -> Result<()> {
    let host = detect_host();
    print_dynamic_to(host.as_ref(), args)
}

/// 以动态参数输出到指定宿主
pub fn print_dynamic_to(host: &dyn Host, args: Vec<serde_json::Value>) -> Result<()> {
    let (values, options) = split_options(args)?;
    print_to(host, &values, &options)
}
