//! pyprint - 脚本风格的 print
//!
//! 用分隔符连接任意个值、追加结束符，然后按宿主环境写到恰好一个目标：
//!
//! | 环境 | 无 target | 有 target |
//! |------|-----------|-----------|
//! | 脚本运行时 | 标准输出（不缓冲） | 追加到文件 |
//! | 浏览器 (`wasm`) | console 一条消息 | 追加到 localStorage 的 key |
//!
//! 两者都识别不到时返回 [`PrintError::UnsupportedEnvironment`]，不写任何内容。
//!
//! # 快速开始
//!
//! ```no_run
//! use pyprint::{print, pyprint, PrintOptions};
//!
//! pyprint!("Hello", "World")?;                          // "Hello World\n"
//! pyprint!("A", "B", "C"; sep = "-")?;                  // "A-B-C\n"
//! print(["Hello"], &PrintOptions::new().with_terminator("!!!"))?; // "Hello!!!"
//! # Ok::<(), pyprint::PrintError>(())
//! ```
//!
//! # 动态参数
//!
//! 参数在运行时才确定时（命令行、脚本绑定），最后一个 JSON 对象被视为选项：
//!
//! ```no_run
//! use serde_json::json;
//!
//! pyprint::print_dynamic(vec![json!("A"), json!(1), json!({"sep": "-"})])?;
//! # Ok::<(), pyprint::PrintError>(())
//! ```
//!
//! 类型化 API 没有这种歧义：值和选项是两个独立参数。
//!
//! # 并发
//!
//! 每次调用同步完成，调用之间不加锁。对同一文件或 key 的并发调用由调用方排序；
//! localStorage 追加是读-改-写，并发写同一个 key 可能丢失更新。
//!
//! # 平台支持
//!
//! | Feature | 说明 |
//! |---------|------|
//! | 默认 | 脚本运行时（std） |
//! | `wasm` | 浏览器（web-sys console + localStorage） |

mod error;
mod format;
mod host;
mod macros;
mod print;
mod sink;
mod value;

#[cfg(feature = "wasm")]
mod wasm;

pub use error::{PrintError, Result};
pub use format::{format_line, split_options};
pub use host::{detect_host, Environment, Host, ScriptHost, UnknownHost};
pub use print::{print, print_dynamic, print_dynamic_to, print_to, write_line};
pub use sink::Sink;
pub use value::Value;

pub use pyprint_config::{PrintOptions, DEFAULT_SEPARATOR, DEFAULT_TERMINATOR};
pub use pyprint_store::{KeyValueStore, MemoryStore, StoreError};

#[cfg(feature = "wasm")]
pub use wasm::BrowserHost;
