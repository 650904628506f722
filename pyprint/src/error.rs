//! print 错误类型

use pyprint_store::StoreError;
use thiserror::Error;

/// print 结果类型
pub type Result<T> = std::result::Result<T, PrintError>;

/// print 错误类型
///
/// 只有 `UnsupportedEnvironment` 由 print 自身产生；
/// 其余变体原样透传底层平台错误。
#[derive(Error, Debug)]
pub enum PrintError {
    /// 既不是脚本运行时，也不是浏览器
    #[error("Unsupported environment: not running in a script runtime or a browser")]
    UnsupportedEnvironment,

    /// 标准输出或文件写入失败
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// 持久化存储读写失败
    #[error(transparent)]
    Store(#[from] StoreError),

    /// 动态参数中的选项对象字段类型错误
    #[error("Invalid print options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}
