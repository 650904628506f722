//! 格式化
//!
//! 纯函数，不做任何 IO。同样的值和选项总是得到相同的字符串。

use crate::error::Result;
use crate::value::Value;
use core::fmt::Display;
use pyprint_config::PrintOptions;

/// 用分隔符连接所有值，再追加结束符
///
/// 没有值时输出恰好是结束符。
pub fn format_line<I>(values: I, options: &PrintOptions) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut output = String::new();
    for (i, value) in values.into_iter().enumerate() {
        if i > 0 {
            output.push_str(&options.separator);
        }
        output.push_str(&value.to_string());
    }
    output.push_str(&options.terminator);
    output
}

/// 拆分动态参数
///
/// 最后一个参数是 JSON 对象（数组不算）时，把它当作选项移除并合并到默认值上；
/// 否则全部参数都是要打印的值。
pub fn split_options(mut args: Vec<serde_json::Value>) -> Result<(Vec<Value>, PrintOptions)> {
    let options = match args.last() {
        Some(serde_json::Value::Object(_)) => match args.pop() {
            Some(last) => serde_json::from_value(last)?,
            None => PrintOptions::default(),
        },
        _ => PrintOptions::default(),
    };
    let values = args.into_iter().map(Value::from).collect();
    Ok((values, options))
}
