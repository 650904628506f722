//! CLI 配置
//!
//! 命令行参数到 `PrintOptions` / 日志配置的映射

use clap::{Parser, ValueEnum};
use pyprint::{split_options, PrintOptions, Value};
use std::str::FromStr;
use tracing::level_filters::LevelFilter;

use crate::logging::LogFormat;

#[derive(Parser, Debug)]
#[command(
    name = "pyprint",
    about = "Print values joined by a separator, like a scripting-language print",
    version
)]
pub struct Cli {
    /// Values to print
    #[arg(value_name = "VALUES")]
    pub values: Vec<String>,

    /// Separator between values
    #[arg(short, long, default_value = pyprint::DEFAULT_SEPARATOR)]
    pub sep: String,

    /// Text appended after the values
    #[arg(short, long, default_value = pyprint::DEFAULT_TERMINATOR, hide_default_value = true)]
    pub end: String,

    /// Append to FILE instead of writing to stdout
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<String>,

    /// Accepted for compatibility; output is always written synchronously
    #[arg(long)]
    pub flush: bool,

    /// Parse each value as JSON; a trailing object is taken as options
    #[arg(long)]
    pub json: bool,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long, default_value = "warn", value_parser = parse_level)]
    pub log_level: LevelFilter,

    /// Log output format
    #[arg(long, value_enum, default_value_t = CliLogFormat::Compact)]
    pub log_format: CliLogFormat,
}

/// 命令行可选的日志格式
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CliLogFormat {
    Pretty,
    Compact,
    Json,
}

impl From<CliLogFormat> for LogFormat {
    fn from(format: CliLogFormat) -> Self {
        match format {
            CliLogFormat::Pretty => LogFormat::Pretty,
            CliLogFormat::Compact => LogFormat::Compact,
            CliLogFormat::Json => LogFormat::Json,
        }
    }
}

fn parse_level(s: &str) -> Result<LevelFilter, String> {
    LevelFilter::from_str(s).map_err(|_| format!("unknown log level '{s}'"))
}

impl Cli {
    /// 由 `--sep/--end/--file/--flush` 构造选项
    pub fn print_options(&self) -> PrintOptions {
        let options = PrintOptions::new()
            .with_separator(self.sep.as_str())
            .with_terminator(self.end.as_str())
            .with_flush(self.flush);
        match &self.file {
            Some(file) => options.with_target(file.as_str()),
            None => options,
        }
    }

    /// 解析出要打印的值和最终选项
    ///
    /// `--json` 模式下每个值按 JSON 解析；若最后一个是对象，它取代
    /// `--sep/--end/--file/--flush` 成为选项。
    pub fn resolve(&self) -> Result<(Vec<Value>, PrintOptions), String> {
        if !self.json {
            let values = self.values.iter().map(|v| Value::from(v.as_str())).collect();
            return Ok((values, self.print_options()));
        }

        let args = self
            .values
            .iter()
            .map(|raw| {
                serde_json::from_str(raw).map_err(|e| format!("invalid JSON value '{raw}': {e}"))
            })
            .collect::<Result<Vec<serde_json::Value>, String>>()?;

        if matches!(args.last(), Some(serde_json::Value::Object(_))) {
            split_options(args).map_err(|e| e.to_string())
        } else {
            Ok((args.into_iter().map(Value::from).collect(), self.print_options()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["pyprint", "a", "b"]);
        assert_eq!(cli.values, vec!["a", "b"]);
        assert_eq!(cli.print_options(), PrintOptions::default());
        assert_eq!(cli.log_level, LevelFilter::WARN);
        assert_eq!(cli.log_format, CliLogFormat::Compact);
    }

    #[test]
    fn test_options_mapping() {
        let cli = Cli::parse_from([
            "pyprint", "--sep", "-", "--end", "!!!", "--file", "out.txt", "--flush", "x",
        ]);
        let options = cli.print_options();
        assert_eq!(options.separator, "-");
        assert_eq!(options.terminator, "!!!");
        assert_eq!(options.target(), Some("out.txt"));
        assert!(options.flush);
    }

    #[test]
    fn test_log_flags() {
        let cli = Cli::parse_from(["pyprint", "--log-level", "debug", "--log-format", "json"]);
        assert_eq!(cli.log_level, LevelFilter::DEBUG);
        assert_eq!(LogFormat::from(cli.log_format), LogFormat::Json);
        assert!(cli.values.is_empty());
    }

    #[test]
    fn test_invalid_log_level() {
        assert!(Cli::try_parse_from(["pyprint", "--log-level", "loud"]).is_err());
    }

    #[test]
    fn test_resolve_plain_values() {
        let cli = Cli::parse_from(["pyprint", "-s", ",", "1", "x"]);
        let (values, options) = cli.resolve().unwrap();
        assert_eq!(values, vec![Value::from("1"), Value::from("x")]);
        assert_eq!(options.separator, ",");
    }

    #[test]
    fn test_resolve_json_trailing_object_wins() {
        let cli = Cli::parse_from(["pyprint", "--sep", "+", "--json", "1", "\"a\"", "{\"sep\":\"-\"}"]);
        let (values, options) = cli.resolve().unwrap();
        assert_eq!(values, vec![Value::Int(1), Value::from("a")]);
        assert_eq!(options.separator, "-");
    }

    #[test]
    fn test_resolve_json_without_object_uses_flags() {
        let cli = Cli::parse_from(["pyprint", "--sep", "+", "--json", "[1,2]", "true"]);
        let (values, options) = cli.resolve().unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(options.separator, "+");
    }

    #[test]
    fn test_resolve_invalid_json() {
        let cli = Cli::parse_from(["pyprint", "--json", "not json"]);
        let err = cli.resolve().unwrap_err();
        assert!(err.contains("invalid JSON value 'not json'"));
    }
}
