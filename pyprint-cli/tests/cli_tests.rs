//! 命令行端到端测试
//!
//! 直接运行编译好的 `pyprint` 二进制，检查 stdout、stderr 和退出码。

use std::path::PathBuf;
use std::process::{Command, Output};

/// 运行 pyprint 并收集输出
fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pyprint"))
        .args(args)
        .output()
        .expect("failed to run pyprint")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

fn temp_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("pyprint_cli_{}_{}", name, std::process::id()))
}

#[test]
fn test_default_line() {
    let output = run(&["Hello", "World"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "Hello World\n");
    assert_eq!(stderr(&output), "");
}

#[test]
fn test_no_values_prints_terminator() {
    let output = run(&[]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "\n");
}

#[test]
fn test_separator_flag() {
    let output = run(&["--sep", "-", "A", "B", "C"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "A-B-C\n");
}

#[test]
fn test_end_flag_adds_no_newline() {
    let output = run(&["--end", "!!!", "Hello"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Hello!!!");
}

#[test]
fn test_json_trailing_object_is_options() {
    let output = run(&["--json", "\"A\"", "1", "[2,null]", "{\"sep\":\"-\",\"end\":\".\"}"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "A-1-2,.");
}

#[test]
fn test_json_invalid_value_exits_with_error() {
    let output = run(&["--json", "not json"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).starts_with("Error: invalid JSON value 'not json'"));
}

#[test]
fn test_json_invalid_option_type_exits_with_error() {
    let output = run(&["--json", "\"A\"", "{\"sep\":5}"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).contains("Invalid print options"));
}

#[test]
fn test_trace_logging_stays_off_stdout() {
    let output = run(&["--log-level", "trace", "a", "b"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "a b\n");
    assert!(!stderr(&output).is_empty());
}

#[test]
fn test_file_appends_across_runs() {
    let path = temp_file("append");
    std::fs::remove_file(&path).ok();
    let target = path.to_string_lossy().to_string();

    let first = run(&["--file", &target, "first"]);
    let second = run(&["--file", &target, "--end", "", "second"]);

    assert!(first.status.success());
    assert!(second.status.success());
    assert_eq!(stdout(&first), "");
    assert_eq!(stdout(&second), "");
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\nsecond");

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_unwritable_file_exits_with_error() {
    let path = temp_file("missing_dir").join("nested").join("out.txt");
    let target = path.to_string_lossy().to_string();
    let output = run(&["--file", &target, "x"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).starts_with("Error: "));
}
