//! 测试辅助工具
//!
//! 提供记录所有输出的假宿主和临时文件路径。

#![allow(dead_code)]

use pyprint::{Environment, Host, KeyValueStore, MemoryStore, Result};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// 记录每一次写入的宿主
pub struct RecordingHost {
    environment: Option<Environment>,
    pub stdout: RefCell<Vec<u8>>,
    pub files: RefCell<BTreeMap<PathBuf, Vec<u8>>>,
    pub console: RefCell<Vec<String>>,
    pub store: MemoryStore,
}

impl RecordingHost {
    pub fn new(environment: Option<Environment>) -> Self {
        RecordingHost {
            environment,
            stdout: RefCell::new(Vec::new()),
            files: RefCell::new(BTreeMap::new()),
            console: RefCell::new(Vec::new()),
            store: MemoryStore::new(),
        }
    }

    pub fn script() -> Self {
        Self::new(Some(Environment::Script))
    }

    pub fn browser() -> Self {
        Self::new(Some(Environment::Browser))
    }

    pub fn unknown() -> Self {
        Self::new(None)
    }

    pub fn stdout_text(&self) -> String {
        String::from_utf8(self.stdout.borrow().clone()).unwrap()
    }

    pub fn file_text(&self, path: &str) -> Option<String> {
        self.files
            .borrow()
            .get(Path::new(path))
            .map(|bytes| String::from_utf8(bytes.clone()).unwrap())
    }

    /// 所有 sink 是否都没有被写过
    pub fn is_untouched(&self) -> bool {
        self.stdout.borrow().is_empty()
            && self.files.borrow().is_empty()
            && self.console.borrow().is_empty()
            && self.store.is_empty()
    }
}

impl Host for RecordingHost {
    fn environment(&self) -> Option<Environment> {
        self.environment
    }

    fn write_stdout(&self, bytes: &[u8]) -> Result<()> {
        self.stdout.borrow_mut().extend_from_slice(bytes);
        Ok(())
    }

    fn append_file(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        self.files
            .borrow_mut()
            .entry(path.to_path_buf())
            .or_default()
            .extend_from_slice(bytes);
        Ok(())
    }

    fn console_log(&self, message: &str) -> Result<()> {
        self.console.borrow_mut().push(message.to_string());
        Ok(())
    }

    fn storage_append(&self, key: &str, text: &str) -> Result<()> {
        self.store.append_item(key, text)?;
        Ok(())
    }
}

/// 进程内唯一的临时文件路径
pub fn temp_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("pyprint_it_{}_{}", name, std::process::id()))
}
