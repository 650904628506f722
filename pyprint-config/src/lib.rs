//! pyprint Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It is the shared options vocabulary of the `pyprint` library and CLI.

use serde::Deserialize;

/// Text inserted between two consecutive values by default
pub const DEFAULT_SEPARATOR: &str = " ";

/// Text appended after the joined values by default
pub const DEFAULT_TERMINATOR: &str = "\n";

/// Options of a single print call
///
/// Every field is optional when deserialized: missing fields keep their
/// defaults and unknown fields are ignored, so a partial JSON object such as
/// `{"sep": "-"}` overrides only what it names. Naming one field twice
/// (`{"sep": "-", "separator": "+"}`) is a duplicate-field error.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PrintOptions {
    /// Inserted between consecutive values
    #[serde(alias = "sep")]
    pub separator: String,
    /// Appended once after the joined values
    #[serde(alias = "end")]
    pub terminator: String,
    /// File path (script runtime) or persistent-store key (browser)
    #[serde(alias = "file")]
    pub target: Option<String>,
    /// Accepted for compatibility; writes are always synchronous
    pub flush: bool,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            terminator: DEFAULT_TERMINATOR.to_string(),
            target: None,
            flush: false,
        }
    }
}

impl PrintOptions {
    /// Create the default options (`" "`, `"\n"`, no target)
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the separator
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Replace the terminator
    pub fn with_terminator(mut self, terminator: impl Into<String>) -> Self {
        self.terminator = terminator.into();
        self
    }

    /// Send output to a file path or store key instead of the default sink
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Set the flush flag
    pub fn with_flush(mut self, flush: bool) -> Self {
        self.flush = flush;
        self
    }

    /// The target, treating an empty string as absent
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref().filter(|t| !t.is_empty())
    }
}
