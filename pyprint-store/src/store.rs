//! KeyValueStore trait definition

use crate::error::StoreResult;

/// Persistent key-value store trait
///
/// Mirrors the browser storage interface: string keys, string values, no
/// native append. Decouples the print sinks from a specific backend.
///
/// # Implementations
/// - `MemoryStore`: In-memory store
/// - `LocalStorage`: Browser `window.localStorage` (feature `wasm`)
pub trait KeyValueStore {
    /// Read the value stored under `key`
    ///
    /// # Returns
    /// `Ok(None)` if the key is absent
    fn get_item(&self, key: &str) -> StoreResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set_item(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Delete `key`; deleting an absent key is not an error
    fn remove_item(&self, key: &str) -> StoreResult<()>;

    /// Check if `key` holds a value
    fn contains_key(&self, key: &str) -> StoreResult<bool> {
        Ok(self.get_item(key)?.is_some())
    }

    /// Append `text` to the value under `key`
    ///
    /// Emulated as read-modify-write: the current value (empty if absent) is
    /// read, `text` is concatenated and the result written back. Two writers
    /// interleaving on the same key can lose an update; callers sequence
    /// their writes if ordering matters.
    fn append_item(&self, key: &str, text: &str) -> StoreResult<()> {
        let mut value = self.get_item(key)?.unwrap_or_default();
        tracing::trace!(target: "pyprint::store", key, existing = value.len(), appended = text.len(), "append");
        value.push_str(text);
        self.set_item(key, &value)
    }
}
