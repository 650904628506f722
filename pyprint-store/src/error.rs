//! Store Error Types

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Error type for store operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The backing storage is not reachable (no window, storage disabled, ...)
    #[error("Storage unavailable: {reason}")]
    Unavailable { reason: String },

    /// The backend rejected the operation (quota exceeded, security error, ...)
    #[error("Storage error on key '{key}': {message}")]
    Backend { key: String, message: String },

    /// A writer panicked while holding the store lock
    #[error("Store lock poisoned")]
    LockPoisoned,
}
