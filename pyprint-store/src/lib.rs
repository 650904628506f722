//! pyprint Key-Value Store
//!
//! A persistent key-value store abstraction with multiple backend
//! implementations. The browser's `localStorage` is the production backend;
//! the in-memory store serves tests and hosts without persistent storage.
//!
//! # Features
//! - `wasm`: Enable the `localStorage` backend (requires a browser window)
//!
//! # Usage
//! ```rust
//! use pyprint_store::{KeyValueStore, MemoryStore};
//!
//! let store = MemoryStore::new();
//! store.append_item("log", "a\n").unwrap();
//! store.append_item("log", "b\n").unwrap();
//! assert_eq!(store.get_item("log").unwrap().as_deref(), Some("a\nb\n"));
//! ```

mod error;
#[cfg(feature = "wasm")]
mod local;
mod memory;
mod store;

pub use error::{StoreError, StoreResult};
#[cfg(feature = "wasm")]
pub use local::LocalStorage;
pub use memory::MemoryStore;
pub use store::KeyValueStore;
