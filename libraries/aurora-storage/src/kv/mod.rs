//! Key-value persistence
//!
//! Values are opaque strings (JSON documents in practice) stored under flat
//! string keys. Two backends ship with the crate:
//!
//! - [`MemoryStore`]: process-local, for tests and ephemeral sessions
//! - [`FileStore`]: one `<key>.json` file per key under a directory
//!
//! # Example
//!
//! ```rust
//! use aurora_storage::{KeyValueStore, MemoryStore};
//!
//! let mut store = MemoryStore::new();
//! store.set("ui.theme", "\"dark\"")?;
//! assert_eq!(store.get("ui.theme")?.as_deref(), Some("\"dark\""));
//! # Ok::<(), aurora_storage::StorageError>(())
//! ```

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::Result;

/// String key-value backend
pub trait KeyValueStore {
    /// Read the value stored under `key`
    ///
    /// Returns `Ok(None)` if the key was never written or has been removed.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove `key` (missing keys are not an error)
    fn remove(&mut self, key: &str) -> Result<()>;
}
