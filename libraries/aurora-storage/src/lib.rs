//! Aurora Player Storage
//!
//! Playlist and favorites persistence for Aurora Player.
//!
//! # Architecture
//!
//! - **Key-value backend**: [`KeyValueStore`] abstracts where bytes live
//!   ([`MemoryStore`] for tests, [`FileStore`] on disk)
//! - **JSON documents**: playlists and favorites are each one JSON array
//!   under a fixed key ([`PLAYLISTS_KEY`], [`FAVORITES_KEY`])
//! - **Write-through**: every mutation is persisted before it returns

mod error;
pub mod kv;
pub mod playlists;

pub use error::{Result, StorageError};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use playlists::{PlaylistStore, FAVORITES_KEY, PLAYLISTS_KEY};
