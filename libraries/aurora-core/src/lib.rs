//! Aurora Player Core
//!
//! Platform-agnostic domain types, the in-memory track catalog, and error
//! handling shared by the playback engine and the playlist store.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `Playlist`, and their identifiers
//! - **Track Catalog**: the session's collection of known tracks
//! - **Error Handling**: Unified `AuroraError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use aurora_core::{SourceLocator, Track, TrackCatalog};
//! use std::time::Duration;
//!
//! let track = Track::from_upload(
//!     "Morning Light.mp3",
//!     SourceLocator::new("blob:aurora/1"),
//!     Some(Duration::from_secs(212)),
//! );
//! assert_eq!(track.title, "Morning Light");
//!
//! let mut catalog = TrackCatalog::new();
//! catalog.insert(track.clone());
//! assert!(catalog.get(&track.id).is_some());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use catalog::TrackCatalog;
pub use error::{AuroraError, Result};
pub use types::{
    CreatePlaylist, Playlist, PlaylistId, SourceLocator, Track, TrackId, UpdatePlaylist,
};
