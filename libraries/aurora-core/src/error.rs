//! Core error types for Aurora Player

use thiserror::Error;
use crate::types::{PlaylistId, TrackId};

/// Result type alias using `AuroraError`
pub type Result<T> = std::result::Result<T, AuroraError>;

/// Core error type for Aurora Player
#[derive(Error, Debug)]
pub enum AuroraError {
    /// The track is already part of the playlist
    ///
    /// Callers show this to the user; it is never retried.
    #[error("Track {track_id} already exists in playlist {playlist_id}")]
    DuplicateTrackInPlaylist {
        /// Playlist the track was added to
        playlist_id: PlaylistId,
        /// Track already present
        track_id: TrackId,
    },

    /// Playlist not found
    #[error("Playlist not found: {0}")]
    PlaylistNotFound(PlaylistId),

    /// Key-value backend errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl AuroraError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
