//! Playlist domain types

use crate::types::{PlaylistId, Track, TrackId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Named, ordered collection of tracks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Playlist name
    pub name: String,

    /// Free-form description (empty when not given)
    #[serde(default)]
    pub description: String,

    /// Tracks in playback order
    #[serde(default)]
    pub tracks: Vec<Track>,

    /// Creation timestamp (`None` for the virtual favorites playlist)
    pub created_at: Option<DateTime<Utc>>,

    /// Last modification timestamp
    pub updated_at: Option<DateTime<Utc>>,
}

impl Playlist {
    /// Create a new playlist from a creation request
    pub fn new(request: CreatePlaylist) -> Self {
        let now = Utc::now();
        Self {
            id: PlaylistId::generate(),
            name: request.name,
            description: request.description.unwrap_or_default(),
            tracks: request.tracks,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }

    /// Build the virtual favorites playlist around the given tracks
    pub fn favorites(tracks: Vec<Track>) -> Self {
        Self {
            id: PlaylistId::favorites(),
            name: "Favorites".to_string(),
            description: "Your favorite tracks".to_string(),
            tracks,
            created_at: None,
            updated_at: None,
        }
    }

    /// Whether a track with this id is in the playlist
    pub fn contains_track(&self, track_id: &TrackId) -> bool {
        self.tracks.iter().any(|t| &t.id == track_id)
    }

    /// Ids of the tracks in playback order
    pub fn track_ids(&self) -> Vec<TrackId> {
        self.tracks.iter().map(|t| t.id.clone()).collect()
    }

    /// Apply an update request and bump `updated_at`
    pub fn apply(&mut self, update: UpdatePlaylist) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        self.touch();
    }

    /// Mark the playlist as modified now
    pub fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }
}

/// Request to create a playlist
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreatePlaylist {
    /// Playlist name
    pub name: String,

    /// Optional description
    pub description: Option<String>,

    /// Initial tracks
    #[serde(default)]
    pub tracks: Vec<Track>,
}

impl CreatePlaylist {
    /// Request an empty playlist with the given name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Partial playlist update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdatePlaylist {
    /// New name
    pub name: Option<String>,

    /// New description
    pub description: Option<String>,
}
