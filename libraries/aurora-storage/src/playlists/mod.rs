//! Playlists and favorites
//!
//! Playlists are kept in memory and written back as a JSON array after every
//! mutation. Favorites are a plain list of tracks exposed as a virtual
//! playlist with the reserved id `favorites`, always listed first.
//!
//! Unreadable JSON found on open is logged and replaced by an empty list, so a
//! corrupt document never prevents the player from starting.
//!
//! # Example
//!
//! ```rust
//! use aurora_core::{CreatePlaylist, SourceLocator, Track};
//! use aurora_storage::{MemoryStore, PlaylistStore};
//!
//! # fn main() -> aurora_core::Result<()> {
//! let mut store = PlaylistStore::open(MemoryStore::new())?;
//!
//! let playlist = store.create_playlist(CreatePlaylist::named("Road Trip"))?;
//! let track = Track::from_upload("song.mp3", SourceLocator::new("/music/song.mp3"), None);
//! store.add_to_playlist(&playlist.id, track)?;
//!
//! assert_eq!(store.all_playlists().len(), 2); // favorites + Road Trip
//! # Ok(())
//! # }
//! ```

use aurora_core::{
    AuroraError, CreatePlaylist, Playlist, PlaylistId, Result, Track, TrackId, UpdatePlaylist,
};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::kv::KeyValueStore;

/// Key holding the JSON array of playlists
pub const PLAYLISTS_KEY: &str = "aurora.playlists";

/// Key holding the JSON array of favorite tracks
pub const FAVORITES_KEY: &str = "aurora.favorites";

/// Playlist and favorites store over a key-value backend
pub struct PlaylistStore<S: KeyValueStore> {
    store: S,
    playlists: Vec<Playlist>,
    favorites: Vec<Track>,
    current: Option<PlaylistId>,
}

impl<S: KeyValueStore> PlaylistStore<S> {
    /// Load playlists and favorites from `store`
    pub fn open(store: S) -> Result<Self> {
        let playlists = load_list(&store, PLAYLISTS_KEY)?;
        let favorites = load_list(&store, FAVORITES_KEY)?;

        debug!(
            playlists = playlists.len(),
            favorites = favorites.len(),
            "Loaded playlist store"
        );

        Ok(Self {
            store,
            playlists,
            favorites,
            current: None,
        })
    }

    /// Consume the store and return the backend
    pub fn into_inner(self) -> S {
        self.store
    }

    // ===== Playlists =====

    /// Create a playlist
    pub fn create_playlist(&mut self, request: CreatePlaylist) -> Result<Playlist> {
        if request.name.trim().is_empty() {
            return Err(AuroraError::invalid_input("playlist name must not be empty"));
        }

        let playlist = Playlist::new(request);
        let mut playlists = self.playlists.clone();
        playlists.push(playlist.clone());
        self.commit_playlists(playlists)?;

        debug!(playlist_id = %playlist.id, name = %playlist.name, "Created playlist");
        Ok(playlist)
    }

    /// Rename or re-describe a playlist
    pub fn update_playlist(&mut self, id: &PlaylistId, update: UpdatePlaylist) -> Result<Playlist> {
        let mut playlists = self.playlists.clone();
        let playlist = find_mut(&mut playlists, id)?;
        playlist.apply(update);
        let updated = playlist.clone();

        self.commit_playlists(playlists)?;
        Ok(updated)
    }

    /// Delete a playlist
    ///
    /// Clears the current playlist if it was the one deleted.
    pub fn delete_playlist(&mut self, id: &PlaylistId) -> Result<Playlist> {
        let index = self
            .playlists
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| AuroraError::PlaylistNotFound(id.clone()))?;

        let mut playlists = self.playlists.clone();
        let removed = playlists.remove(index);
        self.commit_playlists(playlists)?;

        if self.current.as_ref() == Some(id) {
            self.current = None;
        }

        debug!(playlist_id = %id, "Deleted playlist");
        Ok(removed)
    }

    /// Append a track to a playlist
    ///
    /// A playlist holds each track at most once.
    pub fn add_to_playlist(&mut self, id: &PlaylistId, track: Track) -> Result<()> {
        let mut playlists = self.playlists.clone();
        let playlist = find_mut(&mut playlists, id)?;
        if playlist.contains_track(&track.id) {
            return Err(AuroraError::DuplicateTrackInPlaylist {
                playlist_id: id.clone(),
                track_id: track.id,
            });
        }

        playlist.tracks.push(track);
        playlist.touch();
        self.commit_playlists(playlists)
    }

    /// Remove a track from a playlist
    ///
    /// Returns whether the track was present.
    pub fn remove_from_playlist(&mut self, id: &PlaylistId, track_id: &TrackId) -> Result<bool> {
        let mut playlists = self.playlists.clone();
        let playlist = find_mut(&mut playlists, id)?;
        let before = playlist.tracks.len();
        playlist.tracks.retain(|t| &t.id != track_id);
        let removed = playlist.tracks.len() != before;
        playlist.touch();

        self.commit_playlists(playlists)?;
        Ok(removed)
    }

    /// Mark a playlist (or favorites) as the one being played
    pub fn play_playlist(&mut self, id: &PlaylistId) -> Result<Playlist> {
        let playlist = self
            .get_playlist(id)
            .ok_or_else(|| AuroraError::PlaylistNotFound(id.clone()))?;
        self.current = Some(id.clone());
        Ok(playlist)
    }

    /// Playlist being played, if any
    pub fn current_playlist(&self) -> Option<Playlist> {
        self.current.as_ref().and_then(|id| self.get_playlist(id))
    }

    /// Look up a playlist, including the virtual favorites playlist
    pub fn get_playlist(&self, id: &PlaylistId) -> Option<Playlist> {
        if id.is_favorites() {
            return Some(self.favorites_playlist());
        }
        self.playlists.iter().find(|p| &p.id == id).cloned()
    }

    /// User playlists in creation order (favorites excluded)
    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    /// Favorites followed by every user playlist
    pub fn all_playlists(&self) -> Vec<Playlist> {
        std::iter::once(self.favorites_playlist())
            .chain(self.playlists.iter().cloned())
            .collect()
    }

    // ===== Favorites =====

    /// Add a track to favorites
    ///
    /// Returns `false` if it already was a favorite.
    pub fn add_to_favorites(&mut self, track: Track) -> Result<bool> {
        if self.is_favorite(&track.id) {
            return Ok(false);
        }

        let mut favorites = self.favorites.clone();
        favorites.push(track);
        self.commit_favorites(favorites)?;
        Ok(true)
    }

    /// Remove a track from favorites
    ///
    /// Returns whether it was a favorite.
    pub fn remove_from_favorites(&mut self, track_id: &TrackId) -> Result<bool> {
        if !self.is_favorite(track_id) {
            return Ok(false);
        }

        let favorites = self
            .favorites
            .iter()
            .filter(|t| &t.id != track_id)
            .cloned()
            .collect();
        self.commit_favorites(favorites)?;
        Ok(true)
    }

    /// Flip a track's favorite flag
    ///
    /// Returns whether the track is a favorite afterwards.
    pub fn toggle_favorite(&mut self, track: Track) -> Result<bool> {
        if self.is_favorite(&track.id) {
            self.remove_from_favorites(&track.id)?;
            Ok(false)
        } else {
            self.add_to_favorites(track)
        }
    }

    /// Whether a track is a favorite
    pub fn is_favorite(&self, track_id: &TrackId) -> bool {
        self.favorites.iter().any(|t| &t.id == track_id)
    }

    /// Favorite tracks in the order they were added
    pub fn favorites(&self) -> &[Track] {
        &self.favorites
    }

    /// Favorites as a virtual playlist
    pub fn favorites_playlist(&self) -> Playlist {
        Playlist::favorites(self.favorites.clone())
    }

    // ===== Internal =====

    // In-memory state is only replaced once the backend accepted the write

    fn commit_playlists(&mut self, playlists: Vec<Playlist>) -> Result<()> {
        let json = serde_json::to_string(&playlists)?;
        self.store.set(PLAYLISTS_KEY, &json)?;
        self.playlists = playlists;
        Ok(())
    }

    fn commit_favorites(&mut self, favorites: Vec<Track>) -> Result<()> {
        let json = serde_json::to_string(&favorites)?;
        self.store.set(FAVORITES_KEY, &json)?;
        self.favorites = favorites;
        Ok(())
    }
}

fn find_mut<'a>(playlists: &'a mut [Playlist], id: &PlaylistId) -> Result<&'a mut Playlist> {
    playlists
        .iter_mut()
        .find(|p| &p.id == id)
        .ok_or_else(|| AuroraError::PlaylistNotFound(id.clone()))
}

/// Read a JSON list, treating unparsable content as empty
fn load_list<S: KeyValueStore, T: DeserializeOwned>(store: &S, key: &str) -> Result<Vec<T>> {
    let Some(raw) = store.get(key)? else {
        return Ok(Vec::new());
    };

    match serde_json::from_str(&raw) {
        Ok(items) => Ok(items),
        Err(e) => {
            error!(key, error = %e, "Discarding unreadable persisted data");
            Ok(Vec::new())
        }
    }
}
