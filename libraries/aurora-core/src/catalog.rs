//! In-memory track catalog
//!
//! Holds every track known to the session in upload order. All lookups
//! return `Option`: deleted or unknown ids are ordinary conditions.

use crate::types::{Track, TrackId};

/// Insertion-ordered collection of tracks, unique by id
#[derive(Debug, Clone, Default)]
pub struct TrackCatalog {
    tracks: Vec<Track>,
}

impl TrackCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self { tracks: Vec::new() }
    }

    /// Insert a track at the end
    ///
    /// Returns `false` (and leaves the catalog untouched) if a track with the
    /// same id is already present.
    pub fn insert(&mut self, track: Track) -> bool {
        if self.contains(&track.id) {
            return false;
        }
        self.tracks.push(track);
        true
    }

    /// Remove a track by id
    pub fn remove(&mut self, id: &TrackId) -> Option<Track> {
        let index = self.tracks.iter().position(|t| &t.id == id)?;
        Some(self.tracks.remove(index))
    }

    /// Look up a track by id
    pub fn get(&self, id: &TrackId) -> Option<&Track> {
        self.tracks.iter().find(|t| &t.id == id)
    }

    /// Whether a track with this id exists
    pub fn contains(&self, id: &TrackId) -> bool {
        self.get(id).is_some()
    }

    /// Iterate over tracks in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter()
    }

    /// Tracks whose title or artist contains `term`, ignoring case
    ///
    /// An empty term matches every track.
    pub fn search<'a>(&'a self, term: &str) -> impl Iterator<Item = &'a Track> + 'a {
        let needle = term.to_lowercase();
        self.tracks.iter().filter(move |t| {
            t.title.to_lowercase().contains(&needle) || t.artist.to_lowercase().contains(&needle)
        })
    }

    /// Number of tracks
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
