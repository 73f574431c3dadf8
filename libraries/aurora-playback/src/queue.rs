//! Playback queue
//!
//! Ordered list of track ids defining non-shuffle traversal order. The queue
//! is replaced wholesale when the user plays a different collection; it is
//! never reordered by shuffle.

use aurora_core::TrackId;

/// Ordered sequence of track ids
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Queue {
    tracks: Vec<TrackId>,
}

impl Queue {
    /// Create new empty queue
    pub fn new() -> Self {
        Self { tracks: Vec::new() }
    }

    /// Replace the whole queue
    pub fn replace(&mut self, tracks: Vec<TrackId>) {
        self.tracks = tracks;
    }

    /// Append a track id to the end
    pub fn push(&mut self, id: TrackId) {
        self.tracks.push(id);
    }

    /// Remove every occurrence of `id`
    ///
    /// Returns whether anything was removed.
    pub fn remove(&mut self, id: &TrackId) -> bool {
        let before = self.tracks.len();
        self.tracks.retain(|t| t != id);
        self.tracks.len() != before
    }

    /// Index of the first occurrence of `id`
    pub fn position_of(&self, id: &TrackId) -> Option<usize> {
        self.tracks.iter().position(|t| t == id)
    }

    /// Track id at `index`
    pub fn get(&self, index: usize) -> Option<&TrackId> {
        self.tracks.get(index)
    }

    /// Whether `id` is queued
    pub fn contains(&self, id: &TrackId) -> bool {
        self.tracks.contains(id)
    }

    /// Iterate over queued ids in order
    pub fn iter(&self) -> impl Iterator<Item = &TrackId> {
        self.tracks.iter()
    }

    /// Queued ids as a slice
    pub fn as_slice(&self) -> &[TrackId] {
        &self.tracks
    }

    /// Number of queued tracks
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
