//! Track domain type

use crate::types::{SourceLocator, TrackId};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Artist assigned to uploads that carry no tag information
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// Audio track
///
/// Immutable once created. The catalog owns tracks; everything else refers to
/// them by [`TrackId`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Track duration, unknown until the device has read the metadata
    pub duration: Option<Duration>,

    /// Locator handed to the audio output device
    pub source: SourceLocator,
}

impl Track {
    /// Create a new track
    pub fn new(
        id: TrackId,
        title: impl Into<String>,
        artist: impl Into<String>,
        source: SourceLocator,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            artist: artist.into(),
            duration: None,
            source,
        }
    }

    /// Create a track for a freshly uploaded file
    ///
    /// The title is the file name without its extension and the artist is
    /// [`UNKNOWN_ARTIST`].
    pub fn from_upload(
        file_name: &str,
        source: SourceLocator,
        duration: Option<Duration>,
    ) -> Self {
        Self {
            id: TrackId::generate(),
            title: strip_extension(file_name).to_string(),
            artist: UNKNOWN_ARTIST.to_string(),
            duration,
            source,
        }
    }

    /// Builder-style duration setter
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }
}

fn strip_extension(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(dot) if dot > 0 && dot + 1 < file_name.len() => &file_name[..dot],
        _ => file_name,
    }
}
