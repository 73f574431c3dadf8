//! Core types for playback management

use aurora_core::TrackId;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Snapshot of the engine's playback state
///
/// `is_playing` implies `current_track_id.is_some()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackState {
    /// Track the engine points at (loaded, playing or paused)
    pub current_track_id: Option<TrackId>,

    /// Whether playback is running
    pub is_playing: bool,

    /// Play position within the current track
    pub position: Duration,

    /// Duration of the current track, unknown until metadata loads
    pub duration: Option<Duration>,

    /// Whether the device is still opening the current source
    pub is_loading: bool,

    /// Shuffle flag
    pub shuffle: bool,

    /// Repeat mode
    pub repeat: RepeatMode,
}

impl PlaybackState {
    /// Derived status
    pub fn status(&self) -> PlaybackStatus {
        match (&self.current_track_id, self.is_loading, self.is_playing) {
            (None, _, _) => PlaybackStatus::Stopped,
            (Some(_), true, _) => PlaybackStatus::Loading,
            (Some(_), false, true) => PlaybackStatus::Playing,
            (Some(_), false, false) => PlaybackStatus::Paused,
        }
    }
}

/// Playback status derived from [`PlaybackState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackStatus {
    /// No track loaded
    Stopped,

    /// Loading the current track
    Loading,

    /// Currently playing
    Playing,

    /// Paused mid-track (or loaded, not started)
    Paused,
}

/// Repeat mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatMode {
    /// Stop when queue ends
    #[default]
    None,

    /// Loop entire queue
    All,

    /// Repeat current track
    One,
}

impl RepeatMode {
    /// Next mode in the `None -> All -> One -> None` cycle
    pub fn cycle(self) -> Self {
        match self {
            Self::None => Self::All,
            Self::All => Self::One,
            Self::One => Self::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> PlaybackState {
        PlaybackState {
            current_track_id: None,
            is_playing: false,
            position: Duration::ZERO,
            duration: None,
            is_loading: false,
            shuffle: false,
            repeat: RepeatMode::None,
        }
    }

    #[test]
    fn repeat_cycles_through_all_modes() {
        assert_eq!(RepeatMode::None.cycle(), RepeatMode::All);
        assert_eq!(RepeatMode::All.cycle(), RepeatMode::One);
        assert_eq!(RepeatMode::One.cycle(), RepeatMode::None);
    }

    #[test]
    fn status_is_derived_from_flags() {
        let mut s = state();
        assert_eq!(s.status(), PlaybackStatus::Stopped);

        s.current_track_id = Some(TrackId::new("1"));
        s.is_loading = true;
        assert_eq!(s.status(), PlaybackStatus::Loading);

        s.is_loading = false;
        assert_eq!(s.status(), PlaybackStatus::Paused);

        s.is_playing = true;
        assert_eq!(s.status(), PlaybackStatus::Playing);
    }
}
