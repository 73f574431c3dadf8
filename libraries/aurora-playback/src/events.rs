//! Playback Events
//!
//! Notifications for UI synchronization. Events are queued by the engine
//! at key points and drained by the host:
//! - Status changes (playing, paused, loading, stopped)
//! - Track changes and natural track ends
//! - Queue, shuffle/repeat and volume changes
//! - Device errors

use crate::types::{PlaybackStatus, RepeatMode};
use aurora_core::TrackId;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Events emitted by the playback engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// Derived playback status changed
    StatusChanged {
        /// The new status
        status: PlaybackStatus,
    },

    /// Current track changed
    TrackChanged {
        /// ID of the new current track (`None` when cleared)
        track_id: Option<TrackId>,
        /// ID of the previous track (if any)
        previous_track_id: Option<TrackId>,
    },

    /// Track reached its natural end
    TrackFinished {
        /// ID of the finished track
        track_id: TrackId,
    },

    /// Position moved by a seek or restart
    PositionChanged {
        /// New position
        position: Duration,
    },

    /// Queue contents changed
    QueueChanged {
        /// New queue length
        length: usize,
    },

    /// Shuffle or repeat changed
    ModesChanged {
        /// Shuffle flag
        shuffle: bool,
        /// Repeat mode
        repeat: RepeatMode,
    },

    /// Volume changed
    VolumeChanged {
        /// New volume level (0-100)
        level: u8,
        /// Whether audio is muted
        is_muted: bool,
    },

    /// Error occurred during playback
    Error {
        /// Error message
        message: String,
    },
}
