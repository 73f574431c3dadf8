//! Aurora Player - Playback Engine
//!
//! Platform-agnostic playback state machine for Aurora Player.
//!
//! This crate provides:
//! - The playback engine (play/pause, seek, next/previous, track-end handling)
//! - Queue traversal with shuffle and repeat (Off, All, One)
//! - Volume and mute forwarding to the output device
//! - A notification queue for the UI and error surface
//! - The session announcer that mirrors "now playing" into the OS
//!
//! # Architecture
//!
//! `aurora-playback` never decodes audio. The output device is an injected
//! [`AudioOutput`] that receives fire-and-forget commands and reports back
//! through [`DeviceEvent`]s, scoped to the source that produced them.
//!
//! # Example: Basic Playback
//!
//! ```rust
//! use aurora_core::{SourceLocator, Track, TrackId};
//! use aurora_playback::{AudioOutput, PlaybackConfig, PlaybackEngine};
//! use std::time::Duration;
//!
//! #[derive(Default)]
//! struct SilentOutput;
//!
//! impl AudioOutput for SilentOutput {
//!     fn load(&mut self, _source: &SourceLocator) {}
//!     fn play(&mut self) {}
//!     fn pause(&mut self) {}
//!     fn seek(&mut self, _position: Duration) {}
//!     fn set_volume(&mut self, _gain: f32) {}
//! }
//!
//! let mut engine = PlaybackEngine::new(SilentOutput, PlaybackConfig::default());
//!
//! let track = Track::new(
//!     TrackId::new("1"),
//!     "My Song",
//!     "Artist Name",
//!     SourceLocator::new("/music/song.mp3"),
//! );
//! engine.add_track(track.clone());
//! engine.play(&track);
//!
//! assert!(engine.state().is_playing);
//! ```
//!
//! # Example: Shuffle and Repeat
//!
//! ```rust
//! # use aurora_core::SourceLocator;
//! # use aurora_playback::{AudioOutput, PlaybackConfig, PlaybackEngine, RepeatMode};
//! # use std::time::Duration;
//! # struct SilentOutput;
//! # impl AudioOutput for SilentOutput {
//! #     fn load(&mut self, _source: &SourceLocator) {}
//! #     fn play(&mut self) {}
//! #     fn pause(&mut self) {}
//! #     fn seek(&mut self, _position: Duration) {}
//! #     fn set_volume(&mut self, _gain: f32) {}
//! # }
//! let mut engine = PlaybackEngine::new(SilentOutput, PlaybackConfig::default());
//!
//! engine.toggle_shuffle();
//! engine.toggle_repeat();
//!
//! assert!(engine.state().shuffle);
//! assert_eq!(engine.state().repeat, RepeatMode::All);
//! ```

mod announcer;
mod config;
mod device;
mod engine;
mod error;
pub mod events;
mod queue;
pub mod selection;
pub mod types;
mod volume;

// Public exports
pub use announcer::{CommandSender, MediaSession, NowPlaying, SessionAnnouncer, TransportCommand};
pub use crate::config::PlaybackConfig;
pub use device::{AudioOutput, DeviceEvent};
pub use engine::PlaybackEngine;
pub use error::{PlaybackError, Result};
pub use events::PlaybackEvent;
pub use queue::Queue;
pub use types::{PlaybackState, PlaybackStatus, RepeatMode};
pub use volume::Volume;
