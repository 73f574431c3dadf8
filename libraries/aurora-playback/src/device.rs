//! Audio output device contract
//!
//! The engine never decodes audio. It drives an external device through
//! fire-and-forget commands and learns what happened through events.

use std::time::Duration;

use aurora_core::SourceLocator;

/// Platform-agnostic audio output
///
/// Commands return nothing: the device reports progress and failures back
/// as [`DeviceEvent`]s. Redundant commands (play while playing, load of the
/// loaded source) must be harmless.
pub trait AudioOutput {
    /// Open a source, replacing whatever was loaded
    fn load(&mut self, source: &SourceLocator);

    /// Start or resume playback of the loaded source
    fn play(&mut self);

    /// Pause playback, keeping the position
    fn pause(&mut self);

    /// Move the play head
    fn seek(&mut self, position: Duration);

    /// Set the output gain (0.0 = silent, 1.0 = unity)
    fn set_volume(&mut self, gain: f32);
}

impl<D: AudioOutput + ?Sized> AudioOutput for Box<D> {
    fn load(&mut self, source: &SourceLocator) {
        (**self).load(source);
    }

    fn play(&mut self) {
        (**self).play();
    }

    fn pause(&mut self) {
        (**self).pause();
    }

    fn seek(&mut self, position: Duration) {
        (**self).seek(position);
    }

    fn set_volume(&mut self, gain: f32) {
        (**self).set_volume(gain);
    }
}

/// Events raised by the device
///
/// Each event is delivered together with the [`SourceLocator`] that produced
/// it, so events from a previously loaded source can be told apart.
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceEvent {
    /// Duration of the loaded source is known
    MetadataReady {
        /// Total duration
        duration: Duration,
    },

    /// Periodic play-head update
    PositionTick {
        /// Current position
        position: Duration,
    },

    /// Natural end of playback
    Ended,

    /// The device started opening the source
    LoadStarted,

    /// Enough data is buffered to play
    CanPlay,

    /// The source could not be opened or decoded
    Error {
        /// Reason reported by the device
        reason: String,
    },
}
