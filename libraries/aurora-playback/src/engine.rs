//! Playback engine - core orchestration
//!
//! Owns the playback state, the catalog and the queue, drives the output
//! device and reacts to its events.

use std::time::Duration;

use aurora_core::{SourceLocator, Track, TrackCatalog, TrackId};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use crate::{
    config::PlaybackConfig,
    device::{AudioOutput, DeviceEvent},
    error::PlaybackError,
    events::PlaybackEvent,
    queue::Queue,
    selection,
    types::{PlaybackState, PlaybackStatus, RepeatMode},
    volume::Volume,
};

/// Playback engine
///
/// Single-threaded state machine. Every operation takes `&mut self`, issues
/// fire-and-forget commands to the device `D` and queues notifications that
/// the host drains with [`PlaybackEngine::drain_events`].
pub struct PlaybackEngine<D: AudioOutput> {
    // Output device
    device: D,

    // Known tracks and traversal order
    catalog: TrackCatalog,
    queue: Queue,

    // Playback state
    current: Option<TrackId>,
    is_playing: bool,
    position: Duration,
    duration: Option<Duration>,
    is_loading: bool,

    // Modes
    shuffle: bool,
    repeat: RepeatMode,
    volume: Volume,
    restart_threshold: Duration,

    // Shuffle randomness
    rng: StdRng,

    // Event queue for UI synchronization
    pending_events: Vec<PlaybackEvent>,
    last_status: PlaybackStatus,
}

impl<D: AudioOutput> PlaybackEngine<D> {
    /// Create a new engine around an output device
    ///
    /// The device receives the configured volume immediately.
    pub fn new(mut device: D, config: PlaybackConfig) -> Self {
        let volume = Volume::new(config.volume);
        device.set_volume(volume.gain());

        let rng = match config.shuffle_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            device,
            catalog: TrackCatalog::new(),
            queue: Queue::new(),
            current: None,
            is_playing: false,
            position: Duration::ZERO,
            duration: None,
            is_loading: false,
            shuffle: config.shuffle,
            repeat: config.repeat,
            volume,
            restart_threshold: config.restart_threshold(),
            rng,
            pending_events: Vec::new(),
            last_status: PlaybackStatus::Stopped,
        }
    }

    // ===== Playback Control =====

    /// Play a track
    ///
    /// A different track is loaded from the start; the current track just
    /// resumes. Tracks unknown to the catalog are added to it (not to the
    /// queue).
    pub fn play(&mut self, track: &Track) {
        if self.catalog.insert(track.clone()) {
            debug!(track_id = %track.id, "Playing track outside the catalog");
        }

        if self.current.as_ref() != Some(&track.id) {
            let source = self
                .catalog
                .get(&track.id)
                .map_or_else(|| track.source.clone(), |t| t.source.clone());
            self.load(track.id.clone(), &source);
        }

        self.is_playing = true;
        self.device.play();
        self.sync_status();
    }

    /// Flip between playing and paused
    ///
    /// Does nothing without a current track.
    pub fn toggle_play_pause(&mut self) {
        if self.current.is_none() {
            return;
        }

        if self.is_playing {
            self.pause();
        } else {
            self.resume();
        }
    }

    /// Resume the current track
    pub fn resume(&mut self) {
        if self.current.is_none() || self.is_playing {
            return;
        }

        self.is_playing = true;
        self.device.play();
        self.sync_status();
    }

    /// Pause playback
    pub fn pause(&mut self) {
        if !self.is_playing {
            return;
        }

        self.is_playing = false;
        self.device.pause();
        self.sync_status();
    }

    /// Seek within the current track
    ///
    /// Clamped to the duration once it is known.
    pub fn seek(&mut self, position: Duration) {
        if self.current.is_none() {
            return;
        }

        let position = self.duration.map_or(position, |d| position.min(d));
        self.device.seek(position);
        self.position = position;
        self.emit_position_changed();
    }

    /// Skip to the next track
    ///
    /// Starts playback even when paused. Empty queue: nothing happens.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) {
        match self.pick_next() {
            Some(id) => {
                self.switch_to(id, true);
            }
            None => debug!("No next track"),
        }
    }

    /// Go to the previous track
    ///
    /// Past the restart threshold this restarts the current track instead.
    pub fn previous(&mut self) {
        if self.current.is_some() && self.position > self.restart_threshold {
            debug!(position = ?self.position, "Restarting current track");
            self.seek(Duration::ZERO);
            return;
        }

        let picked = selection::previous_track(
            self.queue.as_slice(),
            self.current.as_ref(),
            self.shuffle,
            &mut self.rng,
        )
        .cloned();

        match picked {
            Some(id) => {
                self.switch_to(id, true);
            }
            None => debug!("No previous track"),
        }
    }

    // ===== Catalog and Queue =====

    /// Add a track to the catalog and the end of the queue
    ///
    /// Becomes current (loaded, not started) when nothing is current.
    pub fn add_track(&mut self, track: Track) {
        if self.catalog.contains(&track.id) {
            debug!(track_id = %track.id, "Track already in catalog, ignoring");
            return;
        }

        let id = track.id.clone();
        let source = track.source.clone();
        self.catalog.insert(track);
        self.queue.push(id.clone());
        self.emit_queue_changed();

        if self.current.is_none() {
            self.load(id, &source);
        }
        self.sync_status();
    }

    /// Remove a track from the catalog and the queue
    ///
    /// Removing the current track moves to the track `next` would have
    /// picked, keeping the play/pause state, or clears playback when there
    /// is none.
    pub fn remove_track(&mut self, id: &TrackId) -> Option<Track> {
        let was_current = self.current.as_ref() == Some(id);
        let replacement = if was_current {
            self.pick_next().filter(|next| next != id)
        } else {
            None
        };

        let removed = self.catalog.remove(id);
        if self.queue.remove(id) {
            self.emit_queue_changed();
        }

        if was_current {
            match replacement {
                Some(next) => {
                    let keep_playing = self.is_playing;
                    if !self.switch_to(next, keep_playing) {
                        self.clear_current();
                    }
                }
                None => self.clear_current(),
            }
        }

        removed
    }

    /// Replace the queue wholesale
    pub fn set_queue(&mut self, ids: Vec<TrackId>) {
        self.queue.replace(ids);
        self.emit_queue_changed();
    }

    /// Play a collection from its first track
    ///
    /// Unknown tracks are added to the catalog and the queue becomes the
    /// collection. An empty slice does nothing.
    pub fn play_tracks(&mut self, tracks: &[Track]) {
        let Some(first) = tracks.first() else {
            return;
        };

        for track in tracks {
            self.catalog.insert(track.clone());
        }
        self.set_queue(tracks.iter().map(|t| t.id.clone()).collect());
        self.play(first);
    }

    // ===== Shuffle and Repeat =====

    /// Flip shuffle (the queue order is untouched)
    pub fn toggle_shuffle(&mut self) {
        self.set_shuffle(!self.shuffle);
    }

    /// Set shuffle
    pub fn set_shuffle(&mut self, shuffle: bool) {
        self.shuffle = shuffle;
        self.emit_modes_changed();
    }

    /// Cycle repeat `None -> All -> One -> None`
    pub fn toggle_repeat(&mut self) {
        self.set_repeat(self.repeat.cycle());
    }

    /// Set repeat mode
    pub fn set_repeat(&mut self, repeat: RepeatMode) {
        self.repeat = repeat;
        self.emit_modes_changed();
    }

    // ===== Volume Control =====

    /// Set volume (0-100)
    ///
    /// Moving the level also unmutes.
    pub fn set_volume(&mut self, level: u8) {
        self.volume.set_level(level);
        self.volume.unmute();
        self.apply_volume();
    }

    /// Get current volume (0-100)
    pub fn volume(&self) -> u8 {
        self.volume.level()
    }

    /// Mute audio
    pub fn mute(&mut self) {
        self.volume.mute();
        self.apply_volume();
    }

    /// Unmute audio
    pub fn unmute(&mut self) {
        self.volume.unmute();
        self.apply_volume();
    }

    /// Toggle mute
    pub fn toggle_mute(&mut self) {
        self.volume.toggle_mute();
        self.apply_volume();
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.volume.is_muted()
    }

    // ===== State Queries =====

    /// Snapshot of the playback state
    pub fn state(&self) -> PlaybackState {
        PlaybackState {
            current_track_id: self.current.clone(),
            is_playing: self.is_playing,
            position: self.position,
            duration: self.duration,
            is_loading: self.is_loading,
            shuffle: self.shuffle,
            repeat: self.repeat,
        }
    }

    /// Derived playback status
    pub fn status(&self) -> PlaybackStatus {
        self.state().status()
    }

    /// Current track record
    pub fn current_track(&self) -> Option<&Track> {
        self.current.as_ref().and_then(|id| self.catalog.get(id))
    }

    /// Current track id
    pub fn current_track_id(&self) -> Option<&TrackId> {
        self.current.as_ref()
    }

    /// The queue
    pub fn queue(&self) -> &Queue {
        &self.queue
    }

    /// The track catalog
    pub fn catalog(&self) -> &TrackCatalog {
        &self.catalog
    }

    /// Track `next` would select
    ///
    /// Always `None` with shuffle on, since that pick is random.
    pub fn peek_next(&self) -> Option<&Track> {
        if self.shuffle {
            return None;
        }
        selection::following(self.queue.as_slice(), self.current.as_ref())
            .and_then(|id| self.catalog.get(id))
    }

    /// The output device
    pub fn device(&self) -> &D {
        &self.device
    }

    /// The output device (mutable)
    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    // ===== Device Events =====

    /// Apply an event raised by the device for `source`
    ///
    /// Events for anything but the current track's source are dropped.
    pub fn handle_device_event(&mut self, source: &SourceLocator, event: DeviceEvent) {
        if self.current_source() != Some(source) {
            debug!(%source, ?event, "Ignoring stale device event");
            return;
        }

        match event {
            DeviceEvent::MetadataReady { duration } => {
                self.duration = Some(duration);
                self.is_loading = false;
            }
            DeviceEvent::PositionTick { position } => {
                self.position = position;
            }
            DeviceEvent::LoadStarted => {
                self.is_loading = true;
            }
            DeviceEvent::CanPlay => {
                self.is_loading = false;
            }
            DeviceEvent::Ended => {
                self.handle_track_end();
            }
            DeviceEvent::Error { reason } => {
                self.handle_device_error(source.clone(), reason);
            }
        }

        self.sync_status();
    }

    /// Natural end of the current track
    fn handle_track_end(&mut self) {
        let Some(finished) = self.current.clone() else {
            return;
        };
        self.emit_track_finished(finished.clone());

        if let Some(duration) = self.duration {
            self.position = duration;
        }

        let advance = match self.repeat {
            RepeatMode::One => {
                debug!(track_id = %finished, "Repeating track");
                self.restart_playing();
                return;
            }
            RepeatMode::All => true,
            RepeatMode::None => selection::has_next_without_wrap(
                self.queue.as_slice(),
                self.current.as_ref(),
                self.shuffle,
            ),
        };

        match advance.then(|| self.pick_next()).flatten() {
            Some(id) if id == finished => self.restart_playing(),
            Some(id) => {
                if !self.switch_to(id, true) {
                    self.is_playing = false;
                }
            }
            None => {
                info!(track_id = %finished, "Reached end of queue, stopping");
                self.is_playing = false;
            }
        }
    }

    /// Device failed to open or decode the current source
    fn handle_device_error(&mut self, source: SourceLocator, reason: String) {
        let error = PlaybackError::DeviceLoad {
            locator: source,
            reason,
        };
        warn!(%error, "Playback device error");

        self.is_playing = false;
        self.is_loading = false;
        self.emit_error(error.to_string());
    }

    // ===== Internal =====

    /// Source of the current track
    fn current_source(&self) -> Option<&SourceLocator> {
        self.current_track().map(|t| &t.source)
    }

    /// Selection for `next` (and track-end advance)
    fn pick_next(&mut self) -> Option<TrackId> {
        selection::next_track(
            self.queue.as_slice(),
            self.current.as_ref(),
            self.shuffle,
            &mut self.rng,
        )
        .cloned()
    }

    /// Make `id` current, loading it unless it already is
    ///
    /// Returns `false` if the track has no catalog record.
    fn switch_to(&mut self, id: TrackId, play: bool) -> bool {
        if self.current.as_ref() != Some(&id) {
            let Some(source) = self.catalog.get(&id).map(|t| t.source.clone()) else {
                warn!(track_id = %id, "Queued track missing from catalog");
                self.emit_error(format!("Track {id} is not in the catalog"));
                return false;
            };
            self.load(id, &source);
        }

        self.is_playing = play;
        if play {
            self.device.play();
        }
        self.sync_status();
        true
    }

    /// Point at a new track and ask the device to open it
    fn load(&mut self, id: TrackId, source: &SourceLocator) {
        debug!(track_id = %id, %source, "Loading track");

        let previous = self.current.replace(id.clone());
        self.position = Duration::ZERO;
        self.duration = None;
        self.is_loading = true;
        self.device.load(source);
        self.emit_track_changed(Some(id), previous);
    }

    /// Seek to the start and keep playing the current track
    fn restart_playing(&mut self) {
        self.position = Duration::ZERO;
        self.device.seek(Duration::ZERO);
        self.is_playing = true;
        self.device.play();
        self.emit_position_changed();
        self.sync_status();
    }

    /// Drop the current track
    fn clear_current(&mut self) {
        let previous = self.current.take();
        if self.is_playing {
            self.device.pause();
        }

        self.is_playing = false;
        self.position = Duration::ZERO;
        self.duration = None;
        self.is_loading = false;
        self.emit_track_changed(None, previous);
        self.sync_status();
    }

    /// Push the current gain to the device
    fn apply_volume(&mut self) {
        self.device.set_volume(self.volume.gain());
        self.emit_volume_changed();
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns all events that occurred since the last call.
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    /// Emit a status event if the derived status moved
    fn sync_status(&mut self) {
        let status = self.status();
        if status != self.last_status {
            self.last_status = status;
            self.pending_events.push(PlaybackEvent::StatusChanged { status });
        }
    }

    /// Emit a track changed event
    fn emit_track_changed(&mut self, track_id: Option<TrackId>, previous_track_id: Option<TrackId>) {
        self.pending_events.push(PlaybackEvent::TrackChanged {
            track_id,
            previous_track_id,
        });
    }

    /// Emit a track finished event
    fn emit_track_finished(&mut self, track_id: TrackId) {
        self.pending_events.push(PlaybackEvent::TrackFinished { track_id });
    }

    /// Emit a position changed event
    fn emit_position_changed(&mut self) {
        self.pending_events.push(PlaybackEvent::PositionChanged {
            position: self.position,
        });
    }

    /// Emit a queue changed event
    fn emit_queue_changed(&mut self) {
        self.pending_events.push(PlaybackEvent::QueueChanged {
            length: self.queue.len(),
        });
    }

    /// Emit a modes changed event
    fn emit_modes_changed(&mut self) {
        self.pending_events.push(PlaybackEvent::ModesChanged {
            shuffle: self.shuffle,
            repeat: self.repeat,
        });
    }

    /// Emit a volume changed event
    fn emit_volume_changed(&mut self) {
        self.pending_events.push(PlaybackEvent::VolumeChanged {
            level: self.volume.level(),
            is_muted: self.volume.is_muted(),
        });
    }

    /// Emit an error event
    fn emit_error(&mut self, message: String) {
        self.pending_events.push(PlaybackEvent::Error { message });
    }
}
