//! Session announcer
//!
//! Mirrors "now playing" into an OS media session and relays its transport
//! controls (play, pause, previous, next) back into the engine.
//!
//! Transport commands travel through a channel and are only applied when
//! the owner calls [`SessionAnnouncer::dispatch`], so they never race with
//! other engine calls. Handlers are cleared when the announcer is detached
//! or dropped.

use std::sync::mpsc::{self, Receiver, Sender};

use tracing::debug;

use crate::device::AudioOutput;
use crate::engine::PlaybackEngine;

/// Transport controls raised by the media session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportCommand {
    /// Resume playback
    Play,
    /// Pause playback
    Pause,
    /// Go to the previous track
    PreviousTrack,
    /// Skip to the next track
    NextTrack,
}

/// Metadata published to the media session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NowPlaying {
    /// Track title
    pub title: String,
    /// Track artist
    pub artist: String,
    /// Whether playback is running
    pub is_playing: bool,
}

/// Handle given to the media session for raising transport commands
#[derive(Debug, Clone)]
pub struct CommandSender {
    tx: Sender<TransportCommand>,
}

impl CommandSender {
    /// Queue a command for the next dispatch
    ///
    /// Returns `false` once the announcer is gone.
    pub fn send(&self, command: TransportCommand) -> bool {
        self.tx.send(command).is_ok()
    }
}

/// OS "now playing" surface
pub trait MediaSession {
    /// Whether the platform offers a media session at all
    fn is_available(&self) -> bool;

    /// Publish metadata and playback state
    fn set_now_playing(&mut self, now_playing: &NowPlaying);

    /// Register the transport command handler
    fn set_action_handler(&mut self, handler: CommandSender);

    /// Unregister every transport command handler
    fn clear_action_handlers(&mut self);
}

/// Adapter between a [`MediaSession`] and a [`PlaybackEngine`]
pub struct SessionAnnouncer<S: MediaSession> {
    session: S,
    commands: Option<Receiver<TransportCommand>>,
    last_published: Option<NowPlaying>,
}

impl<S: MediaSession> SessionAnnouncer<S> {
    /// Attach to a media session
    ///
    /// On platforms without a session every later call is a no-op.
    pub fn attach(mut session: S) -> Self {
        let commands = if session.is_available() {
            let (tx, rx) = mpsc::channel();
            session.set_action_handler(CommandSender { tx });
            Some(rx)
        } else {
            debug!("Media session unavailable, announcer disabled");
            None
        };

        Self {
            session,
            commands,
            last_published: None,
        }
    }

    /// Whether handlers are registered
    pub fn is_attached(&self) -> bool {
        self.commands.is_some()
    }

    /// The wrapped session
    pub fn session(&self) -> &S {
        &self.session
    }

    /// Publish the engine's now-playing state if it changed
    ///
    /// Once the current track is gone the last metadata is republished as paused.
    pub fn sync<D: AudioOutput>(&mut self, engine: &PlaybackEngine<D>) {
        if !self.is_attached() {
            return;
        }

        let now_playing = match (engine.current_track(), &self.last_published) {
            (Some(track), _) => NowPlaying {
                title: track.title.clone(),
                artist: track.artist.clone(),
                is_playing: engine.state().is_playing,
            },
            (None, Some(last)) => NowPlaying {
                is_playing: false,
                ..last.clone()
            },
            (None, None) => return,
        };

        if self.last_published.as_ref() != Some(&now_playing) {
            self.session.set_now_playing(&now_playing);
            self.last_published = Some(now_playing);
        }
    }

    /// Apply queued transport commands to the engine, then sync
    ///
    /// Returns the number of commands applied.
    pub fn dispatch<D: AudioOutput>(&mut self, engine: &mut PlaybackEngine<D>) -> usize {
        let Some(commands) = &self.commands else {
            return 0;
        };

        let mut applied = 0;
        while let Ok(command) = commands.try_recv() {
            debug!(?command, "Applying transport command");
            match command {
                TransportCommand::Play => engine.resume(),
                TransportCommand::Pause => engine.pause(),
                TransportCommand::PreviousTrack => engine.previous(),
                TransportCommand::NextTrack => engine.next(),
            }
            applied += 1;
        }

        self.sync(engine);
        applied
    }

    /// Clear the session handlers
    ///
    /// Commands queued afterwards are never applied.
    pub fn detach(&mut self) {
        if self.commands.take().is_some() {
            self.session.clear_action_handlers();
            self.last_published = None;
        }
    }
}

impl<S: MediaSession> Drop for SessionAnnouncer<S> {
    fn drop(&mut self) {
        self.detach();
    }
}
