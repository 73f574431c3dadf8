//! Shared helpers for playback integration tests

#![allow(dead_code)]

use aurora_core::{SourceLocator, Track, TrackId};
use aurora_playback::{AudioOutput, DeviceEvent, PlaybackConfig, PlaybackEngine};
use std::time::Duration;

/// Command received by [`RecordingOutput`]
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Load(SourceLocator),
    Play,
    Pause,
    Seek(Duration),
    SetVolume(f32),
}

/// Output device that records every command
#[derive(Debug, Default)]
pub struct RecordingOutput {
    pub commands: Vec<Command>,
}

impl RecordingOutput {
    /// Take the commands recorded so far
    pub fn take(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

    /// Sources passed to `load`, in order
    pub fn loads(&self) -> Vec<&SourceLocator> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                Command::Load(source) => Some(source),
                _ => None,
            })
            .collect()
    }
}

impl AudioOutput for RecordingOutput {
    fn load(&mut self, source: &SourceLocator) {
        self.commands.push(Command::Load(source.clone()));
    }

    fn play(&mut self) {
        self.commands.push(Command::Play);
    }

    fn pause(&mut self) {
        self.commands.push(Command::Pause);
    }

    fn seek(&mut self, position: Duration) {
        self.commands.push(Command::Seek(position));
    }

    fn set_volume(&mut self, gain: f32) {
        self.commands.push(Command::SetVolume(gain));
    }
}

/// Install a test subscriber (ignored when one is already set)
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("aurora_playback=debug")
        .with_test_writer()
        .try_init();
}

pub fn create_track(id: &str) -> Track {
    Track::new(
        TrackId::new(id),
        format!("Track {id}"),
        format!("Artist {id}"),
        SourceLocator::new(format!("/music/{id}.mp3")),
    )
}

/// Engine with a fixed shuffle seed and the recorded start-up commands cleared
pub fn engine() -> PlaybackEngine<RecordingOutput> {
    init_tracing();
    let mut engine = PlaybackEngine::new(
        RecordingOutput::default(),
        PlaybackConfig {
            shuffle_seed: Some(1234),
            ..PlaybackConfig::default()
        },
    );
    engine.device_mut().take();
    engine
}

/// Engine holding the given tracks, first one current, nothing started
pub fn engine_with(ids: &[&str]) -> PlaybackEngine<RecordingOutput> {
    let mut engine = engine();
    for id in ids {
        engine.add_track(create_track(id));
    }
    engine.device_mut().take();
    engine.drain_events();
    engine
}

/// Id of the current track as a string
pub fn current(engine: &PlaybackEngine<RecordingOutput>) -> Option<String> {
    engine
        .state()
        .current_track_id
        .map(|id| id.as_str().to_string())
}

/// Deliver a device event for the current track
pub fn emit(engine: &mut PlaybackEngine<RecordingOutput>, event: DeviceEvent) {
    let source = engine
        .current_track()
        .map(|t| t.source.clone())
        .expect("no current track");
    engine.handle_device_event(&source, event);
}
