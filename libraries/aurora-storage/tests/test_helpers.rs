//! Test helpers and fixtures for storage integration tests
//!
//! File-backed stores use REAL directories (tempfile) so reopen behavior is
//! exercised the way it runs in production.

#![allow(dead_code)]

use aurora_core::{SourceLocator, Track, TrackId};
use aurora_storage::{FileStore, PlaylistStore};
use tempfile::TempDir;

/// Playlist store on a temporary directory that cleans up on drop
pub struct TestStore {
    pub store: PlaylistStore<FileStore>,
    pub dir: TempDir,
}

impl TestStore {
    /// Create an empty file-backed playlist store
    pub fn new() -> Self {
        init_tracing();
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let backend = FileStore::open(dir.path()).expect("Failed to open file store");
        let store = PlaylistStore::open(backend).expect("Failed to open playlist store");
        Self { store, dir }
    }

    /// Open a second store over the same directory
    pub fn reopen(&self) -> PlaylistStore<FileStore> {
        let backend = FileStore::open(self.dir.path()).expect("Failed to open file store");
        PlaylistStore::open(backend).expect("Failed to reopen playlist store")
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("aurora_storage=debug")
        .with_test_writer()
        .try_init();
}

pub fn create_test_track(id: &str) -> Track {
    Track::new(
        TrackId::new(id),
        format!("Track {id}"),
        "Test Artist",
        SourceLocator::new(format!("/music/{id}.mp3")),
    )
}
