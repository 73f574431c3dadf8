//! Integration tests for the playlist store
//!
//! Tests playlist operations including:
//! - CRUD and persistence across reopen
//! - Duplicate track rejection
//! - Favorites and the virtual favorites playlist
//! - Recovery from corrupt persisted data
//! - Failed writes leaving the store unchanged

mod test_helpers;

use aurora_core::{AuroraError, CreatePlaylist, PlaylistId, TrackId, UpdatePlaylist};
use aurora_storage::{
    KeyValueStore, MemoryStore, PlaylistStore, StorageError, FAVORITES_KEY, PLAYLISTS_KEY,
};
use test_helpers::*;

#[test]
fn test_create_and_get_playlist() {
    let mut test = TestStore::new();

    let playlist = test
        .store
        .create_playlist(CreatePlaylist {
            name: "My Mix".to_string(),
            description: Some("Best songs ever".to_string()),
            tracks: vec![create_test_track("1")],
        })
        .expect("Failed to create playlist");

    assert_eq!(playlist.name, "My Mix");
    assert_eq!(playlist.description, "Best songs ever");
    assert_eq!(playlist.tracks.len(), 1);

    let retrieved = test.store.get_playlist(&playlist.id).unwrap();
    assert_eq!(retrieved, playlist);
}

#[test]
fn test_create_rejects_blank_name() {
    let mut test = TestStore::new();

    let result = test.store.create_playlist(CreatePlaylist::named("   "));
    assert!(matches!(result, Err(AuroraError::InvalidInput(_))));
}

#[test]
fn test_playlists_survive_reopen() {
    let mut test = TestStore::new();
    let playlist = test
        .store
        .create_playlist(CreatePlaylist::named("Road Trip"))
        .unwrap();
    test.store
        .add_to_playlist(&playlist.id, create_test_track("1"))
        .unwrap();
    test.store.add_to_favorites(create_test_track("2")).unwrap();

    let reopened = test.reopen();

    let loaded = reopened.get_playlist(&playlist.id).unwrap();
    assert_eq!(loaded.name, "Road Trip");
    assert_eq!(loaded.track_ids(), vec![TrackId::new("1")]);
    assert!(reopened.is_favorite(&TrackId::new("2")));
}

#[test]
fn test_update_playlist() {
    let mut test = TestStore::new();
    let playlist = test
        .store
        .create_playlist(CreatePlaylist::named("Old"))
        .unwrap();

    let updated = test
        .store
        .update_playlist(
            &playlist.id,
            UpdatePlaylist {
                name: Some("New".to_string()),
                description: Some("Renamed".to_string()),
            },
        )
        .unwrap();

    assert_eq!(updated.name, "New");
    assert_eq!(updated.description, "Renamed");
    assert!(updated.updated_at >= playlist.updated_at);
    assert_eq!(test.reopen().get_playlist(&playlist.id).unwrap().name, "New");
}

#[test]
fn test_update_missing_playlist_fails() {
    let mut test = TestStore::new();

    let result = test
        .store
        .update_playlist(&PlaylistId::new("nope"), UpdatePlaylist::default());
    assert!(matches!(result, Err(AuroraError::PlaylistNotFound(_))));
}

#[test]
fn test_add_duplicate_track_is_rejected() {
    let mut test = TestStore::new();
    let playlist = test
        .store
        .create_playlist(CreatePlaylist::named("Mix"))
        .unwrap();
    test.store
        .add_to_playlist(&playlist.id, create_test_track("1"))
        .unwrap();

    let err = test
        .store
        .add_to_playlist(&playlist.id, create_test_track("1"))
        .unwrap_err();

    match err {
        AuroraError::DuplicateTrackInPlaylist {
            playlist_id,
            track_id,
        } => {
            assert_eq!(playlist_id, playlist.id);
            assert_eq!(track_id, TrackId::new("1"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(test.store.get_playlist(&playlist.id).unwrap().tracks.len(), 1);
}

#[test]
fn test_remove_from_playlist() {
    let mut test = TestStore::new();
    let playlist = test
        .store
        .create_playlist(CreatePlaylist::named("Mix"))
        .unwrap();
    for id in ["1", "2", "3"] {
        test.store
            .add_to_playlist(&playlist.id, create_test_track(id))
            .unwrap();
    }

    assert!(test
        .store
        .remove_from_playlist(&playlist.id, &TrackId::new("2"))
        .unwrap());
    assert!(!test
        .store
        .remove_from_playlist(&playlist.id, &TrackId::new("2"))
        .unwrap());

    let ids = test.store.get_playlist(&playlist.id).unwrap().track_ids();
    assert_eq!(ids, vec![TrackId::new("1"), TrackId::new("3")]);
}

#[test]
fn test_delete_clears_current_playlist() {
    let mut test = TestStore::new();
    let keep = test
        .store
        .create_playlist(CreatePlaylist::named("Keep"))
        .unwrap();
    let doomed = test
        .store
        .create_playlist(CreatePlaylist::named("Doomed"))
        .unwrap();

    test.store.play_playlist(&doomed.id).unwrap();
    assert_eq!(test.store.current_playlist().map(|p| p.id), Some(doomed.id.clone()));

    let removed = test.store.delete_playlist(&doomed.id).unwrap();
    assert_eq!(removed.name, "Doomed");
    assert!(test.store.current_playlist().is_none());
    assert_eq!(test.store.playlists().len(), 1);
    assert_eq!(test.store.playlists()[0].id, keep.id);

    assert!(matches!(
        test.store.delete_playlist(&doomed.id),
        Err(AuroraError::PlaylistNotFound(_))
    ));
}

#[test]
fn test_favorites_are_idempotent() {
    let mut test = TestStore::new();

    assert!(test.store.add_to_favorites(create_test_track("1")).unwrap());
    assert!(!test.store.add_to_favorites(create_test_track("1")).unwrap());
    assert_eq!(test.store.favorites().len(), 1);

    assert!(test.store.remove_from_favorites(&TrackId::new("1")).unwrap());
    assert!(!test.store.remove_from_favorites(&TrackId::new("1")).unwrap());
    assert!(!test.store.is_favorite(&TrackId::new("1")));
}

#[test]
fn test_toggle_favorite() {
    let mut test = TestStore::new();

    assert!(test.store.toggle_favorite(create_test_track("1")).unwrap());
    assert!(test.store.is_favorite(&TrackId::new("1")));

    assert!(!test.store.toggle_favorite(create_test_track("1")).unwrap());
    assert!(!test.store.is_favorite(&TrackId::new("1")));
}

#[test]
fn test_all_playlists_lists_favorites_first() {
    let mut test = TestStore::new();
    test.store
        .create_playlist(CreatePlaylist::named("A"))
        .unwrap();
    test.store
        .create_playlist(CreatePlaylist::named("B"))
        .unwrap();
    test.store.add_to_favorites(create_test_track("9")).unwrap();

    let all = test.store.all_playlists();
    let names: Vec<&str> = all.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Favorites", "A", "B"]);

    let favorites = &all[0];
    assert!(favorites.id.is_favorites());
    assert_eq!(favorites.track_ids(), vec![TrackId::new("9")]);
    assert!(favorites.created_at.is_none());
}

#[test]
fn test_play_favorites_playlist() {
    let mut test = TestStore::new();
    test.store.add_to_favorites(create_test_track("1")).unwrap();

    let playing = test.store.play_playlist(&PlaylistId::favorites()).unwrap();
    assert_eq!(playing.tracks.len(), 1);

    // Favorites stay live while current
    test.store.add_to_favorites(create_test_track("2")).unwrap();
    assert_eq!(test.store.current_playlist().unwrap().tracks.len(), 2);
}

#[test]
fn test_corrupt_data_is_treated_as_empty() {
    init_tracing();
    let mut backend = MemoryStore::new();
    backend.set(PLAYLISTS_KEY, "{not json").unwrap();
    backend.set(FAVORITES_KEY, "[]").unwrap();

    let mut store = PlaylistStore::open(backend).expect("corrupt data must not fail open");
    assert!(store.playlists().is_empty());

    // The next write replaces the corrupt document
    store.create_playlist(CreatePlaylist::named("Fresh")).unwrap();
    let backend = store.into_inner();
    let raw = backend.get(PLAYLISTS_KEY).unwrap().unwrap();
    assert!(raw.contains("Fresh"));
}

/// Memory backend whose writes can be switched off
#[derive(Default)]
struct FlakyStore {
    inner: MemoryStore,
    fail_writes: bool,
}

impl KeyValueStore for FlakyStore {
    fn get(&self, key: &str) -> aurora_storage::Result<Option<String>> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> aurora_storage::Result<()> {
        if self.fail_writes {
            return Err(StorageError::Io(std::io::Error::other("disk full")));
        }
        self.inner.set(key, value)
    }

    fn remove(&mut self, key: &str) -> aurora_storage::Result<()> {
        self.inner.remove(key)
    }
}

#[test]
fn test_failed_write_leaves_store_unchanged() {
    init_tracing();
    let mut store = PlaylistStore::open(FlakyStore::default()).unwrap();
    let playlist = store.create_playlist(CreatePlaylist::named("Mix")).unwrap();
    store.add_to_favorites(create_test_track("1")).unwrap();
    store.play_playlist(&playlist.id).unwrap();

    let mut backend = store.into_inner();
    backend.fail_writes = true;
    let mut store = PlaylistStore::open(backend).unwrap();
    store.play_playlist(&playlist.id).unwrap();

    assert!(matches!(
        store.create_playlist(CreatePlaylist::named("Other")),
        Err(AuroraError::Storage(_))
    ));
    assert!(store
        .add_to_playlist(&playlist.id, create_test_track("2"))
        .is_err());
    assert!(store
        .update_playlist(
            &playlist.id,
            UpdatePlaylist {
                name: Some("Renamed".to_string()),
                description: None,
            },
        )
        .is_err());
    assert!(store.delete_playlist(&playlist.id).is_err());
    assert!(store.add_to_favorites(create_test_track("3")).is_err());
    assert!(store.remove_from_favorites(&TrackId::new("1")).is_err());

    assert_eq!(store.playlists().len(), 1);
    assert_eq!(store.playlists()[0], playlist);
    assert_eq!(store.current_playlist().map(|p| p.id), Some(playlist.id));
    assert_eq!(store.favorites().len(), 1);
    assert!(store.is_favorite(&TrackId::new("1")));
}
