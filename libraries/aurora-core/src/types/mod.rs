//! Domain types
mod ids;
mod playlist;
mod track;

pub use ids::{PlaylistId, SourceLocator, TrackId};
pub use playlist::{CreatePlaylist, Playlist, UpdatePlaylist};
pub use track::{Track, UNKNOWN_ARTIST};
