//! Collaborator traits the session loads its state through

use crate::model::Song;
use anyhow::Result;

/// Source of the last persisted playlist - allows swapping file and in-memory backends
pub trait PlaylistSource {
    /// Songs of the last playlist, in playback order
    fn playlist_songs(&self) -> Result<Vec<Song>>;
}

/// Preferences written by the application layer
pub trait PlaybackPrefs {
    /// Id of the song that was playing last, if one was recorded
    fn last_song_id(&self) -> Result<Option<i64>>;
}

impl<T: PlaylistSource + ?Sized> PlaylistSource for &T {
    fn playlist_songs(&self) -> Result<Vec<Song>> {
        (**self).playlist_songs()
    }
}

impl<T: PlaybackPrefs + ?Sized> PlaybackPrefs for &T {
    fn last_song_id(&self) -> Result<Option<i64>> {
        (**self).last_song_id()
    }
}
