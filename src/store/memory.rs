//! In-memory store for embedders that already hold the data

use super::traits::{PlaybackPrefs, PlaylistSource};
use crate::model::Song;
use anyhow::Result;
use std::cell::RefCell;

/// Playlist and prefs kept in memory; contents may change between loads
#[derive(Debug, Default)]
pub struct MemoryStore {
    songs: RefCell<Vec<Song>>,
    last_song_id: RefCell<Option<i64>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_songs(songs: Vec<Song>) -> Self {
        Self {
            songs: RefCell::new(songs),
            last_song_id: RefCell::new(None),
        }
    }

    pub fn set_songs(&self, songs: Vec<Song>) {
        *self.songs.borrow_mut() = songs;
    }

    pub fn set_last_song_id(&self, id: Option<i64>) {
        *self.last_song_id.borrow_mut() = id;
    }
}

impl PlaylistSource for MemoryStore {
    fn playlist_songs(&self) -> Result<Vec<Song>> {
        Ok(self.songs.borrow().clone())
    }
}

impl PlaybackPrefs for MemoryStore {
    fn last_song_id(&self) -> Result<Option<i64>> {
        Ok(*self.last_song_id.borrow())
    }
}
