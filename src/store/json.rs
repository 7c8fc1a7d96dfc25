//! JSON file backends written by the application layer

use super::traits::{PlaybackPrefs, PlaylistSource};
use crate::model::Song;
use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Default key under which the last played song id is stored
pub const DEFAULT_SONG_ID_KEY: &str = "songId";

/// Playlist stored as a JSON array of songs
#[derive(Debug, Clone)]
pub struct JsonPlaylistFile {
    path: PathBuf,
}

impl JsonPlaylistFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PlaylistSource for JsonPlaylistFile {
    fn playlist_songs(&self) -> Result<Vec<Song>> {
        let Some(contents) = read_optional(&self.path)? else {
            log::debug!("No playlist file at {:?}, starting empty", self.path);
            return Ok(Vec::new());
        };

        let songs: Vec<Song> = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse playlist file: {}", self.path.display()))?;

        log::debug!("Read {} songs from {:?}", songs.len(), self.path);
        Ok(songs)
    }
}

/// Flat JSON object of preferences, e.g. `{"songId": 42}`
#[derive(Debug, Clone)]
pub struct JsonPrefsFile {
    path: PathBuf,
    song_id_key: String,
}

impl JsonPrefsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            song_id_key: DEFAULT_SONG_ID_KEY.to_string(),
        }
    }

    /// Read the song id from a different key
    pub fn with_song_id_key(mut self, key: impl Into<String>) -> Self {
        self.song_id_key = key.into();
        self
    }
}

impl PlaybackPrefs for JsonPrefsFile {
    fn last_song_id(&self) -> Result<Option<i64>> {
        let Some(contents) = read_optional(&self.path)? else {
            return Ok(None);
        };

        let prefs: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse prefs file: {}", self.path.display()))?;

        match prefs.get(&self.song_id_key) {
            None | Some(serde_json::Value::Null) => Ok(None),
            Some(value) => value.as_i64().map(Some).with_context(|| {
                format!(
                    "Preference '{}' in {} is not an integer: {}",
                    self.song_id_key,
                    self.path.display(),
                    value
                )
            }),
        }
    }
}

/// Read a file to string, treating "not found" as absence
fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
    }
}
