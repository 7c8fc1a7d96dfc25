use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A single track as persisted by the application layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    /// Media store identifier
    pub id: i64,

    /// Track title
    #[serde(default)]
    pub title: String,

    /// Artist name
    #[serde(default)]
    pub artist: String,

    /// Album name
    #[serde(default)]
    pub album: String,

    /// Path to the album art image on disk (optional)
    #[serde(default, rename = "albumArtUri")]
    pub album_art_path: Option<PathBuf>,

    /// Content URI or file path of the audio itself
    #[serde(default)]
    pub track_uri: Option<String>,

    /// Track duration in milliseconds
    #[serde(default, rename = "duration")]
    pub duration_ms: u64,

    /// Last modification time, seconds since epoch
    #[serde(default)]
    pub date_modified: Option<i64>,
}

impl Song {
    /// Create a song with only an id; everything else empty
    pub fn new(id: i64) -> Self {
        Self {
            id,
            title: String::new(),
            artist: String::new(),
            album: String::new(),
            album_art_path: None,
            track_uri: None,
            duration_ms: 0,
            date_modified: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_album_art(mut self, path: impl Into<PathBuf>) -> Self {
        self.album_art_path = Some(path.into());
        self
    }

    /// True if an art path is set (the file may still be missing)
    pub fn has_album_art(&self) -> bool {
        self.album_art_path.is_some()
    }
}
