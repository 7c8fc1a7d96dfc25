use super::Song;

/// Ordered list of songs; insertion order is playback order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Playlist {
    songs: Vec<Song>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new() -> Self {
        Self { songs: Vec::new() }
    }

    pub fn from_songs(songs: Vec<Song>) -> Self {
        Self { songs }
    }

    /// Append a song at the end
    pub fn push(&mut self, song: Song) {
        self.songs.push(song);
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    /// Number of songs in this playlist
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// First song whose id matches
    pub fn search_by_id(&self, id: i64) -> Option<&Song> {
        self.songs.iter().find(|s| s.id == id)
    }

    /// Index of the first song whose id matches
    pub fn position_of(&self, id: i64) -> Option<usize> {
        self.songs.iter().position(|s| s.id == id)
    }

    /// Song following `id`, wrapping from last to first
    pub fn next_after(&self, id: i64) -> Option<&Song> {
        let index = self.position_of(id)?;
        self.songs.get((index + 1) % self.songs.len())
    }

    /// Song preceding `id`, wrapping from first to last
    pub fn prev_before(&self, id: i64) -> Option<&Song> {
        let index = self.position_of(id)?;
        let prev = if index == 0 { self.songs.len() - 1 } else { index - 1 };
        self.songs.get(prev)
    }
}
