//! Persistence collaborators
//!
//! The playlist and the last played song id are owned by the application
//! layer. This module only reads them, through a trait-based abstraction
//! so the session can run against files or in-memory data.

mod json;
mod memory;
mod traits;

pub use json::{JsonPlaylistFile, JsonPrefsFile, DEFAULT_SONG_ID_KEY};
pub use memory::MemoryStore;
pub use traits::{PlaybackPrefs, PlaylistSource};
