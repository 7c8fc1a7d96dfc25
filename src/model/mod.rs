//! Data model shared by the store and the session
//!
//! Mirrors what the application layer persists: songs and the ordered
//! playlist they are played from.

mod playlist;
mod song;

pub use playlist::Playlist;
pub use song::Song;
