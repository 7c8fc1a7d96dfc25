//! Sweyer playback state - service-side playlist and current song holder
//!
//! Keeps the last known playlist and the currently playing song alive for
//! a long-running playback service, answers next/previous/lookup queries,
//! and caches the current song's album art as JPEG bytes.

pub mod artwork;
pub mod model;
pub mod session;
pub mod store;

pub use artwork::ArtworkEncoder;
pub use model::{Playlist, Song};
pub use session::{PlaylistSession, SessionConfig, SessionError};
