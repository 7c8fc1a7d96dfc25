//! Playback state held on the service side
//!
//! One `PlaylistSession` is created when the playback service starts and
//! dropped when it stops. Callers on the service and UI side share it by
//! reference; wrap it in a `Mutex` if those run on different threads.

pub mod config;
mod error;
mod state;

pub use config::SessionConfig;
pub use error::SessionError;
pub use state::PlaylistSession;
