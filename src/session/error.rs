use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("playlist is empty")]
    EmptyPlaylist,

    #[error("no current song is set")]
    NoCurrentSong,

    #[error("current song {id} is not in the playlist")]
    SongNotInPlaylist { id: i64 },

    /// Playlist or prefs could not be read
    #[error(transparent)]
    Load(#[from] anyhow::Error),
}
