//! Service-side playlist and current song state

use super::config::SessionConfig;
use super::error::SessionError;
use crate::artwork::ArtworkEncoder;
use crate::model::{Playlist, Song};
use crate::store::{PlaybackPrefs, PlaylistSource};

/// Last known playlist and current song, kept for the lifetime of the
/// playback service so it keeps working after the foreground app is gone.
///
/// The playlist is loaded lazily from `S`; the last played song id comes
/// from `P`. Album art of the current song is re-encoded on every change
/// and cached until the next one.
pub struct PlaylistSession<S: PlaylistSource, P: PlaybackPrefs> {
    config: SessionConfig,
    source: S,
    prefs: P,
    encoder: ArtworkEncoder,
    playlist: Option<Playlist>,
    current: Option<Song>,
    art: Option<Vec<u8>>,
}

impl<S: PlaylistSource, P: PlaybackPrefs> PlaylistSession<S, P> {
    /// Create an empty session; nothing is loaded until asked for
    pub fn new(config: SessionConfig, source: S, prefs: P) -> Self {
        let encoder = ArtworkEncoder::new().with_quality(config.jpeg_quality);

        Self {
            config,
            source,
            prefs,
            encoder,
            playlist: None,
            current: None,
            art: None,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Held playlist, if one has been loaded since the last reset
    pub fn playlist(&self) -> Option<&Playlist> {
        self.playlist.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.playlist.is_some()
    }

    /// Load the last playlist from the source unless one is already held
    pub fn ensure_loaded(&mut self) -> Result<&Playlist, SessionError> {
        if self.playlist.is_none() {
            let songs = self.source.playlist_songs()?;
            log::debug!("Loaded last playlist: {} songs", songs.len());
            self.playlist = Some(Playlist::from_songs(songs));
        }

        Ok(self.playlist.get_or_insert_with(Playlist::new))
    }

    /// Restore the current song after a service restart
    ///
    /// Does nothing if a current song is already set. Otherwise loads the
    /// playlist and picks the song matching the last played id, which may
    /// leave the current song empty.
    pub fn init_current_song(&mut self) -> Result<Option<&Song>, SessionError> {
        if self.current.is_none() {
            self.ensure_loaded()?;

            let song = match self.prefs.last_song_id()? {
                Some(id) => self.search_by_id(id).cloned(),
                None => {
                    log::debug!("No last played song id recorded");
                    None
                }
            };
            self.set_current_song(song);
        }

        Ok(self.current.as_ref())
    }

    /// Drop the held playlist so the next load fetches a fresh one
    ///
    /// Called when the foreground app starts and will send its own playlist.
    pub fn reset_playlist(&mut self) {
        log::debug!("Playlist reset");
        self.playlist = None;
    }

    pub fn current_song(&self) -> Option<&Song> {
        self.current.as_ref()
    }

    /// Replace the current song and refresh the cached album art
    pub fn set_current_song(&mut self, song: Option<Song>) {
        match &song {
            Some(song) => {
                log::debug!("Current song set to {}", song.id);
                self.art = self.encoder.encode_song_art(song);
            }
            None => {
                log::debug!("Current song cleared");
                if self.config.clear_art_on_none {
                    self.art = None;
                }
            }
        }

        self.current = song;
    }

    /// Re-encoded album art of the current song
    pub fn art(&self) -> Option<&[u8]> {
        self.art.as_deref()
    }

    /// Song after the current one, wrapping to the first
    pub fn next_song(&self) -> Result<&Song, SessionError> {
        let (playlist, current) = self.navigation()?;
        playlist
            .next_after(current.id)
            .ok_or(SessionError::SongNotInPlaylist { id: current.id })
    }

    /// Song before the current one, wrapping to the last
    pub fn prev_song(&self) -> Result<&Song, SessionError> {
        let (playlist, current) = self.navigation()?;
        playlist
            .prev_before(current.id)
            .ok_or(SessionError::SongNotInPlaylist { id: current.id })
    }

    /// Make the next song current
    pub fn skip_to_next(&mut self) -> Result<&Song, SessionError> {
        let next = self.next_song()?.clone();
        self.set_current_song(Some(next));
        self.current.as_ref().ok_or(SessionError::NoCurrentSong)
    }

    /// Make the previous song current
    pub fn skip_to_prev(&mut self) -> Result<&Song, SessionError> {
        let prev = self.prev_song()?.clone();
        self.set_current_song(Some(prev));
        self.current.as_ref().ok_or(SessionError::NoCurrentSong)
    }

    /// First song in the held playlist with this id
    pub fn search_by_id(&self, id: i64) -> Option<&Song> {
        match &self.playlist {
            Some(playlist) if !playlist.is_empty() => playlist.search_by_id(id),
            _ => {
                log::error!("Searched for song {} while the playlist is empty", id);
                None
            }
        }
    }

    fn navigation(&self) -> Result<(&Playlist, &Song), SessionError> {
        let playlist = match &self.playlist {
            Some(playlist) if !playlist.is_empty() => playlist,
            _ => {
                log::error!("Navigated while the playlist is empty");
                return Err(SessionError::EmptyPlaylist);
            }
        };
        let current = self.current.as_ref().ok_or(SessionError::NoCurrentSong)?;

        Ok((playlist, current))
    }
}
