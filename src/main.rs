use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use sweyer_playback_state::store::{JsonPlaylistFile, JsonPrefsFile};
use sweyer_playback_state::{PlaylistSession, SessionConfig, SessionError, Song};

#[derive(Parser, Debug)]
#[command(name = "sweyer-state")]
#[command(about = "Inspect persisted Sweyer playlist and current song state", long_about = None)]
struct Args {
    /// Path to the persisted playlist (JSON array of songs)
    #[arg(
        short = 'p',
        long,
        default_value = "~/.local/share/sweyer/playlist.json"
    )]
    playlist: String,

    /// Path to the preferences file holding the last played song id
    #[arg(long, default_value = "~/.local/share/sweyer/prefs.json")]
    prefs: String,

    /// Use this song id instead of the one stored in prefs
    #[arg(short = 's', long)]
    song_id: Option<i64>,

    /// Write the current song's re-encoded album art here
    #[arg(short = 'o', long)]
    art_out: Option<PathBuf>,

    /// JPEG quality for re-encoded album art
    #[arg(long, default_value = "100", value_parser = clap::value_parser!(u8).range(1..=100))]
    quality: u8,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Expand ~ in paths
    let playlist_path = PathBuf::from(shellexpand::tilde(&args.playlist).into_owned());
    let prefs_path = PathBuf::from(shellexpand::tilde(&args.prefs).into_owned());

    let source = JsonPlaylistFile::new(&playlist_path);
    let prefs = JsonPrefsFile::new(&prefs_path);
    let config = SessionConfig::new().with_jpeg_quality(args.quality);
    let mut session = PlaylistSession::new(config, source, prefs);

    let count = session.ensure_loaded()?.len();
    log::info!("Playlist loaded: {} songs from {:?}", count, playlist_path);

    match args.song_id {
        Some(id) => {
            let song = session.search_by_id(id).cloned();
            if song.is_none() {
                log::warn!("Song {} is not in the playlist", id);
            }
            session.set_current_song(song);
        }
        None => {
            session.init_current_song()?;
        }
    }

    let Some(current) = session.current_song() else {
        log::info!("No current song");
        return Ok(());
    };
    log::info!("Current:  {}", describe(current));

    for (label, result) in [("Next:    ", session.next_song()), ("Previous:", session.prev_song())] {
        match result {
            Ok(song) => log::info!("{} {}", label, describe(song)),
            Err(e @ SessionError::SongNotInPlaylist { .. }) => log::warn!("{} {}", label, e),
            Err(e) => return Err(e.into()),
        }
    }

    match (session.art(), &args.art_out) {
        (Some(bytes), Some(out)) => {
            fs::write(out, bytes)
                .with_context(|| format!("Failed to write album art: {}", out.display()))?;
            log::info!("Wrote {} bytes of album art to {:?}", bytes.len(), out);
        }
        (Some(bytes), None) => log::info!("Album art: {} bytes", bytes.len()),
        (None, _) => log::info!("Album art: none"),
    }

    Ok(())
}

fn describe(song: &Song) -> String {
    if song.artist.is_empty() {
        format!("[{}] {}", song.id, song.title)
    } else {
        format!("[{}] {} - {}", song.id, song.artist, song.title)
    }
}
