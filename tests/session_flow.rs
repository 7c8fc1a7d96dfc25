use image::{Rgb, RgbImage};
use std::fs;
use std::path::{Path, PathBuf};
use sweyer_playback_state::store::{JsonPlaylistFile, JsonPrefsFile};
use sweyer_playback_state::{PlaylistSession, SessionConfig, SessionError, Song};
use tempfile::TempDir;

/// Write a small PNG cover into the temp dir
fn write_cover(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    let img = RgbImage::from_pixel(32, 32, Rgb([10, 120, 220]));
    img.save_with_format(&path, image::ImageFormat::Png)
        .expect("Failed to write cover");
    path
}

/// Persist a playlist and prefs the way the application layer does
fn write_state(dir: &Path, songs: &[Song], last_song_id: i64) -> (PathBuf, PathBuf) {
    let playlist_path = dir.join("playlist.json");
    let prefs_path = dir.join("prefs.json");

    fs::write(&playlist_path, serde_json::to_string(songs).unwrap()).unwrap();
    fs::write(&prefs_path, format!(r#"{{"songId": {}}}"#, last_song_id)).unwrap();

    (playlist_path, prefs_path)
}

fn test_songs(dir: &Path) -> Vec<Song> {
    let cover = write_cover(dir, "cover1");
    vec![
        Song::new(1).with_title("One").with_album_art(&cover),
        Song::new(2).with_title("Two"),
        Song::new(3)
            .with_title("Three")
            .with_album_art(dir.join("missing_cover")),
    ]
}

#[test]
fn test_restore_after_service_restart() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let songs = test_songs(temp_dir.path());
    let (playlist_path, prefs_path) = write_state(temp_dir.path(), &songs, 1);

    let mut session = PlaylistSession::new(
        SessionConfig::new(),
        JsonPlaylistFile::new(&playlist_path),
        JsonPrefsFile::new(&prefs_path),
    );

    let current = session.init_current_song().unwrap().cloned();
    assert_eq!(current.as_ref().map(|s| s.title.as_str()), Some("One"));

    // Song 1 has a readable cover
    let art = session.art().expect("Art should be cached");
    assert!(!art.is_empty());
    assert_eq!(&art[..2], &[0xFF, 0xD8]);

    assert_eq!(session.next_song().unwrap().id, 2);
    assert_eq!(session.prev_song().unwrap().id, 3);
}

#[test]
fn test_art_follows_current_song() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let songs = test_songs(temp_dir.path());
    let (playlist_path, prefs_path) = write_state(temp_dir.path(), &songs, 1);

    let mut session = PlaylistSession::new(
        SessionConfig::new(),
        JsonPlaylistFile::new(&playlist_path),
        JsonPrefsFile::new(&prefs_path),
    );
    session.init_current_song().unwrap();
    assert!(session.art().is_some());

    // No art path
    session.skip_to_next().unwrap();
    assert!(session.art().is_none());

    // Art path pointing at a missing file
    session.skip_to_next().unwrap();
    assert_eq!(session.current_song().map(|s| s.id), Some(3));
    assert!(session.art().is_none());

    // Wraps back to the song with art
    session.skip_to_next().unwrap();
    assert!(session.art().is_some());

    session.set_current_song(None);
    assert!(session.art().is_none());
}

#[test]
fn test_keep_art_when_cleared() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let songs = test_songs(temp_dir.path());
    let (playlist_path, prefs_path) = write_state(temp_dir.path(), &songs, 1);

    let config = SessionConfig::new().with_clear_art_on_none(false);
    let mut session = PlaylistSession::new(
        config,
        JsonPlaylistFile::new(&playlist_path),
        JsonPrefsFile::new(&prefs_path),
    );
    session.init_current_song().unwrap();

    session.set_current_song(None);
    assert!(session.current_song().is_none());
    assert!(session.art().is_some());
}

#[test]
fn test_reset_picks_up_new_playlist() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let songs = test_songs(temp_dir.path());
    let (playlist_path, prefs_path) = write_state(temp_dir.path(), &songs, 2);

    let mut session = PlaylistSession::new(
        SessionConfig::new(),
        JsonPlaylistFile::new(&playlist_path),
        JsonPrefsFile::new(&prefs_path),
    );
    assert_eq!(session.ensure_loaded().unwrap().len(), 3);

    let replacement = vec![Song::new(10), Song::new(2), Song::new(11)];
    fs::write(&playlist_path, serde_json::to_string(&replacement).unwrap()).unwrap();
    assert_eq!(session.ensure_loaded().unwrap().len(), 3);

    session.reset_playlist();
    let loaded = session.ensure_loaded().unwrap();
    assert_eq!(loaded.songs(), replacement.as_slice());

    session.init_current_song().unwrap();
    assert_eq!(session.next_song().unwrap().id, 11);
    assert_eq!(session.prev_song().unwrap().id, 10);
}

#[test]
fn test_missing_state_files() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let mut session = PlaylistSession::new(
        SessionConfig::new(),
        JsonPlaylistFile::new(temp_dir.path().join("playlist.json")),
        JsonPrefsFile::new(temp_dir.path().join("prefs.json")),
    );

    assert!(session.init_current_song().unwrap().is_none());
    assert!(session.search_by_id(1).is_none());
    assert!(matches!(session.next_song(), Err(SessionError::EmptyPlaylist)));
}

#[test]
fn test_corrupt_playlist_surfaces_load_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let playlist_path = temp_dir.path().join("playlist.json");
    fs::write(&playlist_path, "[{\"id\": ").unwrap();

    let mut session = PlaylistSession::new(
        SessionConfig::new(),
        JsonPlaylistFile::new(&playlist_path),
        JsonPrefsFile::new(temp_dir.path().join("prefs.json")),
    );

    assert!(matches!(session.ensure_loaded(), Err(SessionError::Load(_))));
    assert!(!session.is_loaded());
}
