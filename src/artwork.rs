//! Album art re-encoding for the current song
//!
//! Decodes the art file a song points at and re-encodes it as a baseline
//! JPEG, so notification and UI surfaces always receive the same format.

use crate::model::Song;
use anyhow::{Context, Result};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageReader};
use std::io::Cursor;
use std::path::Path;

/// Default JPEG quality for re-encoded art
pub const DEFAULT_JPEG_QUALITY: u8 = 100;

/// Decodes album art files and re-encodes them as JPEG
#[derive(Debug, Clone, Copy)]
pub struct ArtworkEncoder {
    quality: u8,
}

impl ArtworkEncoder {
    /// Create an encoder with the default quality
    pub fn new() -> Self {
        Self {
            quality: DEFAULT_JPEG_QUALITY,
        }
    }

    /// Set JPEG quality, clamped to 1..=100
    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = quality.clamp(1, 100);
        self
    }

    pub fn quality(&self) -> u8 {
        self.quality
    }

    /// Decode an image file and re-encode it as JPEG
    pub fn encode_file(&self, path: &Path) -> Result<Vec<u8>> {
        // Art cache files usually have no extension, so sniff the format
        let img = ImageReader::open(path)
            .with_context(|| format!("Failed to open album art: {}", path.display()))?
            .with_guessed_format()
            .with_context(|| format!("Failed to read album art: {}", path.display()))?
            .decode()
            .with_context(|| format!("Failed to decode album art: {}", path.display()))?;

        encode_jpeg(&img, self.quality)
    }

    /// Re-encoded art for a song, or None if it has none or it can't be read
    pub fn encode_song_art(&self, song: &Song) -> Option<Vec<u8>> {
        let path = song.album_art_path.as_deref()?;

        if !path.exists() {
            log::debug!("Album art for song {} not found at {:?}", song.id, path);
            return None;
        }

        match self.encode_file(path) {
            Ok(bytes) => {
                log::debug!("Encoded album art for song {} ({} bytes)", song.id, bytes.len());
                Some(bytes)
            }
            Err(e) => {
                log::warn!("Album art for song {} unavailable: {:#}", song.id, e);
                None
            }
        }
    }
}

impl Default for ArtworkEncoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a DynamicImage as baseline JPEG with given quality
fn encode_jpeg(img: &DynamicImage, quality: u8) -> Result<Vec<u8>> {
    // JPEG has no alpha channel
    let rgb = DynamicImage::ImageRgb8(img.to_rgb8());

    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);
    rgb.write_with_encoder(encoder)
        .context("Failed to encode JPEG")?;
    Ok(buffer.into_inner())
}
