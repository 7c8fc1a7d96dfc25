//! Session configuration

use crate::artwork::DEFAULT_JPEG_QUALITY;

/// Configuration for a playback state session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// JPEG quality used when re-encoding album art (1-100)
    pub jpeg_quality: u8,

    /// Whether clearing the current song also drops the cached art bytes
    pub clear_art_on_none: bool,
}

impl SessionConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self {
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            clear_art_on_none: true,
        }
    }

    /// Set album art JPEG quality
    pub fn with_jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = quality;
        self
    }

    /// Keep stale art bytes around when the current song is cleared
    pub fn with_clear_art_on_none(mut self, clear: bool) -> Self {
        self.clear_art_on_none = clear;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}
