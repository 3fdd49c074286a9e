//! Error types for Keepsake

use thiserror::Error;

/// Main error type for Keepsake operations
#[derive(Error, Debug)]
pub enum KeepsakeError {
    /// The media resource could not begin playing (autoplay policy,
    /// missing or corrupt source, decode failure)
    #[error("Playback failed to start: {0}")]
    PlaybackStart(String),

    /// A track index outside the playlist was requested
    #[error("Track index {index} out of range (playlist has {len} tracks)")]
    InvalidTrackIndex { index: usize, len: usize },

    /// A playlist must hold at least one track
    #[error("Playlist is empty")]
    EmptyPlaylist,

    /// Card content failed validation
    #[error("Invalid card content: {0}")]
    Content(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error during JSON serialization/deserialization
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using KeepsakeError
pub type KeepsakeResult<T> = Result<T, KeepsakeError>;
