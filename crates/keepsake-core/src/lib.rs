//! Keepsake Core Library
//!
//! The stateful heart of an animated greeting card: the envelope reveal
//! sequence and a single-session playlist player.
//!
//! ## Overview
//!
//! - [`RevealController`]: envelope → letter → main content, with
//!   cancellable timers
//! - [`PlaylistPlayer`]: at most one playing track, wraparound
//!   previous/next, auto-advance on completion
//! - [`MediaBackend`]: the audio capability the player is written against
//! - [`CardContent`]: text, photos and tracks, loaded from JSON
//!
//! ## Quick Start
//!
//! ```ignore
//! use keepsake_core::{CardContent, PlaylistPlayer, RevealController};
//!
//! let content = CardContent::load("card.json")?;
//!
//! let mut reveal = RevealController::default();
//! reveal.open_envelope();
//!
//! let mut player = PlaylistPlayer::new(content.playlist.tracks.clone(), backend);
//! player.play(0).await?;
//! ```

pub mod content;
pub mod error;
pub mod format;
pub mod hearts;
pub mod media;
pub mod playlist;
pub mod reveal;

// Re-exports
pub use content::{CardContent, Note, NotePalette, Photo, Playlist, Track};
pub use error::{KeepsakeError, KeepsakeResult};
pub use format::{format_time, progress_percent};
pub use hearts::{Heart, HeartColor, HeartTrail};
pub use media::{MediaBackend, MediaResource, MediaSignal, SessionId, SignalSink, TaggedSignal};
pub use playlist::{PlaybackSession, PlayerEvent, PlayerSnapshot, PlaylistPlayer};
pub use reveal::{
    MainEmphasis, RevealController, RevealEvent, RevealPhase, RevealState, RevealTiming,
};
