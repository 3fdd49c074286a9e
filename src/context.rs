//! Shared state for Keepsake components.
//!
//! The card content is immutable and provided once by `App`. The reveal
//! sequence and the playlist player each live inside a coroutine; components
//! talk to them by sending commands and read back plain snapshot signals.
//!
//! ## Usage
//!
//! ```ignore
//! // In any component below App
//! let content = use_content();
//! let reveal = use_reveal_state();
//! let commands = use_reveal_commands();
//!
//! commands.send(RevealCommand::ShowLetter);
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use keepsake_core::{CardContent, PlayerSnapshot, RevealState};

/// Commands understood by the reveal coroutine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealCommand {
    OpenEnvelope,
    ShowLetter,
    DismissLetter,
}

/// Commands understood by the playlist coroutine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    /// Index indicator click
    Play(usize),
    /// Per-track play/pause button
    Toggle(usize),
    Next,
    Previous,
    Stop,
}

/// Title of the track currently playing, shown outside the playlist.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NowPlaying(pub Option<String>);

/// Get the card content loaded at startup.
pub fn get_content() -> CardContent {
    crate::get_content()
}

/// Hook to access the card content.
pub fn use_content() -> Arc<CardContent> {
    use_context::<Arc<CardContent>>()
}

/// Hook to read the reveal flags.
///
/// Updated by the reveal coroutine after every command and timer.
pub fn use_reveal_state() -> Signal<RevealState> {
    use_context::<Signal<RevealState>>()
}

/// Hook to send commands to the reveal coroutine.
pub fn use_reveal_commands() -> Coroutine<RevealCommand> {
    use_coroutine_handle::<RevealCommand>()
}

/// Hook to read the "now playing" title.
pub fn use_now_playing() -> Signal<NowPlaying> {
    use_context::<Signal<NowPlaying>>()
}

/// Hook to read the player snapshot (progress, active track).
///
/// Only available below `PlaylistSection`.
pub fn use_player_snapshot() -> Signal<PlayerSnapshot> {
    use_context::<Signal<PlayerSnapshot>>()
}

/// Hook to send commands to the playlist coroutine.
pub fn use_player_commands() -> Coroutine<PlayerCommand> {
    use_coroutine_handle::<PlayerCommand>()
}
