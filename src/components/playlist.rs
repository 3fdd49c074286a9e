//! Playlist section - track cards, transport controls and index dots.
//!
//! The [`PlaylistPlayer`] lives inside this component's coroutine together
//! with the webview audio backend. Unmounting the section drops the player,
//! which tears down whatever is playing.

use dioxus::prelude::*;
use futures::StreamExt;
use keepsake_core::{format_time, KeepsakeResult, PlayerSnapshot, PlaylistPlayer, Track};

use crate::audio::WebviewAudio;
use crate::context::{
    use_content, use_now_playing, use_player_commands, use_player_snapshot, NowPlaying,
    PlayerCommand,
};

async fn apply_command(
    player: &mut PlaylistPlayer<WebviewAudio>,
    command: PlayerCommand,
) -> KeepsakeResult<()> {
    match command {
        PlayerCommand::Play(index) => player.play(index).await,
        PlayerCommand::Toggle(index) => player.toggle(index).await,
        PlayerCommand::Next => player.next().await,
        PlayerCommand::Previous => player.previous().await,
        PlayerCommand::Stop => {
            player.stop();
            Ok(())
        }
    }
}

fn indicator_class(active: bool) -> &'static str {
    if active {
        "track-indicator active"
    } else {
        "track-indicator"
    }
}

#[component]
pub fn PlaylistSection() -> Element {
    let content = use_content();
    let mut snapshot: Signal<PlayerSnapshot> = use_signal(PlayerSnapshot::default);
    let mut now_playing = use_now_playing();
    use_context_provider(|| snapshot);

    let tracks = content.playlist.tracks.clone();
    let player = use_coroutine(move |mut commands: UnboundedReceiver<PlayerCommand>| {
        let tracks = tracks.clone();
        async move {
            let mut player = PlaylistPlayer::new(tracks, WebviewAudio::new())
                .with_track_changed(move |index, title| {
                    tracing::info!(index, "Now playing: {}", title);
                    now_playing.set(NowPlaying(Some(title.to_string())));
                });

            loop {
                tokio::select! {
                    command = commands.next() => {
                        let Some(command) = command else { break };
                        if let Err(e) = apply_command(&mut player, command).await {
                            tracing::warn!(?command, "Playback command failed: {}", e);
                        }
                    }
                    Some(signal) = player.next_signal() => {
                        if let Err(e) = player.handle_signal(signal).await {
                            tracing::warn!("Auto-advance failed: {}", e);
                        }
                    }
                }

                snapshot.set(player.snapshot());
                if player.active_index().is_none() && now_playing.peek().0.is_some() {
                    now_playing.set(NowPlaying(None));
                }
            }

            player.shutdown();
        }
    });

    let snap = snapshot();
    let title = content.playlist.title.clone();
    let subtitle = content.playlist.subtitle.clone();
    let track_list: Vec<Track> = content.playlist.tracks.iter().cloned().collect();
    let main_target = snap.active.unwrap_or(0);
    let main_icon = if snap.active.is_some() { "⏸" } else { "▶" };

    rsx! {
        section { class: "playlist-section",
            div { class: "section-icon", "🎵" }
            h2 { class: "section-title", "{title}" }
            p { class: "section-subtitle", "{subtitle}" }

            {now_playing().0.map(|playing| rsx! {
                p { class: "now-playing-line", "♪ {playing}" }
            })}

            div { class: "track-list",
                for (index, track) in track_list.into_iter().enumerate() {
                    TrackCard { key: "{index}", index, track }
                }
            }

            div { class: "playlist-controls",
                button {
                    class: "control-btn",
                    onclick: move |_| player.send(PlayerCommand::Previous),
                    "⏮"
                }
                button {
                    class: "control-btn control-main",
                    onclick: move |_| player.send(PlayerCommand::Toggle(main_target)),
                    "{main_icon}"
                }
                button {
                    class: "control-btn",
                    onclick: move |_| player.send(PlayerCommand::Next),
                    "⏭"
                }
            }

            div { class: "track-indicators",
                for index in 0..content.playlist.tracks.len() {
                    button {
                        key: "{index}",
                        class: indicator_class(snap.is_active(index)),
                        onclick: move |_| player.send(PlayerCommand::Play(index)),
                    }
                }
            }
        }
    }
}

/// One track: cover, title, info and, while active, progress and times.
///
/// # Example
///
/// ```ignore
/// rsx! {
///     TrackCard { index: 0, track: track.clone() }
/// }
/// ```
#[component]
pub fn TrackCard(index: usize, track: Track) -> Element {
    let snapshot = use_player_snapshot();
    let player = use_player_commands();

    let snap = snapshot();
    let active = snap.is_active(index);
    let card_class = if active { "track-card playing" } else { "track-card" };
    let toggle_icon = if active { "⏸" } else { "▶" };
    let progress = snap.progress_percent();
    let position = format_time(snap.position_seconds);
    let duration = format_time(snap.duration_seconds);

    rsx! {
        div { class: "{card_class}",
            div { class: "track-cover",
                img { src: "{track.cover_image_source}", alt: "{track.title}" }
                if active {
                    span { class: "now-playing-badge", "Now Playing" }
                }
            }

            div { class: "track-body",
                h3 { class: "track-title", "{track.title}" }
                p { class: "track-info", "{track.info}" }

                if active {
                    div { class: "track-progress",
                        div { class: "track-progress-fill", style: "width: {progress}%;" }
                    }
                    div { class: "track-times",
                        span { "{position}" }
                        span { "{duration}" }
                    }
                }
            }

            button {
                class: "track-toggle",
                onclick: move |_| player.send(PlayerCommand::Toggle(index)),
                "{toggle_icon}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_class() {
        assert_eq!(indicator_class(true), "track-indicator active");
        assert_eq!(indicator_class(false), "track-indicator");
    }
}
